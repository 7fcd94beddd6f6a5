//! Pure scroll geometry: navbar/button flags, the active section lookup and
//! the offsets used for parallax and anchor jumps.

use crate::config::FxConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollFlags {
    pub navbar_scrolled: bool,
    pub scroll_top_visible: bool,
}

impl ScrollFlags {
    pub fn at(y: f64, cfg: &FxConfig) -> Self {
        Self {
            navbar_scrolled: y > cfg.nav_threshold,
            scroll_top_visible: y > cfg.scroll_top_threshold,
        }
    }
}

/// Layout of one `<section>` in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, pos: f64) -> bool {
        pos >= self.top && pos < self.top + self.height
    }

    /// The `href` a nav link must carry to point here.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Index of the first section containing `y + probe_offset`.
pub fn active_section(y: f64, sections: &[SectionBounds], cfg: &FxConfig) -> Option<usize> {
    let probe = y + cfg.section_probe_offset;
    sections.iter().position(|s| s.contains(probe))
}

/// Vertical shift for the `index`-th decorative glow.
pub fn glow_parallax(scrolled: f64, index: usize) -> f64 {
    scrolled * (index as f64 + 1.0) * 0.1
}

/// Document offset to scroll to so an anchor lands below the fixed header.
pub fn anchor_scroll_target(rect_top: f64, page_y: f64, cfg: &FxConfig) -> f64 {
    rect_top + page_y - cfg.header_offset
}
