use std::rc::Rc;

use web_sys::{Element, HtmlElement, Window};

use crate::config::{selector, FxConfig};
use crate::error::FxError;
use crate::scroll::{active_section, glow_parallax, ScrollFlags, SectionBounds};

use super::dom;

/// Reacts to every scroll tick: navbar/button classes, the active nav link
/// and the glow parallax.
pub struct ScrollReactor {
    root: Element,
    navbar: HtmlElement,
    scroll_top: HtmlElement,
    links: Vec<HtmlElement>,
    glows: Vec<HtmlElement>,
    config: FxConfig,
}

impl ScrollReactor {
    /// `root` scopes the section, link and glow lookups.
    pub fn new(
        root: Element,
        navbar: HtmlElement,
        scroll_top: HtmlElement,
        config: FxConfig,
    ) -> Result<Self, FxError> {
        let links = dom::query_all(&root, selector::NAV_LINK)?;
        let glows = dom::query_all(&root, selector::GLOW)?;
        Ok(Self {
            root,
            navbar,
            scroll_top,
            links,
            glows,
            config,
        })
    }

    pub fn install(self, window: &Window) -> Result<Rc<Self>, FxError> {
        let this = Rc::new(self);
        let handler = Rc::clone(&this);
        let win = window.clone();
        dom::listen(window, "scroll", move |_| {
            let y = win.scroll_y().unwrap_or(0.0);
            if let Err(err) = handler.on_scroll(y) {
                log::warn!("scroll update failed: {err}");
            }
        })?;
        Ok(this)
    }

    pub fn on_scroll(&self, y: f64) -> Result<(), FxError> {
        let flags = ScrollFlags::at(y, &self.config);
        dom::set_class(&self.navbar, "scrolled", flags.navbar_scrolled)?;
        dom::set_class(&self.scroll_top, "visible", flags.scroll_top_visible)?;

        let sections = self.sections()?;
        let active = active_section(y, &sections, &self.config).map(|i| sections[i].href());
        for link in &self.links {
            let is_active = active.is_some() && link.get_attribute("href") == active;
            dom::set_class(link, "active", is_active)?;
        }

        for (i, glow) in self.glows.iter().enumerate() {
            let shift = glow_parallax(y, i);
            dom::set_style(glow, "transform", &format!("translateY({shift}px)"))?;
        }
        Ok(())
    }

    fn sections(&self) -> Result<Vec<SectionBounds>, FxError> {
        Ok(dom::query_all(&self.root, selector::SECTION)?
            .iter()
            .map(|s| {
                SectionBounds::new(s.id(), f64::from(s.offset_top()), f64::from(s.offset_height()))
            })
            .collect())
    }
}
