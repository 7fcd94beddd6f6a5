//! Page-wide thresholds, durations and selectors.
//!
//! Everything tunable lives in [`FxConfig`]. The browser shell starts from
//! `FxConfig::default()` and applies any `data-fx-*` attributes found on
//! `<body>` through [`FxConfig::with_overrides`].

use crate::error::FxError;

/// Element ids, class names and storage keys shared with the markup.
pub mod selector {
    pub const NAVBAR: &str = "navbar";
    pub const NAV_TOGGLE: &str = "navToggle";
    pub const SCROLL_TOP: &str = "scrollTop";
    pub const THEME_TOGGLE: &str = "themeToggle";
    pub const CONTACT_FORM: &str = "contactForm";

    pub const NAV_LINKS: &str = ".nav-links";
    pub const NAV_LINK: &str = ".nav-link";
    pub const SECTION: &str = "section";
    pub const STAT_NUMBER: &str = ".stat-number";
    pub const SUBMIT_BTN: &str = ".submit-btn";
    pub const HERO_IMAGE: &str = ".hero-image";
    pub const GLOW: &str = ".glow";
    pub const SKILL_ITEM: &str = ".skill-item";
    pub const TILT_CARD: &str = ".project-card";
    pub const GLOW_CARDS: &str = ".skill-item, .project-card, .project-card-ui";
    pub const STAGGER_CARDS: &str = ".project-card, .project-card-ui";
    pub const SOCIAL_ICON: &str = ".social-icon-animated";
    pub const LOADER: &str = ".loading";
    pub const BADGES: &str = ".tool-pro, .interest-pro";
    pub const ANCHORS: &str = "a[href^=\"#\"]";
    pub const INTERACTIVE: &str =
        "a, button, .skill-item, .project-card, .project-card-ui, .social-icon-animated";
    pub const REVEAL: &str = ".skill-item, .project-card, .project-card-ui, .about-content, \
        .about-image, .contact-content, .contact-form-wrapper, .tech-stacks-pro, .interest-areas-pro";

    pub const NATURE_BODY_CLASS: &str = "nature-theme";
    pub const PARTICLES_CONTAINER: &str = "cosmic-particles";
    pub const LEAVES_CONTAINER: &str = "leaves-container";

    /// localStorage key holding the theme preference.
    pub const THEME_KEY: &str = "theme";
}

#[derive(Debug, Clone, PartialEq)]
pub struct FxConfig {
    /// Navbar gets `scrolled` strictly above this offset (px).
    pub nav_threshold: f64,
    /// Scroll-to-top button shows strictly above this offset (px).
    pub scroll_top_threshold: f64,
    /// Added to `scrollY` before locating the active section (px).
    pub section_probe_offset: f64,
    /// Fixed header height subtracted from anchor scroll targets (px).
    pub header_offset: f64,

    pub theme_cover_ms: u32,
    pub theme_hold_ms: u32,
    pub theme_exit_ms: u32,

    pub leaf_initial_count: u32,
    pub leaf_stagger_ms: u32,
    pub leaf_interval_ms: u32,
    pub leaf_ttl_ms: u32,

    pub counter_duration_ms: f64,
    pub counter_frame_ms: f64,

    pub cursor_lag_ms: u32,
    pub preloader_delay_ms: u32,
    pub press_ms: u32,

    pub form_sending_ms: u32,
    pub form_sent_ms: u32,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            nav_threshold: 100.0,
            scroll_top_threshold: 500.0,
            section_probe_offset: 200.0,
            header_offset: 80.0,
            theme_cover_ms: 800,
            theme_hold_ms: 200,
            theme_exit_ms: 800,
            leaf_initial_count: 8,
            leaf_stagger_ms: 400,
            leaf_interval_ms: 1200,
            leaf_ttl_ms: 15_000,
            counter_duration_ms: 3000.0,
            counter_frame_ms: 16.0,
            cursor_lag_ms: 100,
            preloader_delay_ms: 500,
            press_ms: 200,
            form_sending_ms: 1500,
            form_sent_ms: 2000,
        }
    }
}

impl FxConfig {
    /// Total length of a theme transition, overlay in to overlay gone.
    pub fn theme_total_ms(&self) -> u32 {
        self.theme_cover_ms + self.theme_hold_ms + self.theme_exit_ms
    }

    /// Apply `(key, value)` overrides where `key` is the dataset name without
    /// the `fx-` prefix (`"leaf-interval"`, `"nav-threshold"`, ...).
    ///
    /// Unknown keys are ignored. The first unparsable value aborts with
    /// [`FxError::Config`] and leaves `self` untouched.
    pub fn with_overrides<'a, I>(&self, pairs: I) -> Result<Self, FxError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut next = self.clone();
        for (key, value) in pairs {
            let value = value.trim();
            match key {
                "nav-threshold" => next.nav_threshold = parse_f64(key, value)?,
                "scroll-top-threshold" => next.scroll_top_threshold = parse_f64(key, value)?,
                "leaf-interval" => next.leaf_interval_ms = parse_ms(key, value)?,
                "leaf-ttl" => next.leaf_ttl_ms = parse_ms(key, value)?,
                "counter-duration" => next.counter_duration_ms = parse_f64(key, value)?,
                "cursor-lag" => next.cursor_lag_ms = parse_ms(key, value)?,
                other => log::debug!("ignoring unknown fx override {other:?}"),
            }
        }
        Ok(next)
    }
}

fn parse_f64(key: &str, value: &str) -> Result<f64, FxError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| config_error(key, value))
}

fn parse_ms(key: &str, value: &str) -> Result<u32, FxError> {
    value.parse::<u32>().map_err(|_| config_error(key, value))
}

fn config_error(key: &str, value: &str) -> FxError {
    FxError::Config {
        key: key.to_owned(),
        value: value.to_owned(),
    }
}
