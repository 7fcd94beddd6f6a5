//! Interactivity for the portfolio page: scroll reactions, the cosmic/nature
//! theme switch with its particle systems, pointer effects and the contact
//! form routine.
//!
//! The top-level modules are plain Rust and run anywhere. The browser glue
//! in [`wasm`] only exists on `wasm32`.

pub mod config;
pub mod effects;
pub mod emitter;
pub mod error;
pub mod form;
pub mod scroll;
pub mod theme;

pub use config::FxConfig;
pub use error::FxError;
pub use theme::{Theme, ThemeController};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::config::selector;
    use crate::error::FxError;

    pub mod dom;
    pub mod effects;
    pub mod form;
    pub mod frame;
    pub mod leaves;
    pub mod nav;
    pub mod particles;
    pub mod scroll;
    pub mod storage;
    pub mod theme;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        console_log::init_with_level(level).ok();

        // A page without the expected chrome is logged, not thrown, so the
        // module still instantiates.
        if let Err(err) = boot() {
            log::error!("folio_fx not started: {err}");
        }
        Ok(())
    }

    /// Resolve the required elements, then install every handler.
    pub fn boot() -> Result<(), FxError> {
        let window = web_sys::window().ok_or(FxError::MissingElement("window"))?;
        let document = window.document().ok_or(FxError::MissingElement("document"))?;
        let body = document.body().ok_or(FxError::MissingElement("body"))?;
        let root = document
            .document_element()
            .ok_or(FxError::MissingElement("documentElement"))?;

        let navbar = dom::by_id(&document, selector::NAVBAR)?;
        let nav_toggle = dom::by_id(&document, selector::NAV_TOGGLE)?;
        let scroll_top = dom::by_id(&document, selector::SCROLL_TOP)?;

        let config = dom::load_config(&body);
        let rng = Rc::new(RefCell::new(dom::seeded_rng()));

        nav::install(&window, &document, nav_toggle, scroll_top.clone(), &config)?;
        let reactor = scroll::ScrollReactor::new(root, navbar, scroll_top, config.clone())?
            .install(&window)?;
        reactor.on_scroll(window.scroll_y().unwrap_or(0.0))?;

        let coordinator = theme::ThemeCoordinator::new(
            &document,
            &body,
            storage::LocalPreference,
            rng,
            config.clone(),
        )?;
        coordinator.install()?;
        // Keep the leaf emitter's timers alive for the page lifetime.
        std::mem::forget(coordinator);

        effects::install(&window, &document, &config)?;
        form::FormSimulator::install(&document, &config)?;

        log::info!("folio_fx ready");
        Ok(())
    }
}
