//! Drives a [`ThemeController`] from the toggle control and paints the
//! result: body class, overlay, particle systems.
//!
//! Each transition step is scheduled from the callback of the one before
//! it, so the swap always lands before the exit and the exit before the
//! lock is released.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::config::{selector, FxConfig};
use crate::error::FxError;
use crate::theme::{overlay_scene, PreferenceStore, Theme, ThemeController};

use super::dom;
use super::leaves::LeafEmitter;
use super::particles::ParticleField;

pub struct ThemeCoordinator<S> {
    controller: RefCell<ThemeController<S>>,
    document: Document,
    body: HtmlElement,
    control: Option<HtmlElement>,
    particles: ParticleField,
    leaves: LeafEmitter,
    rng: Rc<RefCell<SmallRng>>,
    config: FxConfig,
}

impl<S: PreferenceStore + 'static> ThemeCoordinator<S> {
    /// Build both particle systems and apply the stored theme without a
    /// transition.
    pub fn new(
        document: &Document,
        body: &HtmlElement,
        store: S,
        rng: Rc<RefCell<SmallRng>>,
        config: FxConfig,
    ) -> Result<Rc<Self>, FxError> {
        let controller = ThemeController::load(store);
        let particles = ParticleField::spawn(document, body, &mut *rng.borrow_mut())?;
        let leaves = LeafEmitter::new(document, body, Rc::clone(&rng), config.clone())?;
        let control = dom::optional_by_id(document, selector::THEME_TOGGLE);
        if control.is_none() {
            log::debug!("no #{} on page; theme stays fixed", selector::THEME_TOGGLE);
        }

        let this = Rc::new(Self {
            controller: RefCell::new(controller),
            document: document.clone(),
            body: body.clone(),
            control,
            particles,
            leaves,
            rng,
            config,
        });
        let theme = this.theme();
        this.apply(theme)?;
        log::info!("theme initialised as {theme:?}");
        Ok(this)
    }

    /// Wire the toggle control, if the page has one.
    pub fn install(self: &Rc<Self>) -> Result<(), FxError> {
        if let Some(control) = &self.control {
            let this = Rc::clone(self);
            dom::listen(control, "click", move |_| this.toggle())?;
        }
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        self.controller.borrow().theme()
    }

    pub fn is_transitioning(&self) -> bool {
        self.controller.borrow().is_transitioning()
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn leaves(&self) -> &LeafEmitter {
        &self.leaves
    }

    /// Start a transition. Ignored while one is already running.
    pub fn toggle(self: &Rc<Self>) {
        let started = self.controller.borrow_mut().begin_toggle();
        let Some(target) = started else {
            // a click on a checkbox flips it natively; put it back
            let shown = self.controller.borrow().shown();
            self.sync_control(shown);
            return;
        };
        self.sync_control(target);
        log::debug!("theme transition to {target:?}");

        let overlay = match self.build_overlay(target) {
            Ok(overlay) => Some(overlay),
            Err(err) => {
                log::warn!("transition overlay unavailable: {err}");
                None
            }
        };

        let this = Rc::clone(self);
        dom::after(self.config.theme_cover_ms, move || this.swap(overlay));
    }

    fn swap(self: Rc<Self>, overlay: Option<HtmlElement>) {
        let swapped = self.controller.borrow_mut().commit_swap();
        match swapped {
            Ok(theme) => {
                if let Err(err) = self.apply(theme) {
                    log::warn!("theme {theme:?} only partly applied: {err}");
                }
            }
            Err(err) => return self.abort(overlay, err),
        }

        let this = Rc::clone(&self);
        dom::after(self.config.theme_hold_ms, move || this.exit(overlay));
    }

    fn exit(self: Rc<Self>, overlay: Option<HtmlElement>) {
        let exiting = self.controller.borrow_mut().begin_exit();
        if let Err(err) = exiting {
            return self.abort(overlay, err);
        }
        if let Some(overlay) = &overlay {
            if let Err(err) = dom::set_class(overlay, "exiting", true) {
                log::warn!("overlay exit not started: {err}");
            }
        }

        let this = Rc::clone(&self);
        dom::after(self.config.theme_exit_ms, move || this.finish(overlay));
    }

    fn finish(self: Rc<Self>, overlay: Option<HtmlElement>) {
        if let Some(overlay) = overlay {
            overlay.remove();
        }
        if let Err(err) = self.controller.borrow_mut().finish() {
            log::error!("theme transition ended out of order: {err}");
        }
        log::debug!("theme transition done");
    }

    fn abort(&self, overlay: Option<HtmlElement>, err: FxError) {
        log::error!("theme transition aborted: {err}");
        if let Some(overlay) = overlay {
            overlay.remove();
        }
        self.controller.borrow_mut().abort();
        self.sync_control(self.theme());
    }

    /// Paint `theme`: body class, and exactly one particle system visible.
    fn apply(&self, theme: Theme) -> Result<(), FxError> {
        let nature = theme.is_nature();
        dom::set_class(&self.body, selector::NATURE_BODY_CLASS, nature)?;
        self.particles.set_visible(!nature)?;
        if nature {
            self.leaves.start()?;
        } else {
            self.leaves.stop()?;
        }
        self.sync_control(theme);
        Ok(())
    }

    fn sync_control(&self, theme: Theme) {
        let Some(control) = &self.control else {
            return;
        };
        let nature = theme.is_nature();
        let pressed = if nature { "true" } else { "false" };
        if let Err(err) = control.set_attribute("aria-pressed", pressed) {
            log::warn!("theme control not updated: {}", FxError::from(err));
        }
        if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            input.set_checked(nature);
        }
    }

    fn build_overlay(&self, target: Theme) -> Result<HtmlElement, FxError> {
        let variant = if target.is_nature() { "nature" } else { "cosmic" };
        let overlay = dom::create(&self.document, &format!("theme-transition-overlay {variant}"))?;
        let scene = overlay_scene(target, &mut *self.rng.borrow_mut());
        for deco in scene {
            let node = dom::create(&self.document, deco.class)?;
            dom::set_style(&node, "left", &format!("{:.2}%", deco.left))?;
            dom::set_style(&node, "top", &format!("{:.2}%", deco.top))?;
            dom::set_style(&node, "animation-delay", &format!("{:.2}s", deco.delay))?;
            overlay.append_child(&node)?;
        }
        self.body.append_child(&overlay)?;
        dom::set_class(&overlay, "active", true)?;
        Ok(overlay)
    }
}
