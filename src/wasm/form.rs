use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlFormElement};

use crate::config::{selector, FxConfig};
use crate::error::FxError;
use crate::form::SubmitStage;

use super::dom;

/// Plays the "Sending... / Sent!" routine on the contact form. Nothing is
/// transmitted.
pub struct FormSimulator {
    form: HtmlFormElement,
    button: HtmlButtonElement,
    original: RefCell<String>,
    stage: Cell<SubmitStage>,
    config: FxConfig,
}

impl FormSimulator {
    pub fn new(form: HtmlFormElement, config: FxConfig) -> Result<Rc<Self>, FxError> {
        let button = dom::query(&form, selector::SUBMIT_BTN)?
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
            .ok_or(FxError::MissingElement(selector::SUBMIT_BTN))?;
        Ok(Rc::new(Self {
            form,
            button,
            original: RefCell::new(String::new()),
            stage: Cell::new(SubmitStage::Idle),
            config,
        }))
    }

    /// Hook up `#contactForm` if the page has one.
    pub fn install(document: &Document, config: &FxConfig) -> Result<Option<Rc<Self>>, FxError> {
        let Some(form) = dom::optional_by_id(document, selector::CONTACT_FORM)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            log::debug!("no contact form on page");
            return Ok(None);
        };
        let this = Self::new(form, config.clone())?;
        let handler = Rc::clone(&this);
        dom::listen(&this.form, "submit", move |event| {
            event.prevent_default();
            handler.submit();
        })?;
        Ok(Some(this))
    }

    pub fn stage(&self) -> SubmitStage {
        self.stage.get()
    }

    /// Start the routine; ignored while one is already playing.
    pub fn submit(self: &Rc<Self>) {
        if self.stage.get() != SubmitStage::Idle {
            return;
        }
        *self.original.borrow_mut() = self.button.inner_html();
        log::debug!("contact form submitted (simulated)");
        self.enter(SubmitStage::Sending);
    }

    fn enter(self: &Rc<Self>, stage: SubmitStage) {
        self.stage.set(stage);
        let view = stage.view(&self.original.borrow());
        self.button.set_inner_html(&view.html);
        self.button.set_disabled(view.disabled);
        let painted = if view.background.is_empty() {
            dom::clear_style(&self.button, "background")
        } else {
            dom::set_style(&self.button, "background", view.background)
        };
        if let Err(err) = painted {
            log::warn!("submit button not restyled: {err}");
        }
        if stage.resets_form() {
            self.form.reset();
        }

        if let Some((next, after)) = stage.next(&self.config) {
            let this = Rc::clone(self);
            dom::after(after, move || this.enter(next));
        }
    }
}
