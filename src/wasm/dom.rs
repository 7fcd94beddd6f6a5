//! Thin helpers over web-sys so the handlers can use `?` throughout.

use gloo_timers::future::TimeoutFuture;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent};

use crate::config::FxConfig;
use crate::effects::Rect;
use crate::error::FxError;

pub fn by_id(document: &Document, id: &'static str) -> Result<HtmlElement, FxError> {
    optional_by_id(document, id).ok_or(FxError::MissingElement(id))
}

pub fn optional_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query(root: &Element, selector: &str) -> Result<Option<HtmlElement>, FxError> {
    Ok(root
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// All `HtmlElement`s under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, FxError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn create(document: &Document, class: &str) -> Result<HtmlElement, FxError> {
    let el: HtmlElement = document.create_element("div")?.unchecked_into();
    el.set_class_name(class);
    Ok(el)
}

pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), FxError> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), FxError> {
    el.style().set_property(property, value)?;
    Ok(())
}

pub fn clear_style(el: &HtmlElement, property: &str) -> Result<(), FxError> {
    el.style().remove_property(property)?;
    Ok(())
}

pub fn rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), FxError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn listen_mouse<F>(target: &EventTarget, event: &str, mut handler: F) -> Result<(), FxError>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(target, event, move |event: Event| {
        if let Ok(mouse) = event.dyn_into::<MouseEvent>() {
            handler(mouse);
        }
    })
}

/// Run `f` once after `ms`. The task is dropped once it has run, so this
/// suits per-event delays where a forgotten timer closure would pile up.
pub fn after<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(ms).await;
        f();
    });
}

/// Flip `class` on `el`, returning whether it is now set.
pub fn flip_class(el: &Element, class: &str) -> Result<bool, FxError> {
    Ok(el.class_list().toggle(class)?)
}

pub fn seeded_rng() -> SmallRng {
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64;
    SmallRng::seed_from_u64(seed)
}

/// Defaults plus any `data-fx-*` attributes on `el`. A bad value is logged
/// and the defaults are kept.
pub fn load_config(el: &Element) -> FxConfig {
    let pairs: Vec<(String, String)> = el
        .get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| {
            let key = name.strip_prefix("data-fx-")?.to_owned();
            let value = el.get_attribute(&name)?;
            Some((key, value))
        })
        .collect();

    let defaults = FxConfig::default();
    match defaults.with_overrides(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("{err}; using defaults");
            defaults
        }
    }
}
