//! Pointer effects, visibility observers and the small one-off page touches.

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::config::{selector, FxConfig};
use crate::effects::{
    hero_offset, relative_percent, relative_px, stagger_delay, tilt, tilt_transform,
    CounterAnimation,
};
use crate::error::FxError;

use super::{dom, frame};

const TILT_MAX_DEG: f64 = 10.0;

pub fn install(window: &Window, document: &Document, config: &FxConfig) -> Result<(), FxError> {
    let root = document
        .document_element()
        .ok_or(FxError::MissingElement("documentElement"))?;
    let body = document.body().ok_or(FxError::MissingElement("body"))?;

    install_cursor(document, &root, &body, config)?;
    install_hero(window, document, &root)?;
    install_card_glow(&root)?;
    install_tilt(&root)?;
    install_observers(&root, config)?;
    stagger(&root)?;
    install_preloader(window, &root, config)?;
    install_social_press(&root, config)?;
    Ok(())
}

fn install_cursor(
    document: &Document,
    root: &Element,
    body: &HtmlElement,
    config: &FxConfig,
) -> Result<(), FxError> {
    let cursor = dom::create(document, "custom-cursor")?;
    let follower = dom::create(document, "cursor-follower")?;
    body.append_child(&cursor)?;
    body.append_child(&follower)?;

    {
        let cursor = cursor.clone();
        let follower = follower.clone();
        let lag = config.cursor_lag_ms;
        dom::listen_mouse(document, "mousemove", move |e| {
            let (x, y) = (format!("{}px", e.client_x()), format!("{}px", e.client_y()));
            let _ = dom::set_style(&cursor, "left", &x);
            let _ = dom::set_style(&cursor, "top", &y);
            let follower = follower.clone();
            dom::after(lag, move || {
                let _ = dom::set_style(&follower, "left", &x);
                let _ = dom::set_style(&follower, "top", &y);
            });
        })?;
    }

    for el in dom::query_all(root, selector::INTERACTIVE)? {
        for (event, on) in [("mouseenter", true), ("mouseleave", false)] {
            let cursor = cursor.clone();
            let follower = follower.clone();
            dom::listen(&el, event, move |_| {
                let _ = dom::set_class(&cursor, "hover", on);
                let _ = dom::set_class(&follower, "hover", on);
            })?;
        }
    }
    Ok(())
}

fn install_hero(window: &Window, document: &Document, root: &Element) -> Result<(), FxError> {
    let Some(hero) = dom::query(root, selector::HERO_IMAGE)? else {
        log::debug!("no hero image; parallax skipped");
        return Ok(());
    };
    let win = window.clone();
    dom::listen_mouse(document, "mousemove", move |e| {
        let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let (x, y) = hero_offset(f64::from(e.client_x()), f64::from(e.client_y()), w, h);
        let _ = dom::set_style(&hero, "transform", &format!("translate({x}px, {y}px)"));
    })
}

fn install_card_glow(root: &Element) -> Result<(), FxError> {
    for card in dom::query_all(root, selector::GLOW_CARDS)? {
        let target = card.clone();
        dom::listen_mouse(&card, "mousemove", move |e| {
            let rect = dom::rect(&target);
            let (x, y) = relative_percent(f64::from(e.client_x()), f64::from(e.client_y()), &rect);
            let _ = dom::set_style(&target, "--mouse-x", &format!("{x}%"));
            let _ = dom::set_style(&target, "--mouse-y", &format!("{y}%"));
        })?;
    }
    for item in dom::query_all(root, selector::SKILL_ITEM)? {
        let target = item.clone();
        dom::listen_mouse(&item, "mouseenter", move |e| {
            let rect = dom::rect(&target);
            let (x, y) = relative_px(f64::from(e.client_x()), f64::from(e.client_y()), &rect);
            let _ = dom::set_style(&target, "--x", &format!("{x}px"));
            let _ = dom::set_style(&target, "--y", &format!("{y}px"));
        })?;
    }
    Ok(())
}

fn install_tilt(root: &Element) -> Result<(), FxError> {
    for card in dom::query_all(root, selector::TILT_CARD)? {
        let target = card.clone();
        dom::listen_mouse(&card, "mousemove", move |e| {
            let rect = dom::rect(&target);
            let (rx, ry) = tilt(f64::from(e.client_x()), f64::from(e.client_y()), &rect, TILT_MAX_DEG);
            let _ = dom::set_style(&target, "transform", &tilt_transform(rx, ry));
        })?;
        let target = card.clone();
        dom::listen(&card, "mouseleave", move |_| {
            let _ = dom::clear_style(&target, "transform");
        })?;
    }
    Ok(())
}

/// Observe `targets`, calling `on_visible` each time one intersects.
fn observe<F>(targets: &[HtmlElement], threshold: f64, mut on_visible: F) -> Result<(), FxError>
where
    F: FnMut(HtmlElement, &IntersectionObserver) + 'static,
{
    if targets.is_empty() {
        return Ok(());
    }
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(el) = entry.target().dyn_into::<HtmlElement>() {
                on_visible(el, &observer);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin("0px");
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    for target in targets {
        observer.observe(target);
    }
    Ok(())
}

/// Count `el` up to its `data-target`, one step per animation frame.
pub fn animate_counter(el: HtmlElement, config: &FxConfig) -> Result<(), FxError> {
    let target = CounterAnimation::parse_target(el.get_attribute("data-target").as_deref());
    let mut counter = CounterAnimation::new(target, config.counter_duration_ms, config.counter_frame_ms);
    el.set_text_content(Some(&counter.tick().to_string()));
    if counter.is_done() {
        return Ok(());
    }
    frame::run_frames(move || {
        el.set_text_content(Some(&counter.tick().to_string()));
        !counter.is_done()
    })
}

fn install_observers(root: &Element, config: &FxConfig) -> Result<(), FxError> {
    let cfg = config.clone();
    observe(&dom::query_all(root, selector::STAT_NUMBER)?, 0.2, move |el, observer| {
        // once per element
        observer.unobserve(&el);
        if let Err(err) = animate_counter(el, &cfg) {
            log::warn!("counter animation failed: {err}");
        }
    })?;

    let reveal = dom::query_all(root, selector::REVEAL)?;
    for el in &reveal {
        dom::set_class(el, "reveal", true)?;
    }
    observe(&reveal, 0.2, |el, _| {
        let _ = dom::set_class(&el, "active", true);
    })?;

    let badges = dom::query_all(root, selector::BADGES)?;
    for badge in &badges {
        dom::set_style(badge, "animation-play-state", "paused")?;
    }
    observe(&badges, 0.1, |el, _| {
        let _ = dom::set_style(&el, "animation-play-state", "running");
    })
}

fn stagger(root: &Element) -> Result<(), FxError> {
    for (i, item) in dom::query_all(root, selector::SKILL_ITEM)?.iter().enumerate() {
        dom::set_style(item, "transition-delay", &stagger_delay(i, 0.1))?;
    }
    for (i, card) in dom::query_all(root, selector::STAGGER_CARDS)?.iter().enumerate() {
        dom::set_style(card, "transition-delay", &stagger_delay(i, 0.15))?;
    }
    Ok(())
}

fn install_preloader(window: &Window, root: &Element, config: &FxConfig) -> Result<(), FxError> {
    let Some(loader) = dom::query(root, selector::LOADER)? else {
        return Ok(());
    };
    let delay = config.preloader_delay_ms;
    dom::listen(window, "load", move |_| {
        let loader = loader.clone();
        dom::after(delay, move || {
            let _ = dom::set_class(&loader, "hidden", true);
        });
    })
}

fn install_social_press(root: &Element, config: &FxConfig) -> Result<(), FxError> {
    for icon in dom::query_all(root, selector::SOCIAL_ICON)? {
        let target = icon.clone();
        let press = config.press_ms;
        dom::listen(&icon, "click", move |event| {
            event.prevent_default();
            let _ = dom::set_style(&target, "transform", "scale(0.9)");
            let target = target.clone();
            dom::after(press, move || {
                let _ = dom::clear_style(&target, "transform");
            });
        })?;
    }
    Ok(())
}
