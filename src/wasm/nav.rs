//! Mobile menu, scroll-to-top button and smooth in-page anchors.

use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::{selector, FxConfig};
use crate::error::FxError;
use crate::scroll::anchor_scroll_target;

use super::dom;

fn smooth_scroll(window: &Window, top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

pub fn install(
    window: &Window,
    document: &Document,
    nav_toggle: HtmlElement,
    scroll_top: HtmlElement,
    config: &FxConfig,
) -> Result<(), FxError> {
    let root = document
        .document_element()
        .ok_or(FxError::MissingElement("documentElement"))?;
    let menu = dom::query(&root, selector::NAV_LINKS)?;

    {
        let toggle = nav_toggle.clone();
        let menu = menu.clone();
        dom::listen(&nav_toggle, "click", move |_| {
            let flipped = dom::flip_class(&toggle, "active").and_then(|open| match &menu {
                Some(menu) => dom::set_class(menu, "active", open),
                None => Ok(()),
            });
            if let Err(err) = flipped {
                log::warn!("mobile menu not toggled: {err}");
            }
        })?;
    }

    for link in dom::query_all(&root, selector::NAV_LINK)? {
        let toggle = nav_toggle.clone();
        let menu = menu.clone();
        dom::listen(&link, "click", move |_| {
            let closed = dom::set_class(&toggle, "active", false).and_then(|()| match &menu {
                Some(menu) => dom::set_class(menu, "active", false),
                None => Ok(()),
            });
            if let Err(err) = closed {
                log::warn!("mobile menu not closed: {err}");
            }
        })?;
    }

    {
        let win = window.clone();
        dom::listen(&scroll_top, "click", move |_| smooth_scroll(&win, 0.0))?;
    }

    for anchor in dom::query_all(&root, selector::ANCHORS)? {
        let win = window.clone();
        let doc = document.clone();
        let cfg = config.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            // a bare "#" is not a valid selector; nothing to scroll to
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            let rect_top = target.get_bounding_client_rect().top();
            let page_y = win.page_y_offset().unwrap_or(0.0);
            smooth_scroll(&win, anchor_scroll_target(rect_top, page_y, &cfg));
        })?;
    }
    Ok(())
}
