#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_fx::config::{selector, FxConfig};
use folio_fx::form::SubmitStage;
use folio_fx::theme::{MemoryStore, Theme};
use folio_fx::wasm::form::FormSimulator;
use folio_fx::wasm::leaves::LeafEmitter;
use folio_fx::wasm::scroll::ScrollReactor;
use folio_fx::wasm::theme::ThemeCoordinator;
use folio_fx::wasm::{dom, effects, nav};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Absolutely positioned container at the page origin, so section offsets
/// are relative to it.
fn fixture(html: &str) -> HtmlElement {
    let doc = document();
    let root: HtmlElement = doc.create_element("div").unwrap().unchecked_into();
    root.set_attribute("style", "position:absolute;top:0;left:0;width:800px").unwrap();
    root.set_inner_html(html);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn fast_config() -> FxConfig {
    FxConfig {
        theme_cover_ms: 20,
        theme_hold_ms: 10,
        theme_exit_ms: 20,
        leaf_stagger_ms: 5,
        leaf_interval_ms: 10,
        counter_duration_ms: 80.0,
        form_sending_ms: 40,
        form_sent_ms: 40,
        ..FxConfig::default()
    }
}

fn has_class(el: &HtmlElement, class: &str) -> bool {
    el.class_list().contains(class)
}

#[wasm_bindgen_test]
fn scroll_reactor_flags_and_active_link() {
    let root = fixture(
        r##"<nav id="fx-nav"><a class="nav-link" href="#one">1</a><a class="nav-link" href="#two">2</a></nav>
        <button id="fx-top"></button>
        <section id="one" style="height:1000px;margin:0"></section>
        <section id="two" style="height:1000px;margin:0"></section>"##,
    );
    let navbar = dom::query(&root, "#fx-nav").unwrap().unwrap();
    let top = dom::query(&root, "#fx-top").unwrap().unwrap();
    let links = dom::query_all(&root, selector::NAV_LINK).unwrap();
    let section_top = dom::query(&root, "#one").unwrap().unwrap().offset_top();
    let reactor =
        ScrollReactor::new(root.clone().into(), navbar.clone(), top.clone(), FxConfig::default())
            .unwrap();

    let y0 = f64::from(section_top);
    reactor.on_scroll(y0).unwrap();
    assert!(!has_class(&navbar, "scrolled"));
    assert!(!has_class(&top, "visible"));
    assert!(has_class(&links[0], "active"));
    assert!(!has_class(&links[1], "active"));

    reactor.on_scroll(y0 + 900.0).unwrap();
    assert!(has_class(&navbar, "scrolled"));
    assert!(has_class(&top, "visible"));
    assert!(!has_class(&links[0], "active"));
    assert!(has_class(&links[1], "active"));

    // past the last section nothing is active
    reactor.on_scroll(y0 + 5000.0).unwrap();
    assert!(links.iter().all(|l| !has_class(l, "active")));

    root.remove();
}

#[wasm_bindgen_test]
async fn theme_round_trip_and_lock() {
    let doc = document();
    let body = doc.body().unwrap();
    let store = MemoryStore::new();
    let rng = Rc::new(RefCell::new(dom::seeded_rng()));
    let coordinator = ThemeCoordinator::new(&doc, &body, store.clone(), rng, fast_config()).unwrap();

    assert_eq!(coordinator.theme(), Theme::Cosmic);
    assert!(!coordinator.is_transitioning());
    assert!(coordinator.particles().is_visible());

    coordinator.toggle();
    assert!(coordinator.is_transitioning());
    // second toggle while locked changes nothing
    coordinator.toggle();
    TimeoutFuture::new(150).await;

    assert_eq!(coordinator.theme(), Theme::Nature);
    assert!(!coordinator.is_transitioning());
    assert!(body.class_list().contains(selector::NATURE_BODY_CLASS));
    assert_eq!(store.get().as_deref(), Some("nature"));
    assert!(!coordinator.particles().is_visible());
    assert!(coordinator.leaves().is_running());
    assert!(doc.query_selector(".theme-transition-overlay").unwrap().is_none());

    coordinator.toggle();
    TimeoutFuture::new(150).await;

    assert_eq!(coordinator.theme(), Theme::Cosmic);
    assert!(!coordinator.is_transitioning());
    assert!(!body.class_list().contains(selector::NATURE_BODY_CLASS));
    assert_eq!(store.get().as_deref(), Some("dark"));
    assert!(coordinator.particles().is_visible());
    assert!(!coordinator.leaves().is_running());

    coordinator.particles().container().remove();
    coordinator.leaves().container().remove();
}

#[wasm_bindgen_test]
async fn leaves_stop_emitting_after_stop() {
    let doc = document();
    let parent = fixture("");
    let rng = Rc::new(RefCell::new(dom::seeded_rng()));
    let leaves = LeafEmitter::new(&doc, &parent, rng, fast_config()).unwrap();

    leaves.start().unwrap();
    TimeoutFuture::new(80).await;
    assert!(leaves.leaf_count() > 0);

    leaves.stop().unwrap();
    assert_eq!(leaves.leaf_count(), 0);
    TimeoutFuture::new(80).await;
    assert_eq!(leaves.leaf_count(), 0);
    assert!(!leaves.is_running());

    parent.remove();
}

#[wasm_bindgen_test]
fn mobile_menu_toggles_and_closes_on_link() {
    let root = fixture(
        r##"<button id="fx-menu"></button><button id="fx-up"></button>
        <ul class="nav-links"><li><a class="nav-link" href="#fx-nowhere">x</a></li></ul>"##,
    );
    let toggle = dom::query(&root, "#fx-menu").unwrap().unwrap();
    let up = dom::query(&root, "#fx-up").unwrap().unwrap();
    let menu = dom::query(&root, selector::NAV_LINKS).unwrap().unwrap();
    let link = dom::query(&root, selector::NAV_LINK).unwrap().unwrap();
    let window = web_sys::window().unwrap();
    nav::install(&window, &document(), toggle.clone(), up, &FxConfig::default()).unwrap();

    toggle.click();
    assert!(has_class(&toggle, "active"));
    assert!(has_class(&menu, "active"));

    link.click();
    assert!(!has_class(&toggle, "active"));
    assert!(!has_class(&menu, "active"));

    toggle.click();
    toggle.click();
    assert!(!has_class(&toggle, "active"));
    assert!(!has_class(&menu, "active"));

    root.remove();
}

#[wasm_bindgen_test]
async fn leaves_expire_while_emitter_runs() {
    let doc = document();
    let parent = fixture("");
    let rng = Rc::new(RefCell::new(dom::seeded_rng()));
    let config = FxConfig {
        leaf_initial_count: 1,
        leaf_interval_ms: 60_000,
        leaf_ttl_ms: 60,
        ..fast_config()
    };
    let leaves = LeafEmitter::new(&doc, &parent, rng, config).unwrap();

    leaves.start().unwrap();
    TimeoutFuture::new(20).await;
    assert_eq!(leaves.leaf_count(), 1);

    TimeoutFuture::new(150).await;
    assert!(leaves.is_running());
    assert_eq!(leaves.leaf_count(), 0);

    leaves.stop().unwrap();
    parent.remove();
}

#[wasm_bindgen_test]
async fn delayed_callback_runs_once() {
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    dom::after(20, move || counter.set(counter.get() + 1));
    assert_eq!(hits.get(), 0);
    TimeoutFuture::new(80).await;
    assert_eq!(hits.get(), 1);
    TimeoutFuture::new(40).await;
    assert_eq!(hits.get(), 1);
}

fn theme_control() -> (HtmlElement, HtmlInputElement) {
    let root = fixture(r#"<input type="checkbox" id="themeToggle">"#);
    let input: HtmlInputElement = dom::query(&root, "#themeToggle").unwrap().unwrap().unchecked_into();
    (root, input)
}

#[wasm_bindgen_test]
async fn theme_control_mirrors_theme() {
    let doc = document();
    let body = doc.body().unwrap();
    let (root, input) = theme_control();
    let rng = Rc::new(RefCell::new(dom::seeded_rng()));
    let coordinator =
        ThemeCoordinator::new(&doc, &body, MemoryStore::new(), rng, fast_config()).unwrap();
    coordinator.install().unwrap();
    assert_eq!(input.get_attribute("aria-pressed").as_deref(), Some("false"));
    assert!(!input.checked());

    input.click();
    assert!(coordinator.is_transitioning());
    assert_eq!(input.get_attribute("aria-pressed").as_deref(), Some("true"));
    assert!(input.checked());

    // the browser unchecks the box; the coordinator keeps showing the target
    input.click();
    assert!(input.checked());
    assert_eq!(input.get_attribute("aria-pressed").as_deref(), Some("true"));

    TimeoutFuture::new(150).await;
    assert_eq!(coordinator.theme(), Theme::Nature);
    assert!(input.checked());
    assert_eq!(input.get_attribute("aria-pressed").as_deref(), Some("true"));

    input.click();
    TimeoutFuture::new(150).await;
    assert_eq!(coordinator.theme(), Theme::Cosmic);
    assert!(!input.checked());
    assert_eq!(input.get_attribute("aria-pressed").as_deref(), Some("false"));

    coordinator.particles().container().remove();
    coordinator.leaves().container().remove();
    root.remove();
}

#[wasm_bindgen_test]
async fn overlay_covers_then_exits_then_goes() {
    let doc = document();
    let body = doc.body().unwrap();
    let rng = Rc::new(RefCell::new(dom::seeded_rng()));
    let config = FxConfig {
        theme_cover_ms: 100,
        theme_hold_ms: 100,
        theme_exit_ms: 100,
        ..fast_config()
    };
    let coordinator = ThemeCoordinator::new(&doc, &body, MemoryStore::new(), rng, config).unwrap();
    let overlay = || doc.query_selector(".theme-transition-overlay").unwrap();

    coordinator.toggle();
    TimeoutFuture::new(50).await;
    let covering = overlay().expect("overlay during cover");
    assert!(covering.class_list().contains("active"));
    assert!(covering.class_list().contains("nature"));
    assert!(!covering.class_list().contains("exiting"));

    TimeoutFuture::new(200).await;
    let leaving = overlay().expect("overlay during exit");
    assert!(leaving.class_list().contains("exiting"));
    assert_eq!(coordinator.theme(), Theme::Nature);
    assert!(coordinator.is_transitioning());

    TimeoutFuture::new(200).await;
    assert!(overlay().is_none());
    assert!(!coordinator.is_transitioning());

    coordinator.particles().container().remove();
    coordinator.leaves().container().remove();
    body.class_list().remove_1(selector::NATURE_BODY_CLASS).unwrap();
}

#[wasm_bindgen_test]
async fn counter_lands_on_target() {
    let root = fixture(r#"<span class="stat-number" data-target="100">0</span>"#);
    let el = dom::query(&root, selector::STAT_NUMBER).unwrap().unwrap();
    effects::animate_counter(el.clone(), &fast_config()).unwrap();
    TimeoutFuture::new(400).await;
    assert_eq!(el.text_content().as_deref(), Some("100"));
    root.remove();
}

#[wasm_bindgen_test]
async fn form_simulation_sequence() {
    let root = fixture(
        r#"<form id="fx-form"><input name="name"><button class="submit-btn" type="submit">Send</button></form>"#,
    );
    let form: HtmlFormElement = dom::query(&root, "#fx-form").unwrap().unwrap().unchecked_into();
    let input: HtmlInputElement = dom::query(&root, "input").unwrap().unwrap().unchecked_into();
    let button = dom::query(&root, selector::SUBMIT_BTN).unwrap().unwrap();
    input.set_value("Ada");

    let sim = FormSimulator::new(form, fast_config()).unwrap();
    sim.submit();
    assert_eq!(sim.stage(), SubmitStage::Sending);
    assert!(button.inner_html().contains("Sending..."));
    assert!(button.has_attribute("disabled"));

    TimeoutFuture::new(60).await;
    assert_eq!(sim.stage(), SubmitStage::Sent);
    assert!(button.inner_html().contains("Sent!"));

    TimeoutFuture::new(60).await;
    assert_eq!(sim.stage(), SubmitStage::Idle);
    assert_eq!(button.inner_html(), "Send");
    assert!(!button.has_attribute("disabled"));
    assert_eq!(input.value(), "");

    root.remove();
}
