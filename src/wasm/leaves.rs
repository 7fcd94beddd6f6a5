//! Continuous leaf emission for the nature theme.
//!
//! `start` staggers an initial handful of leaves, then an [`Interval`] adds
//! one more per tick. `stop` drops the interval and every pending stagger
//! timer, which cancels them; the `active` flag is also checked at each
//! spawn so nothing slips through between the two.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use rand::rngs::SmallRng;
use web_sys::{Document, HtmlElement};

use crate::config::{selector, FxConfig};
use crate::emitter::LeafSpec;
use crate::error::FxError;

use super::dom;

struct LeafState {
    document: Document,
    container: HtmlElement,
    rng: Rc<RefCell<SmallRng>>,
    config: FxConfig,
    active: Cell<bool>,
    interval: RefCell<Option<Interval>>,
    stagger: RefCell<Vec<Timeout>>,
}

pub struct LeafEmitter {
    state: Rc<LeafState>,
}

impl LeafEmitter {
    /// Create the (hidden) container under `parent`.
    pub fn new(
        document: &Document,
        parent: &HtmlElement,
        rng: Rc<RefCell<SmallRng>>,
        config: FxConfig,
    ) -> Result<Self, FxError> {
        let container = dom::create(document, selector::LEAVES_CONTAINER)?;
        dom::set_style(&container, "display", "none")?;
        parent.append_child(&container)?;
        Ok(Self {
            state: Rc::new(LeafState {
                document: document.clone(),
                container,
                rng,
                config,
                active: Cell::new(false),
                interval: RefCell::new(None),
                stagger: RefCell::new(Vec::new()),
            }),
        })
    }

    pub fn is_running(&self) -> bool {
        self.state.active.get()
    }

    pub fn leaf_count(&self) -> u32 {
        self.state.container.child_element_count()
    }

    pub fn container(&self) -> &HtmlElement {
        &self.state.container
    }

    pub fn start(&self) -> Result<(), FxError> {
        let state = &self.state;
        if state.active.replace(true) {
            return Ok(());
        }
        dom::clear_style(&state.container, "display")?;

        let cfg = &state.config;
        let mut stagger = state.stagger.borrow_mut();
        for i in 0..cfg.leaf_initial_count {
            let weak = Rc::downgrade(state);
            stagger.push(Timeout::new(i * cfg.leaf_stagger_ms, move || spawn_leaf(&weak)));
        }
        let weak = Rc::downgrade(state);
        *state.interval.borrow_mut() =
            Some(Interval::new(cfg.leaf_interval_ms, move || spawn_leaf(&weak)));
        log::debug!("leaf emitter started");
        Ok(())
    }

    pub fn stop(&self) -> Result<(), FxError> {
        let state = &self.state;
        state.active.set(false);
        // dropping the timers cancels them
        state.interval.borrow_mut().take();
        state.stagger.borrow_mut().clear();
        dom::set_style(&state.container, "display", "none")?;
        state.container.set_inner_html("");
        log::debug!("leaf emitter stopped");
        Ok(())
    }
}

fn spawn_leaf(weak: &Weak<LeafState>) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    if !state.active.get() {
        return;
    }
    if let Err(err) = append_leaf(&state) {
        log::warn!("leaf not spawned: {err}");
    }
}

fn append_leaf(state: &LeafState) -> Result<(), FxError> {
    let spec = LeafSpec::random(&mut *state.rng.borrow_mut());
    let leaf = dom::create(&state.document, &format!("leaf {}", spec.variant))?;
    dom::set_style(&leaf, "left", &format!("{:.2}%", spec.left))?;
    dom::set_style(&leaf, "width", &format!("{:.1}px", spec.size))?;
    dom::set_style(&leaf, "height", &format!("{:.1}px", spec.size))?;
    dom::set_style(&leaf, "animation-duration", &format!("{:.2}s", spec.duration))?;
    dom::set_style(&leaf, "--leaf-rotation", &format!("{:.0}deg", spec.rotation))?;
    dom::set_style(&leaf, "--leaf-sway", &format!("{:.0}px", spec.sway))?;
    state.container.append_child(&leaf)?;

    // Fixed TTL regardless of the animation length.
    dom::after(state.config.leaf_ttl_ms, move || leaf.remove());
    Ok(())
}
