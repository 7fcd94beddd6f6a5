use rand::Rng;
use web_sys::{Document, HtmlElement};

use crate::config::selector;
use crate::emitter::{cosmic_burst, cosmic_groups};
use crate::error::FxError;

use super::dom;

/// The cosmic starfield: spawned once, then only shown or hidden.
pub struct ParticleField {
    container: HtmlElement,
}

impl ParticleField {
    pub fn spawn<R: Rng>(document: &Document, parent: &HtmlElement, rng: &mut R) -> Result<Self, FxError> {
        let container = dom::create(document, selector::PARTICLES_CONTAINER)?;
        for spec in cosmic_burst(rng, &cosmic_groups()) {
            let node = dom::create(document, &format!("particle {}", spec.class))?;
            dom::set_style(&node, "left", &format!("{:.2}%", spec.left))?;
            dom::set_style(&node, "top", &format!("{:.2}%", spec.top))?;
            dom::set_style(&node, "animation-delay", &format!("{:.2}s", spec.delay))?;
            dom::set_style(&node, "animation-duration", &format!("{:.2}s", spec.duration))?;
            container.append_child(&node)?;
        }
        parent.append_child(&container)?;
        log::debug!("cosmic particles spawned: {}", container.child_element_count());
        Ok(Self { container })
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), FxError> {
        if visible {
            dom::clear_style(&self.container, "display")
        } else {
            dom::set_style(&self.container, "display", "none")
        }
    }

    pub fn is_visible(&self) -> bool {
        self.container
            .style()
            .get_property_value("display")
            .map_or(true, |d| d != "none")
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }
}
