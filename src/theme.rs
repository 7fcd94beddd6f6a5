//! Theme selection and the transition state machine behind the toggle.
//!
//! A toggle walks `Idle -> TransitioningOut -> Swapped -> TransitioningIn ->
//! Idle`. The theme itself only flips in [`ThemeController::commit_swap`];
//! every other step just advances the phase. Callers drive the steps from
//! completion callbacks, so a late step can never observe a half-applied
//! theme.

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;

use crate::error::FxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark starfield with the particle burst.
    #[default]
    Cosmic,
    /// Light palette with falling leaves.
    Nature,
}

impl Theme {
    /// Anything other than `"nature"` (including nothing) means cosmic.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("nature") => Theme::Nature,
            _ => Theme::Cosmic,
        }
    }

    pub fn as_stored(self) -> &'static str {
        match self {
            Theme::Cosmic => "dark",
            Theme::Nature => "nature",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Cosmic => Theme::Nature,
            Theme::Nature => Theme::Cosmic,
        }
    }

    pub fn is_nature(self) -> bool {
        self == Theme::Nature
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    TransitioningOut,
    Swapped,
    TransitioningIn,
}

/// Somewhere to keep the single theme string between visits.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str) -> Result<(), FxError>;
}

/// In-memory store; also handy when localStorage is blocked.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(value.to_owned()))),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.get()
    }

    fn save(&mut self, value: &str) -> Result<(), FxError> {
        *self.value.borrow_mut() = Some(value.to_owned());
        Ok(())
    }
}

#[derive(Debug)]
pub struct ThemeController<S> {
    theme: Theme,
    phase: Phase,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn load(store: S) -> Self {
        let theme = Theme::from_stored(store.load().as_deref());
        Self {
            theme,
            phase: Phase::Idle,
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// The theme a toggle control should show: the target once a transition
    /// has started, even before the swap lands.
    pub fn shown(&self) -> Theme {
        match self.phase {
            Phase::TransitioningOut => self.theme.toggled(),
            _ => self.theme,
        }
    }

    /// Take the transition lock. Returns the theme being switched to, or
    /// `None` when a transition is already running.
    pub fn begin_toggle(&mut self) -> Option<Theme> {
        if self.is_transitioning() {
            log::debug!("theme toggle ignored, phase {:?}", self.phase);
            return None;
        }
        self.phase = Phase::TransitioningOut;
        Some(self.theme.toggled())
    }

    /// Flip the theme and persist it. A failing store is logged, not fatal.
    pub fn commit_swap(&mut self) -> Result<Theme, FxError> {
        self.expect(Phase::TransitioningOut, "swap theme")?;
        self.theme = self.theme.toggled();
        self.phase = Phase::Swapped;
        if let Err(err) = self.store.save(self.theme.as_stored()) {
            log::warn!("theme preference not saved: {err}");
        }
        log::debug!("theme swapped to {:?}", self.theme);
        Ok(self.theme)
    }

    pub fn begin_exit(&mut self) -> Result<(), FxError> {
        self.expect(Phase::Swapped, "start overlay exit")?;
        self.phase = Phase::TransitioningIn;
        Ok(())
    }

    /// Release the lock.
    pub fn finish(&mut self) -> Result<(), FxError> {
        self.expect(Phase::TransitioningIn, "finish transition")?;
        self.phase = Phase::Idle;
        Ok(())
    }

    /// Drop the lock from whatever phase the transition reached. The theme
    /// keeps its current value.
    pub fn abort(&mut self) {
        self.phase = Phase::Idle;
    }

    fn expect(&self, phase: Phase, step: &'static str) -> Result<(), FxError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(FxError::InvalidTransition {
                phase: self.phase,
                step,
            })
        }
    }
}

/// One decorative element on the transition overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub class: &'static str,
    pub left: f64,
    pub top: f64,
    pub delay: f64,
}

/// Markup for the overlay that masks a switch *to* `target`.
pub fn overlay_scene<R: Rng>(target: Theme, rng: &mut R) -> Vec<Decoration> {
    let mut scene = Vec::new();
    match target {
        Theme::Nature => {
            scene.push(Decoration { class: "overlay-sun", left: 78.0, top: 12.0, delay: 0.0 });
            for i in 0..3_u8 {
                scene.push(Decoration {
                    class: "overlay-cloud",
                    left: 10.0 + 30.0 * f64::from(i) + rng.random_range(-5.0..5.0),
                    top: rng.random_range(8.0..30.0),
                    delay: 0.1 * f64::from(i),
                });
            }
            for i in 0..2_u8 {
                scene.push(Decoration {
                    class: "overlay-bush",
                    left: 15.0 + 50.0 * f64::from(i),
                    top: 82.0,
                    delay: 0.2 + 0.1 * f64::from(i),
                });
            }
        }
        Theme::Cosmic => {
            scene.push(Decoration { class: "overlay-moon", left: 80.0, top: 12.0, delay: 0.0 });
            for _ in 0..20 {
                scene.push(Decoration {
                    class: "overlay-star",
                    left: rng.random_range(0.0..100.0),
                    top: rng.random_range(0.0..100.0),
                    delay: rng.random_range(0.0..0.6),
                });
            }
            for _ in 0..8 {
                scene.push(Decoration {
                    class: "overlay-sparkle",
                    left: rng.random_range(0.0..100.0),
                    top: rng.random_range(0.0..100.0),
                    delay: rng.random_range(0.0..0.6),
                });
            }
        }
    }
    scene
}
