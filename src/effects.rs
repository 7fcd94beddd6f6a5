//! Pointer and counter math for the micro-interactions.

/// Bounding box of an element in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Counts a stat up from zero on a fixed per-frame step.
///
/// The step is sized so that frames of `frame_ms` cover `target` in
/// `duration_ms`. Until the running value reaches the target the display is
/// its floor; from then on it is exactly the target.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: f64, frame_ms: f64) -> Self {
        let frames = (duration_ms / frame_ms).max(1.0);
        Self {
            target,
            step: target as f64 / frames,
            current: 0.0,
            done: false,
        }
    }

    /// Leading digits of the `data-target` text, so `"12.5"` is 12 and
    /// `"100+"` is 100. No leading digits counts to zero.
    pub fn parse_target(raw: Option<&str>) -> u64 {
        let Some(text) = raw.map(str::trim_start) else {
            return 0;
        };
        let text = text.strip_prefix('+').unwrap_or(text);
        let end = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        text[..end].parse().unwrap_or(0)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one frame and return the value to display.
    pub fn tick(&mut self) -> u64 {
        if self.done {
            return self.target;
        }
        self.current += self.step;
        if self.current < self.target as f64 {
            (self.current.floor() as u64).min(self.target)
        } else {
            self.done = true;
            self.target
        }
    }
}

/// Hero image drift, in px, for a pointer at `(x, y)` in a `w x h` viewport.
pub fn hero_offset(x: f64, y: f64, w: f64, h: f64) -> (f64, f64) {
    if w <= 0.0 || h <= 0.0 {
        return (0.0, 0.0);
    }
    ((x / w - 0.5) * 20.0, (y / h - 0.5) * 20.0)
}

/// Pointer position inside `rect` as percentages.
pub fn relative_percent(x: f64, y: f64, rect: &Rect) -> (f64, f64) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return (50.0, 50.0);
    }
    (
        (x - rect.left) / rect.width * 100.0,
        (y - rect.top) / rect.height * 100.0,
    )
}

/// Pointer position inside `rect` in px.
pub fn relative_px(x: f64, y: f64, rect: &Rect) -> (f64, f64) {
    (x - rect.left, y - rect.top)
}

/// `(rotate_x, rotate_y)` in degrees for a card tilted toward the pointer.
pub fn tilt(x: f64, y: f64, rect: &Rect, max_deg: f64) -> (f64, f64) {
    let (px, py) = relative_percent(x, y, rect);
    let nx = (px / 100.0 - 0.5).clamp(-0.5, 0.5) * 2.0;
    let ny = (py / 100.0 - 0.5).clamp(-0.5, 0.5) * 2.0;
    // pointer at the top tips the top edge away
    (-ny * max_deg, nx * max_deg)
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    format!("perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg)")
}

/// CSS `transition-delay` for the `index`-th item of a staggered list.
pub fn stagger_delay(index: usize, step_s: f64) -> String {
    let ms = (index as f64 * step_s * 1000.0).round() as u64;
    format!("{ms}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn counter_reaches_target_exactly() {
        let mut counter = CounterAnimation::new(100, 3000.0, 16.0);
        let mut frames = 0;
        let mut last = 0;
        while !counter.is_done() {
            let shown = counter.tick();
            assert!(shown <= 100);
            assert!(shown >= last);
            last = shown;
            frames += 1;
            assert!(frames < 1000);
        }
        assert_eq!(last, 100);
        assert!((187..=189).contains(&frames));
        assert_eq!(counter.tick(), 100);
    }

    #[test]
    fn zero_target_finishes_first_frame() {
        let mut counter = CounterAnimation::new(0, 3000.0, 16.0);
        assert_eq!(counter.tick(), 0);
        assert!(counter.is_done());
    }

    #[test]
    fn target_parsing() {
        assert_eq!(CounterAnimation::parse_target(Some("250")), 250);
        assert_eq!(CounterAnimation::parse_target(Some(" 12 ")), 12);
        assert_eq!(CounterAnimation::parse_target(Some("lots")), 0);
        assert_eq!(CounterAnimation::parse_target(Some("12.5")), 12);
        assert_eq!(CounterAnimation::parse_target(Some("100+")), 100);
        assert_eq!(CounterAnimation::parse_target(Some("50K clients")), 50);
        assert_eq!(CounterAnimation::parse_target(None), 0);
    }

    #[test]
    fn hero_offset_is_centered() {
        assert_eq!(hero_offset(500.0, 400.0, 1000.0, 800.0), (0.0, 0.0));
        assert_eq!(hero_offset(0.0, 800.0, 1000.0, 800.0), (-10.0, 10.0));
        assert_eq!(hero_offset(1.0, 1.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn card_relative_coordinates() {
        assert_eq!(relative_percent(200.0, 100.0, &CARD), (50.0, 50.0));
        assert_eq!(relative_percent(100.0, 150.0, &CARD), (0.0, 100.0));
        assert_eq!(relative_px(130.0, 60.0, &CARD), (30.0, 10.0));
    }

    #[test]
    fn tilt_is_bounded() {
        assert_eq!(tilt(200.0, 100.0, &CARD, 10.0), (0.0, 0.0));
        assert_eq!(tilt(300.0, 50.0, &CARD, 10.0), (10.0, 10.0));
        let (rx, ry) = tilt(-500.0, 900.0, &CARD, 10.0);
        assert_eq!((rx, ry), (-10.0, -10.0));
        assert_eq!(
            tilt_transform(1.0, -2.5),
            "perspective(1000px) rotateX(1.00deg) rotateY(-2.50deg)"
        );
    }

    #[test]
    fn stagger_delays() {
        assert_eq!(stagger_delay(0, 0.1), "0ms");
        assert_eq!(stagger_delay(3, 0.1), "300ms");
        assert_eq!(stagger_delay(4, 0.15), "600ms");
    }
}
