//! Randomized placement for the decorative particle and leaf nodes.
//!
//! Only the numbers live here; the browser shell turns each record into a
//! styled `<div>`. Positions are percentages of the viewport.

use std::ops::Range;

use rand::Rng;

/// Attempts before placement gives up on rejection sampling.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct ExclusionZone {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl ExclusionZone {
    /// The corner kept clear for the moon.
    pub const MOON: ExclusionZone = ExclusionZone {
        x: 75.0..95.0,
        y: 5.0..25.0,
    };

    /// Closed on both ends, so a particle on the border counts as inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x.start && x <= self.x.end && y >= self.y.start && y <= self.y.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnRule {
    Anywhere,
    /// Restricted to `top < max_y` percent.
    UpperBand { max_y: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleGroup {
    pub class: &'static str,
    pub count: usize,
    /// Animation duration in seconds.
    pub duration: Range<f64>,
    pub spawn: SpawnRule,
}

impl ParticleGroup {
    const fn new(class: &'static str, count: usize, duration: Range<f64>, spawn: SpawnRule) -> Self {
        Self {
            class,
            count,
            duration,
            spawn,
        }
    }
}

/// The cosmic burst, smallest first.
pub fn cosmic_groups() -> [ParticleGroup; 5] {
    [
        ParticleGroup::new("tiny-star", 60, 2.0..4.0, SpawnRule::Anywhere),
        ParticleGroup::new("small-star", 30, 3.0..6.0, SpawnRule::Anywhere),
        ParticleGroup::new("sparkle", 15, 2.0..5.0, SpawnRule::Anywhere),
        ParticleGroup::new("glow-orb", 6, 15.0..25.0, SpawnRule::Anywhere),
        ParticleGroup::new("shooting-star", 3, 6.0..12.0, SpawnRule::UpperBand { max_y: 40.0 }),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    pub class: &'static str,
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
}

/// Pick a point for `rule` outside `zone`.
///
/// Rejection sampling is capped at [`MAX_PLACEMENT_ATTEMPTS`]; after that the
/// point is drawn from a strip beside the zone, which is outside regardless
/// of the other coordinate: left, then right, then above, then below. A zone
/// covering the whole area leaves no such strip, so the last sample is
/// returned as is.
pub fn place_outside<R: Rng>(rng: &mut R, rule: SpawnRule, zone: &ExclusionZone) -> (f64, f64) {
    let max_y = match rule {
        SpawnRule::Anywhere => 100.0,
        SpawnRule::UpperBand { max_y } => max_y,
    };
    let mut last = (0.0, 0.0);
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let x = rng.random_range(0.0..100.0);
        let y = rng.random_range(0.0..max_y);
        if !zone.contains(x, y) {
            return (x, y);
        }
        last = (x, y);
    }
    log::debug!("placement fell back after {MAX_PLACEMENT_ATTEMPTS} rejections");

    if zone.x.start > 0.0 {
        return (rng.random_range(0.0..zone.x.start), rng.random_range(0.0..max_y));
    }
    if zone.x.end < 100.0 {
        // (end, 100]: the closed zone keeps its right edge
        let x = 100.0 - rng.random_range(0.0..100.0 - zone.x.end);
        return (x, rng.random_range(0.0..max_y));
    }
    if zone.y.start > 0.0 {
        let y = rng.random_range(0.0..zone.y.start.min(max_y));
        return (rng.random_range(0.0..100.0), y);
    }
    if zone.y.end < max_y {
        let y = max_y - rng.random_range(0.0..max_y - zone.y.end);
        if y < max_y {
            return (rng.random_range(0.0..100.0), y);
        }
    }
    log::warn!("exclusion zone covers the whole spawn area");
    last
}

/// Every node of the one-shot cosmic burst.
pub fn cosmic_burst<R: Rng>(rng: &mut R, groups: &[ParticleGroup]) -> Vec<ParticleSpec> {
    let total = groups.iter().map(|g| g.count).sum();
    let mut out = Vec::with_capacity(total);
    for group in groups {
        for _ in 0..group.count {
            let (left, top) = place_outside(rng, group.spawn, &ExclusionZone::MOON);
            out.push(ParticleSpec {
                class: group.class,
                left,
                top,
                delay: rng.random_range(0.0..group.duration.start),
                duration: rng.random_range(group.duration.clone()),
            });
        }
    }
    out
}

pub const LEAF_VARIANTS: [&str; 4] = ["leaf-1", "leaf-2", "leaf-3", "leaf-4"];

#[derive(Debug, Clone, PartialEq)]
pub struct LeafSpec {
    pub variant: &'static str,
    pub left: f64,
    /// Seconds; the node itself is removed on a fixed TTL.
    pub duration: f64,
    pub size: f64,
    pub rotation: f64,
    pub sway: f64,
}

impl LeafSpec {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            variant: LEAF_VARIANTS[rng.random_range(0..LEAF_VARIANTS.len())],
            left: rng.random_range(0.0..100.0),
            duration: rng.random_range(8.0..15.0),
            size: rng.random_range(15.0..30.0),
            rotation: rng.random_range(0.0..360.0),
            sway: rng.random_range(-60.0..60.0),
        }
    }
}
