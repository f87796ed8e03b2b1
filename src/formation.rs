//! Formations and the cycle that rotates through them.
//!
//! A [`Formation`] names a target shape and generates one target point per
//! particle. [`FormationCycle`] steps through a fixed sequence of formations
//! on a fixed period; the field polls it once per frame.

use std::time::{Duration, Instant};

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;

/// Target shape the field morphs into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formation {
    /// No shape: particles wander freely and targets are never assigned.
    #[default]
    Random,

    /// A ring centered on the surface, radius `0.35 * height` with a small
    /// per-particle jitter.
    Circle,

    /// Two square brackets framing the center, one per particle parity.
    Brackets,
}

impl Formation {
    /// Whether particles spring toward assigned targets in this formation.
    pub fn is_seeking(&self) -> bool {
        !matches!(self, Formation::Random)
    }

    /// Generate one target per particle for a `width x height` surface.
    ///
    /// Targets are scattered along the shape, not ordered around it: each
    /// particle lands on a random point of its segment, and a few pixels of
    /// noise keep the outline hand-drawn rather than crisp.
    pub fn targets(&self, count: usize, width: f32, height: f32, rng: &mut SmallRng) -> Vec<Vec2> {
        match self {
            Formation::Random => (0..count)
                .map(|_| Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)))
                .collect(),

            Formation::Circle => {
                let center = Vec2::new(width, height) * 0.5;
                let base_radius = height * 0.35;
                (0..count)
                    .map(|i| {
                        let angle = i as f32 / count as f32 * std::f32::consts::TAU;
                        let radius = base_radius + rng.gen_range(-20.0..20.0);
                        center + Vec2::new(angle.cos(), angle.sin()) * radius
                    })
                    .collect()
            }

            Formation::Brackets => {
                let center = Vec2::new(width, height) * 0.5;
                let bracket_width = width * 0.15;
                let bracket_height = height * 0.4;
                let spacing = width * 0.25;
                (0..count)
                    .map(|i| {
                        let side = if i % 2 == 0 { -1.0 } else { 1.0 };
                        let progress: f32 = rng.gen();
                        let mut point = if progress < 0.2 {
                            // Top bar, running outward from the vertical.
                            Vec2::new(
                                center.x + side * (spacing + rng.gen::<f32>() * bracket_width),
                                center.y - bracket_height,
                            )
                        } else if progress > 0.8 {
                            Vec2::new(
                                center.x + side * (spacing + rng.gen::<f32>() * bracket_width),
                                center.y + bracket_height,
                            )
                        } else {
                            let t = (progress - 0.2) / 0.6;
                            Vec2::new(
                                center.x + side * spacing,
                                center.y - bracket_height + t * (bracket_height * 2.0),
                            )
                        };
                        point.x += rng.gen_range(-10.0..10.0);
                        point.y += rng.gen_range(-10.0..10.0);
                        point
                    })
                    .collect()
            }
        }
    }
}

/// The default rotation: wander, brackets, wander, circle.
pub const DEFAULT_SEQUENCE: [Formation; 4] = [
    Formation::Random,
    Formation::Brackets,
    Formation::Random,
    Formation::Circle,
];

/// Default time between formation switches.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(4);

/// Cycles through a fixed formation sequence on a fixed period.
///
/// Deterministic: after `n` advances the active formation is
/// `sequence[n % sequence.len()]`.
#[derive(Debug, Clone)]
pub struct FormationCycle {
    sequence: Vec<Formation>,
    index: usize,
    period: Duration,
    deadline: Instant,
}

impl Default for FormationCycle {
    fn default() -> Self {
        Self::new(DEFAULT_SEQUENCE.to_vec(), DEFAULT_PERIOD)
    }
}

impl FormationCycle {
    /// Create a cycle starting at the first entry, with the first switch one
    /// `period` from now. An empty sequence falls back to the default.
    pub fn new(sequence: Vec<Formation>, period: Duration) -> Self {
        let sequence = if sequence.is_empty() {
            DEFAULT_SEQUENCE.to_vec()
        } else {
            sequence
        };
        Self {
            sequence,
            index: 0,
            period,
            deadline: Instant::now() + period,
        }
    }

    /// The formation currently driving the field.
    pub fn active(&self) -> Formation {
        self.sequence[self.index]
    }

    /// The configured sequence.
    pub fn sequence(&self) -> &[Formation] {
        &self.sequence
    }

    /// Time between switches.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Step to the next formation and return it.
    pub fn advance(&mut self) -> Formation {
        self.index = (self.index + 1) % self.sequence.len();
        self.active()
    }

    /// Advance if the deadline has passed.
    ///
    /// Fires at most once per call and re-arms relative to `now`: intervals
    /// missed while the loop was stalled are not replayed.
    pub fn poll(&mut self, now: Instant) -> Option<Formation> {
        if now < self.deadline {
            return None;
        }
        self.deadline = now + self.period;
        Some(self.advance())
    }

    /// Return to the first entry with a fresh deadline.
    pub fn reset(&mut self) {
        self.index = 0;
        self.deadline = Instant::now() + self.period;
    }
}
