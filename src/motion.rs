//! Per-tick motion for the particle field.
//!
//! Two regimes share one integrator: **wander** (random acceleration,
//! per-component speed clamp, modular edge wrap) drives the field while no
//! formation is assigned, and **seek** (damped spring toward the target, no
//! clamp, no wrap) pulls particles into a formation. The cursor repulsion is
//! a displacement added on top of either regime.
//!
//! All functions here are pure over their arguments, so the physics is
//! testable without a window or GPU. Constants are per tick, not per second:
//! the field advances once per rendered frame.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::particle::Particle;

/// Motion constants, in pixels and pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Full width of the random acceleration applied per axis per tick in
    /// wander mode. Each sample is uniform in `[-jitter / 2, jitter / 2)`.
    pub jitter: f32,
    /// Per-component velocity clamp in wander mode.
    pub speed_cap: f32,
    /// Spring constant pulling toward the target in seek mode.
    pub stiffness: f32,
    /// Fraction of velocity kept per tick in seek mode. Below `1.0` the
    /// spring converges instead of oscillating forever.
    pub damping: f32,
    /// Radius of the cursor repulsion zone in pixels.
    pub repel_radius: f32,
    /// Repulsion displacement at zero distance. Falls off linearly to zero
    /// at `repel_radius`.
    pub repel_strength: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            jitter: 0.2,
            speed_cap: 2.0,
            stiffness: 0.02,
            damping: 0.85,
            repel_radius: 150.0,
            repel_strength: 5.0,
        }
    }
}

/// Displacement pushing a particle away from the cursor.
///
/// Zero when the cursor is absent or at least `repel_radius` away. Inside
/// the zone the magnitude falls off linearly from `repel_strength` under the
/// cursor to zero at the rim. A particle exactly under the cursor is pushed
/// along +x at full strength.
pub fn cursor_repulsion(position: Vec2, cursor: Option<Vec2>, config: &MotionConfig) -> Vec2 {
    let Some(cursor) = cursor else {
        return Vec2::ZERO;
    };
    let away = position - cursor;
    let dist = away.length();
    if dist >= config.repel_radius {
        return Vec2::ZERO;
    }
    let magnitude = config.repel_strength * (config.repel_radius - dist) / config.repel_radius;
    if dist <= f32::EPSILON {
        return Vec2::X * magnitude;
    }
    (away / dist) * magnitude
}

/// Advance one particle one tick in wander mode.
///
/// Jitters the velocity, clamps each component to `speed_cap`, integrates
/// with the cursor displacement, then wraps the position into
/// `[0, bounds.x) x [0, bounds.y)`. The heading follows the velocity.
pub fn step_wander(
    particle: &mut Particle,
    repel: Vec2,
    bounds: Vec2,
    config: &MotionConfig,
    rng: &mut SmallRng,
) {
    if config.jitter > 0.0 {
        let half = config.jitter * 0.5;
        particle.velocity.x += rng.gen_range(-half..half);
        particle.velocity.y += rng.gen_range(-half..half);
    }
    particle.velocity = particle
        .velocity
        .clamp(Vec2::splat(-config.speed_cap), Vec2::splat(config.speed_cap));

    particle.position += particle.velocity + repel;
    particle.position.x = particle.position.x.rem_euclid(bounds.x);
    particle.position.y = particle.position.y.rem_euclid(bounds.y);

    particle.rotation = particle.velocity.y.atan2(particle.velocity.x);
}

/// Advance one particle one tick in seek mode.
///
/// Spring acceleration toward the target, velocity damping, integration
/// with the cursor displacement. No clamp and no wrap: a push past the edge
/// is pulled back by the spring on later ticks. The heading follows the
/// velocity.
pub fn step_seek(particle: &mut Particle, repel: Vec2, config: &MotionConfig) {
    particle.velocity += (particle.target - particle.position) * config.stiffness;
    particle.velocity *= config.damping;
    particle.position += particle.velocity + repel;
    particle.rotation = particle.velocity.y.atan2(particle.velocity.x);
}
