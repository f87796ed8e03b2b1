//! Particle records and population sizing.
//!
//! A [`Particle`] is plain data: spawning lives here, per-tick motion lives
//! in [`crate::motion`], and batch ownership in [`crate::field`].

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::visuals::VisualConfig;

/// One dash in the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Surface-space position in pixels, origin top-left, y down.
    pub position: Vec2,
    /// Displacement applied per tick.
    pub velocity: Vec2,
    /// Seek destination. Equals the spawn position until a formation
    /// assigns one.
    pub target: Vec2,
    /// Palette stop sampled at spawn (RGB, 0.0-1.0).
    pub color: Vec3,
    /// Dash length in pixels.
    pub length: f32,
    /// Stroke width in pixels.
    pub thickness: f32,
    /// Heading in radians, derived from velocity each tick.
    pub rotation: f32,
}

impl Particle {
    /// Spawn a particle at a uniform random position inside
    /// `width x height`, with dash attributes drawn from `visuals`.
    ///
    /// Initial velocity components are uniform in `[-1, 1)`; the target is
    /// the spawn position and the heading is zero until the first tick.
    pub fn spawn(width: f32, height: f32, visuals: &VisualConfig, rng: &mut SmallRng) -> Self {
        let position = Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
        let colors = visuals.palette.colors();
        let (len_min, len_max) = visuals.dash_length;
        let (th_min, th_max) = visuals.dash_thickness;
        Self {
            position,
            velocity: Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
            target: position,
            color: colors[rng.gen_range(0..colors.len())],
            length: rng.gen_range(len_min..len_max),
            thickness: rng.gen_range(th_min..th_max),
            rotation: 0.0,
        }
    }
}

/// Population rule: how many particles a surface of a given width gets.
///
/// Wide surfaces get the full population, narrow ones a reduced count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Population {
    /// Count when the surface is wider than `threshold` pixels.
    pub wide: u32,
    /// Count at or below the threshold.
    pub narrow: u32,
    /// Width cutoff in pixels.
    pub threshold: f32,
}

impl Default for Population {
    fn default() -> Self {
        Self {
            wide: 600,
            narrow: 250,
            threshold: 768.0,
        }
    }
}

impl Population {
    /// Particle count for a surface `width` pixels wide.
    pub fn for_width(&self, width: f32) -> u32 {
        if width > self.threshold {
            self.wide
        } else {
            self.narrow
        }
    }

    /// The larger of the two counts. Used to size GPU buffers once.
    pub fn max_count(&self) -> u32 {
        self.wide.max(self.narrow)
    }
}
