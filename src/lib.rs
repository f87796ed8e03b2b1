//! # Antigravity
//!
//! A morphing particle backdrop for native windows.
//!
//! Antigravity fills a window with drifting dash particles that periodically
//! pull themselves into formations (a ring, a pair of brackets) and scatter
//! again. The cursor pushes nearby dashes aside. Painting runs on the GPU
//! with a trail effect that leaves a fading streak behind every dash.
//!
//! ## Quick Start
//!
//! ```ignore
//! use antigravity::prelude::*;
//!
//! fn main() -> Result<(), BackdropError> {
//!     Backdrop::new()
//!         .with_title("My Backdrop")
//!         .with_theme(Theme::Dark)
//!         .with_visuals(|v| {
//!             v.palette(Palette::Ember);
//!         })
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! Each dash is a [`Particle`]: position, velocity, a formation target, a
//! palette color, and the length/thickness/rotation used to draw it. The
//! whole batch lives in a [`ParticleField`] sized to the window; how many
//! spawn is decided by [`Population`] from the surface width.
//!
//! ### Formations
//!
//! A [`FormationCycle`] switches the active [`Formation`] on a fixed
//! period. `Random` lets particles wander freely with wrapping edges;
//! `Circle` and `Brackets` assign per-particle targets and switch the
//! motion to a damped spring that pulls each dash onto its target.
//!
//! ### Tuning
//!
//! [`MotionConfig`] holds the feel of the motion (jitter, speed cap,
//! spring stiffness and damping, cursor repulsion). [`VisualConfig`] holds
//! the look (theme, palette, trail fade, dash size ranges). Both are set
//! on the [`Backdrop`] builder before `run()`.
//!
//! ## Controls
//!
//! | Key | Action |
//! |-------|--------|
//! | `Esc` | Quit |
//! | `T` | Toggle dark/light theme |
//! | `Space` | Pause and resume |
//!
//! Set `RUST_LOG=antigravity=debug` to watch formation switches and
//! resizes in the log.

mod backdrop;
pub mod error;
pub mod field;
pub mod formation;
mod gpu;
pub mod input;
pub mod motion;
pub mod particle;
pub mod time;
pub mod visuals;

pub use backdrop::Backdrop;
pub use error::{BackdropError, GpuError};
pub use field::ParticleField;
pub use formation::{Formation, FormationCycle, DEFAULT_PERIOD, DEFAULT_SEQUENCE};
pub use glam::{Vec2, Vec3};
pub use input::Cursor;
pub use motion::MotionConfig;
pub use particle::{Particle, Population};
pub use time::Time;
pub use visuals::{ClearMode, Palette, Theme, VisualConfig};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use antigravity::prelude::*;
/// ```
///
/// This imports:
/// - [`Backdrop`] - the backdrop builder
/// - [`Formation`], [`FormationCycle`] - the formation machinery
/// - [`MotionConfig`] - motion tuning
/// - [`Theme`], [`Palette`], [`ClearMode`], [`VisualConfig`] - the look
/// - [`Particle`], [`Population`], [`ParticleField`] - the batch itself
/// - [`Vec2`], [`Vec3`] - glam vector types
pub mod prelude {
    pub use crate::backdrop::Backdrop;
    pub use crate::error::{BackdropError, GpuError};
    pub use crate::field::ParticleField;
    pub use crate::formation::{Formation, FormationCycle};
    pub use crate::input::Cursor;
    pub use crate::motion::MotionConfig;
    pub use crate::particle::{Particle, Population};
    pub use crate::time::Time;
    pub use crate::visuals::{ClearMode, Palette, Theme, VisualConfig};
    pub use crate::{Vec2, Vec3};
}
