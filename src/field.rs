//! The particle field: batch ownership and per-frame stepping.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::formation::Formation;
use crate::motion::{cursor_repulsion, step_seek, step_wander, MotionConfig};
use crate::particle::{Particle, Population};
use crate::visuals::VisualConfig;

/// Owns the particle batch for one surface.
///
/// The field is surface-shaped: construction and [`resize`](Self::resize)
/// spawn a fresh batch sized by the [`Population`] rule, and every tick
/// advances all particles under the active formation's regime. Rendering
/// reads the batch through [`particles`](Self::particles).
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    population: Population,
    visuals: VisualConfig,
    motion: MotionConfig,
    rng: SmallRng,
}

impl ParticleField {
    /// Spawn a field for a `width x height` surface.
    ///
    /// `seed` fixes the RNG for reproducible runs; `None` seeds from
    /// entropy.
    pub fn new(
        width: f32,
        height: f32,
        population: Population,
        visuals: VisualConfig,
        motion: MotionConfig,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut field = Self {
            particles: Vec::new(),
            width,
            height,
            population,
            visuals,
            motion,
            rng,
        };
        field.respawn();
        field
    }

    fn respawn(&mut self) {
        let count = self.population.for_width(self.width) as usize;
        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            batch.push(Particle::spawn(
                self.width,
                self.height,
                &self.visuals,
                &mut self.rng,
            ));
        }
        self.particles = batch;
    }

    /// Discard the batch and respawn for new surface extents.
    ///
    /// Nothing survives a resize: the new surface gets a brand-new batch,
    /// possibly at the other population count. Degenerate extents are
    /// ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.width = width;
        self.height = height;
        self.respawn();
    }

    /// Generate and assign targets for `formation`.
    ///
    /// Skipped for [`Formation::Random`]: wander mode never reads targets,
    /// and particles keep their last velocity as the initial drift.
    pub fn apply_formation(&mut self, formation: Formation) {
        if !formation.is_seeking() {
            return;
        }
        let count = self.particles.len();
        let targets = formation.targets(count, self.width, self.height, &mut self.rng);
        for (particle, target) in self.particles.iter_mut().zip(targets) {
            particle.target = target;
        }
    }

    /// Advance every particle one tick under `formation`'s regime, with the
    /// cursor repulsion applied on top.
    pub fn step(&mut self, formation: Formation, cursor: Option<Vec2>) {
        let bounds = Vec2::new(self.width, self.height);
        let seeking = formation.is_seeking();
        for particle in &mut self.particles {
            let repel = cursor_repulsion(particle.position, cursor, &self.motion);
            if seeking {
                step_seek(particle, repel, &self.motion);
            } else {
                step_wander(particle, repel, bounds, &self.motion, &mut self.rng);
            }
        }
    }

    /// The current batch.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles in the batch.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Surface extents the field was spawned for.
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Motion constants in use.
    pub fn motion(&self) -> &MotionConfig {
        &self.motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_field(width: f32, height: f32) -> ParticleField {
        ParticleField::new(
            width,
            height,
            Population::default(),
            VisualConfig::default(),
            MotionConfig::default(),
            Some(7),
        )
    }

    #[test]
    fn test_population_follows_surface_width() {
        assert_eq!(test_field(1000.0, 800.0).len(), 600);
        assert_eq!(test_field(640.0, 480.0).len(), 250);
    }

    #[test]
    fn test_resize_respawns_everything() {
        let mut field = test_field(1000.0, 800.0);
        field.resize(640.0, 480.0);

        assert_eq!(field.len(), 250);
        assert_eq!(field.bounds(), Vec2::new(640.0, 480.0));
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 640.0);
            assert!(p.position.y >= 0.0 && p.position.y < 480.0);
            assert_eq!(p.target, p.position);
            assert_eq!(p.rotation, 0.0);
        }
    }

    #[test]
    fn test_degenerate_resize_is_ignored() {
        let mut field = test_field(1000.0, 800.0);
        field.resize(0.0, 480.0);

        assert_eq!(field.len(), 600);
        assert_eq!(field.bounds(), Vec2::new(1000.0, 800.0));
    }

    #[test]
    fn test_random_formation_leaves_targets_alone() {
        let mut field = test_field(1000.0, 800.0);
        field.apply_formation(Formation::Circle);
        let assigned: Vec<Vec2> = field.particles().iter().map(|p| p.target).collect();

        field.apply_formation(Formation::Random);
        let after: Vec<Vec2> = field.particles().iter().map(|p| p.target).collect();
        assert_eq!(assigned, after);
    }

    #[test]
    fn test_seeking_formation_assigns_every_target() {
        let mut field = test_field(1000.0, 800.0);
        field.apply_formation(Formation::Circle);

        let center = Vec2::new(500.0, 400.0);
        for p in field.particles() {
            let radius = p.target.distance(center);
            assert!(radius >= 800.0 * 0.35 - 20.001);
            assert!(radius <= 800.0 * 0.35 + 20.001);
        }
    }

    #[test]
    fn test_wander_steps_stay_in_bounds() {
        let mut field = test_field(1000.0, 800.0);
        for _ in 0..300 {
            field.step(Formation::Random, Some(Vec2::new(500.0, 400.0)));
        }

        let cap = field.motion().speed_cap;
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 1000.0);
            assert!(p.position.y >= 0.0 && p.position.y < 800.0);
            assert!(p.velocity.x.abs() <= cap);
            assert!(p.velocity.y.abs() <= cap);
        }
    }

    #[test]
    fn test_seek_steps_gather_the_field() {
        let mut field = test_field(1000.0, 800.0);
        field.apply_formation(Formation::Circle);
        for _ in 0..600 {
            field.step(Formation::Circle, None);
        }

        for p in field.particles() {
            assert!(p.position.distance(p.target) < 1.0);
        }
    }

    #[test]
    fn test_seeded_fields_match() {
        let mut a = test_field(1000.0, 800.0);
        let mut b = test_field(1000.0, 800.0);
        assert_eq!(a.particles(), b.particles());

        let cursor = Some(Vec2::new(300.0, 300.0));
        for _ in 0..50 {
            a.step(Formation::Random, cursor);
            b.step(Formation::Random, cursor);
        }
        assert_eq!(a.particles(), b.particles());
    }
}
