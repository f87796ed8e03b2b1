//! Integration tests for the backdrop through its public API.
//!
//! These tests drive a [`ParticleField`] and [`FormationCycle`] the way the
//! window shell does, without opening a window.

use std::time::{Duration, Instant};

use antigravity::{
    ClearMode, Formation, FormationCycle, MotionConfig, Palette, ParticleField, Population, Theme,
    Vec2, Vec3, VisualConfig,
};

fn field_at(width: f32, height: f32, seed: u64) -> ParticleField {
    ParticleField::new(
        width,
        height,
        Population::default(),
        VisualConfig::default(),
        MotionConfig::default(),
        Some(seed),
    )
}

// ============================================================================
// Population and Spawning
// ============================================================================

#[test]
fn test_wide_surface_gets_full_population() {
    let field = field_at(1000.0, 800.0, 1);
    assert_eq!(field.len(), 600);
}

#[test]
fn test_narrow_surface_gets_reduced_population() {
    let field = field_at(600.0, 800.0, 1);
    assert_eq!(field.len(), 250);
}

#[test]
fn test_population_cutoff_is_exclusive() {
    assert_eq!(field_at(768.0, 800.0, 1).len(), 250);
    assert_eq!(field_at(769.0, 800.0, 1).len(), 600);
}

#[test]
fn test_custom_population_rule() {
    let population = Population {
        wide: 40,
        narrow: 10,
        threshold: 500.0,
    };
    let field = ParticleField::new(
        640.0,
        480.0,
        population,
        VisualConfig::default(),
        MotionConfig::default(),
        Some(1),
    );
    assert_eq!(field.len(), 40);
}

#[test]
fn test_spawned_dashes_have_renderable_attributes() {
    let field = field_at(1000.0, 800.0, 2);

    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 1000.0);
        assert!(p.position.y >= 0.0 && p.position.y < 800.0);
        assert!(p.length >= 3.0 && p.length < 9.0);
        assert!(p.thickness >= 1.0 && p.thickness < 2.5);
        assert_eq!(p.rotation, 0.0);
    }
}

#[test]
fn test_resize_regenerates_for_the_new_surface() {
    let mut field = field_at(1000.0, 800.0, 3);
    assert_eq!(field.len(), 600);

    field.resize(600.0, 500.0);

    assert_eq!(field.len(), 250);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 600.0);
        assert!(p.position.y >= 0.0 && p.position.y < 500.0);
    }
}

// ============================================================================
// Wander and Seek Regimes
// ============================================================================

#[test]
fn test_wander_keeps_dashes_inside_bounds() {
    let mut field = field_at(1000.0, 800.0, 4);
    let cursor = Some(Vec2::new(500.0, 400.0));

    for _ in 0..300 {
        field.step(Formation::Random, cursor);
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
fn test_seek_pulls_dashes_onto_targets() {
    let mut field = field_at(1000.0, 800.0, 5);
    field.apply_formation(Formation::Circle);

    for _ in 0..600 {
        field.step(Formation::Circle, None);
    }

    for p in field.particles() {
        assert!((p.position - p.target).length() < 1.0);
        assert!(p.velocity.length() < 0.1);
    }
}

#[test]
fn test_random_formation_assigns_no_targets() {
    let mut field = field_at(1000.0, 800.0, 6);
    field.apply_formation(Formation::Circle);
    let circle_targets: Vec<Vec2> = field.particles().iter().map(|p| p.target).collect();

    // Random never overwrites targets; the old ones stay put
    field.apply_formation(Formation::Random);
    let after: Vec<Vec2> = field.particles().iter().map(|p| p.target).collect();
    assert_eq!(circle_targets, after);
}

#[test]
fn test_cursor_state_threads_into_the_step() {
    let mut with_cursor = field_at(1000.0, 800.0, 7);
    let mut without = with_cursor.clone();
    let cursor = Some(Vec2::new(500.0, 400.0));

    for _ in 0..5 {
        with_cursor.step(Formation::Random, cursor);
        without.step(Formation::Random, None);
    }

    // Same seed, so any divergence comes from the repulsion alone
    assert_ne!(with_cursor.particles(), without.particles());
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let mut a = field_at(1000.0, 800.0, 8);
    let mut b = field_at(1000.0, 800.0, 8);

    a.apply_formation(Formation::Brackets);
    b.apply_formation(Formation::Brackets);
    for _ in 0..50 {
        a.step(Formation::Brackets, None);
        b.step(Formation::Brackets, None);
    }

    assert_eq!(a.particles(), b.particles());
}

// ============================================================================
// Formation Cycle
// ============================================================================

#[test]
fn test_default_cycle_order() {
    let mut cycle = FormationCycle::default();
    assert_eq!(cycle.active(), Formation::Random);
    assert_eq!(cycle.advance(), Formation::Brackets);
    assert_eq!(cycle.advance(), Formation::Random);
    assert_eq!(cycle.advance(), Formation::Circle);
    assert_eq!(cycle.advance(), Formation::Random);
}

#[test]
fn test_cycle_position_is_index_mod_length() {
    let mut cycle = FormationCycle::default();
    let seq = cycle.sequence().to_vec();
    for n in 1..=10 {
        assert_eq!(cycle.advance(), seq[n % seq.len()]);
    }
}

#[test]
fn test_poll_fires_once_per_period() {
    let mut cycle = FormationCycle::default();
    let period = cycle.period();
    let t0 = Instant::now();

    assert_eq!(cycle.poll(t0), None);
    assert_eq!(cycle.poll(t0 + period / 2), None);

    // Walk the deadline forward one period at a time
    let mut seen = Vec::new();
    for n in 1..=4u32 {
        if let Some(f) = cycle.poll(t0 + period * n + Duration::from_millis(1)) {
            seen.push(f);
        }
    }
    assert_eq!(
        seen,
        vec![
            Formation::Brackets,
            Formation::Random,
            Formation::Circle,
            Formation::Random,
        ]
    );
}

#[test]
fn test_custom_sequence_cycles() {
    let mut cycle = FormationCycle::new(
        vec![Formation::Circle, Formation::Brackets],
        Duration::from_secs(1),
    );
    assert_eq!(cycle.active(), Formation::Circle);
    assert_eq!(cycle.advance(), Formation::Brackets);
    assert_eq!(cycle.advance(), Formation::Circle);
}

// ============================================================================
// Visual Configuration
// ============================================================================

#[test]
fn test_theme_backgrounds() {
    let dark = Theme::Dark.background();
    assert!((dark.x - 5.0 / 255.0).abs() < 0.001);
    assert!((dark.y - 5.0 / 255.0).abs() < 0.001);
    assert!((dark.z - 5.0 / 255.0).abs() < 0.001);

    assert_eq!(Theme::Light.background(), Vec3::ONE);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

#[test]
fn test_visual_config_chaining() {
    let mut v = VisualConfig::new();
    v.theme(Theme::Light)
        .palette(Palette::Mono)
        .clear_mode(ClearMode::Full)
        .trail_fade(0.2);

    assert_eq!(v.theme, Theme::Light);
    assert_eq!(v.palette, Palette::Mono);
    assert_eq!(v.clear_mode, ClearMode::Full);
    assert!((v.trail_fade - 0.2).abs() < 0.001);
}

#[test]
fn test_trail_fade_defaults_on() {
    let v = VisualConfig::default();
    assert_eq!(v.clear_mode, ClearMode::Trails);
    assert!((v.trail_fade - 0.4).abs() < 0.001);
}

// ============================================================================
// End to End
// ============================================================================

/// Drives a 1000x800 field through two full cycles the way the shell's
/// redraw handler does, checking the show holds together at every switch.
#[test]
fn test_mounted_field_runs_the_default_show() {
    let mut field = field_at(1000.0, 800.0, 42);
    let mut cycle = FormationCycle::default();
    let period = cycle.period();
    let t0 = Instant::now();

    let mut observed = vec![cycle.active()];

    for n in 1..=8u32 {
        if let Some(formation) = cycle.poll(t0 + period * n + Duration::from_millis(1)) {
            field.apply_formation(formation);
            observed.push(formation);
        }
        for _ in 0..30 {
            field.step(cycle.active(), Some(Vec2::new(500.0, 400.0)));
        }
        assert_eq!(field.len(), 600);
        for p in field.particles() {
            assert!(p.position.is_finite());
            assert!(p.velocity.is_finite());
            assert!(p.rotation.is_finite());
        }
    }

    assert_eq!(
        observed,
        vec![
            Formation::Random,
            Formation::Brackets,
            Formation::Random,
            Formation::Circle,
            Formation::Random,
            Formation::Brackets,
            Formation::Random,
            Formation::Circle,
            Formation::Random,
        ]
    );
}
