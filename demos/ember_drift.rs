//! # Ember Drift
//!
//! Warm palette on a slow two-formation cycle. The fixed seed makes every
//! run identical, which is handy for captures.
//!
//! Run with: `cargo run --example ember_drift`

use std::time::Duration;

use antigravity::prelude::*;

fn main() -> Result<(), BackdropError> {
    env_logger::init();

    Backdrop::new()
        .with_title("Ember Drift")
        .with_visuals(|v| {
            // Longer-lived trails suit the slower cycle
            v.palette(Palette::Ember).trail_fade(0.25);
        })
        .with_sequence(vec![Formation::Random, Formation::Circle])
        .with_period(Duration::from_secs(6))
        .with_seed(7)
        .run()
}
