//! # Daylight
//!
//! Light theme without trails: every frame starts from a clean white
//! canvas, so the dashes read as crisp strokes instead of streaks.
//!
//! Run with: `cargo run --example daylight`

use antigravity::prelude::*;

fn main() -> Result<(), BackdropError> {
    env_logger::init();

    Backdrop::new()
        .with_title("Daylight")
        .with_theme(Theme::Light)
        .with_visuals(|v| {
            v.clear_mode(ClearMode::Full);
        })
        .run()
}
