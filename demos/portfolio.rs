//! # Portfolio
//!
//! The stock backdrop: dark theme, blue palette, trail effect, and the
//! default formation cycle. Move the cursor to push dashes aside; press
//! `T` to flip the theme and `Space` to freeze the motion.
//!
//! Run with: `cargo run --example portfolio`

use antigravity::prelude::*;

fn main() -> Result<(), BackdropError> {
    env_logger::init();

    Backdrop::new().with_title("Portfolio").run()
}
