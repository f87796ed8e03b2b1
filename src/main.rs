//! Default backdrop binary.
//!
//! Runs the stock configuration: dark theme, trail effect, the default
//! formation cycle. Control log output with `RUST_LOG`.

use antigravity::Backdrop;

fn main() {
    env_logger::init();

    if let Err(e) = Backdrop::new().run() {
        eprintln!("Backdrop error: {}", e);
        std::process::exit(1);
    }
}
