//! Visual configuration for the backdrop.
//!
//! This module controls how the backdrop looks (theme, frame-clear behavior,
//! dash palette and proportions), separate from the motion constants in
//! [`crate::motion`].
//!
//! # Usage
//!
//! ```ignore
//! Backdrop::new()
//!     .with_visuals(|v| {
//!         v.theme(Theme::Light);
//!         v.clear_mode(ClearMode::Full);
//!         v.palette(Palette::Ember);
//!     })
//!     .run()?;
//! ```

use glam::Vec3;

/// Light or dark backdrop theme.
///
/// The theme picks the background tint, which is also the color of the
/// per-frame trail fill in [`ClearMode::Trails`]. Switchable at runtime
/// (the shell binds it to the `T` key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Near-black background (default).
    #[default]
    Dark,

    /// White background.
    Light,
}

impl Theme {
    /// Background tint for this theme (RGB, 0.0-1.0).
    pub fn background(&self) -> Vec3 {
        match self {
            Theme::Dark => Vec3::splat(5.0 / 255.0),
            Theme::Light => Vec3::ONE,
        }
    }

    /// The opposite theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// How the previous frame is treated before the dashes are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearMode {
    /// Blend the background tint over the previous frame at low opacity, so
    /// moving dashes leave fading trails (default).
    #[default]
    Trails,

    /// Clear to the background tint completely every frame. No trails.
    Full,
}

/// Pre-defined dash color palettes.
///
/// A particle picks one stop uniformly at spawn and keeps it for life.
/// Every palette deliberately includes a stop close to each theme's
/// background, so a fraction of the dashes stays near-invisible on the
/// matching theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Blue phosphor stops with near-black and near-white accents (default).
    #[default]
    Phosphor,

    /// Warm embers - rust through amber and gold.
    Ember,

    /// Cool jade greens and teals.
    Mint,

    /// Grayscale dashes.
    Mono,
}

impl Palette {
    /// Get the color stops for this palette (6 colors).
    pub fn colors(&self) -> [Vec3; 6] {
        match self {
            Palette::Phosphor => [
                Vec3::new(0.102, 0.451, 0.910), // #1a73e8
                Vec3::new(0.259, 0.522, 0.957), // #4285f4
                Vec3::new(0.541, 0.706, 0.973), // #8ab4f8
                Vec3::new(0.682, 0.796, 0.980), // #aecbfa
                Vec3::new(0.125, 0.129, 0.141), // #202124
                Vec3::new(0.910, 0.918, 0.929), // #e8eaed
            ],
            Palette::Ember => [
                Vec3::new(0.553, 0.133, 0.023), // Rust
                Vec3::new(0.851, 0.333, 0.043), // Burnt orange
                Vec3::new(0.961, 0.549, 0.110), // Amber
                Vec3::new(0.988, 0.761, 0.349), // Gold
                Vec3::new(0.118, 0.071, 0.051), // Charcoal
                Vec3::new(0.980, 0.922, 0.843), // Warm white
            ],
            Palette::Mint => [
                Vec3::new(0.020, 0.439, 0.369), // Deep teal
                Vec3::new(0.059, 0.639, 0.521), // Jade
                Vec3::new(0.349, 0.800, 0.651), // Mint
                Vec3::new(0.639, 0.910, 0.800), // Pale mint
                Vec3::new(0.071, 0.122, 0.110), // Pine black
                Vec3::new(0.902, 0.969, 0.941), // Mint white
            ],
            Palette::Mono => [
                Vec3::splat(0.10),
                Vec3::splat(0.30),
                Vec3::splat(0.55),
                Vec3::splat(0.75),
                Vec3::splat(0.05),
                Vec3::splat(0.95),
            ],
        }
    }
}

/// Visual configuration for the backdrop surface and dashes.
///
/// All fields are public for direct access, but the recommended way to
/// configure is through [`Backdrop::with_visuals`](crate::Backdrop::with_visuals)
/// with the chainable setters below.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    /// Light or dark background.
    pub theme: Theme,
    /// Frame-clear behavior (fading trails vs a full clear).
    pub clear_mode: ClearMode,
    /// Opacity of the per-frame background fill in trail mode (0.0-1.0).
    /// Higher values shorten the trails.
    pub trail_fade: f32,
    /// Dash color palette.
    pub palette: Palette,
    /// Dash length range in pixels, sampled per particle at spawn.
    pub dash_length: (f32, f32),
    /// Dash thickness range in pixels, sampled per particle at spawn.
    pub dash_thickness: (f32, f32),
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            clear_mode: ClearMode::Trails,
            trail_fade: 0.4,
            palette: Palette::Phosphor,
            dash_length: (3.0, 9.0),
            dash_thickness: (1.0, 2.5),
        }
    }
}

impl VisualConfig {
    /// Create a new visual config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme.
    ///
    /// # Example
    ///
    /// ```ignore
    /// .with_visuals(|v| {
    ///     v.theme(Theme::Light);
    /// })
    /// ```
    pub fn theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = theme;
        self
    }

    /// Set the frame-clear mode.
    ///
    /// # Example
    ///
    /// ```ignore
    /// .with_visuals(|v| {
    ///     v.clear_mode(ClearMode::Full); // Crisp dashes, no trails
    /// })
    /// ```
    pub fn clear_mode(&mut self, mode: ClearMode) -> &mut Self {
        self.clear_mode = mode;
        self
    }

    /// Set the trail fade opacity.
    ///
    /// Only used in [`ClearMode::Trails`]. `0.4` matches the classic look;
    /// lower values leave longer trails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// .with_visuals(|v| {
    ///     v.trail_fade(0.15); // Long ghostly trails
    /// })
    /// ```
    pub fn trail_fade(&mut self, opacity: f32) -> &mut Self {
        self.trail_fade = opacity;
        self
    }

    /// Set the dash color palette.
    ///
    /// # Example
    ///
    /// ```ignore
    /// .with_visuals(|v| {
    ///     v.palette(Palette::Mint);
    /// })
    /// ```
    pub fn palette(&mut self, palette: Palette) -> &mut Self {
        self.palette = palette;
        self
    }

    /// Set the dash length range in pixels (sampled per particle at spawn).
    pub fn dash_length(&mut self, min: f32, max: f32) -> &mut Self {
        self.dash_length = (min, max);
        self
    }

    /// Set the dash thickness range in pixels (sampled per particle at spawn).
    pub fn dash_thickness(&mut self, min: f32, max: f32) -> &mut Self {
        self.dash_thickness = (min, max);
        self
    }
}
