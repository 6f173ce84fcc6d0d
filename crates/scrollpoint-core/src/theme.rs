#![forbid(unsafe_code)]

//! Typed theme tokens for section display metadata.
//!
//! Render consumers resolve colors from these tokens rather than
//! interpolating style strings at runtime; the controller itself never
//! reads them.

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

/// RGB color with an alpha channel in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Base color.
    pub rgb: Rgb,
    /// Opacity, 0.0 = transparent, 1.0 = opaque.
    pub alpha: f32,
}

impl Rgba {
    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            alpha,
        }
    }

    /// Return the same color scaled to a different opacity.
    #[must_use]
    pub fn with_opacity(self, alpha: f32) -> Self {
        Self {
            rgb: self.rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

/// Semantic color slots for one section.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionTheme {
    /// Accent color for titles, borders, and the progress indicator dot.
    pub accent: Rgb,
    /// Translucent backdrop tint behind the section's card and scene.
    pub backdrop: Rgba,
}

impl SectionTheme {
    /// Create a theme from an accent color and a backdrop tint.
    #[must_use]
    pub const fn new(accent: Rgb, backdrop: Rgba) -> Self {
        Self { accent, backdrop }
    }
}

impl Default for SectionTheme {
    fn default() -> Self {
        // Neutral gray used when a section declares no theme of its own.
        Self {
            accent: Rgb::new(102, 102, 102),
            backdrop: Rgba::new(55, 65, 81, 0.3),
        }
    }
}
