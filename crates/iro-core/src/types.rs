//! Color space descriptors
//!
//! [`ColorSpace`] names every space a [`Color`] can be built from or read
//! out in, so callers can pick the space at runtime (from a config value,
//! a CSS `color()` identifier, a buffer description).

use std::fmt;
use std::str::FromStr;

use crate::Color;
use crate::error::Error;

/// A color space with a conversion to and from XYZ D65
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// CIE XYZ with D65 white, stored without transformation
    Xyz,
    /// Gamma-encoded sRGB
    Srgb,
    /// Linear-light sRGB
    LinearSrgb,
    /// Gamma-encoded Display P3
    DisplayP3,
    /// Linear-light Display P3
    LinearDisplayP3,
    /// OKLab (L, a, b)
    Oklab,
    /// OKLCh (L, C, h) with h in radians
    Oklch,
}

impl ColorSpace {
    /// Every supported space
    pub const ALL: [Self; 7] = [
        Self::Xyz,
        Self::Srgb,
        Self::LinearSrgb,
        Self::DisplayP3,
        Self::LinearDisplayP3,
        Self::Oklab,
        Self::Oklch,
    ];

    /// CSS Color 4 identifier for this space
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Xyz => "xyz-d65",
            Self::Srgb => "srgb",
            Self::LinearSrgb => "srgb-linear",
            Self::DisplayP3 => "display-p3",
            Self::LinearDisplayP3 => "display-p3-linear",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
        }
    }

    /// Check if this is an RGB space
    pub fn is_rgb(&self) -> bool {
        matches!(
            self,
            Self::Srgb | Self::LinearSrgb | Self::DisplayP3 | Self::LinearDisplayP3
        )
    }

    /// Check if channel values are proportional to light
    pub fn is_linear(&self) -> bool {
        matches!(self, Self::Xyz | Self::LinearSrgb | Self::LinearDisplayP3)
    }

    /// Check if in-gamut channels lie in `[0, 1]`
    ///
    /// Only these spaces can be stored as fixed-width integers.
    pub fn is_bounded(&self) -> bool {
        self.is_rgb()
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    /// Parse a CSS Color 4 identifier, case-insensitively.
    ///
    /// `xyz` is accepted as an alias of `xyz-d65`, matching CSS.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "xyz" {
            return Ok(Self::Xyz);
        }
        Self::ALL
            .into_iter()
            .find(|space| space.name() == name)
            .ok_or_else(|| Error::UnknownColorSpace(s.to_string()))
    }
}

impl Color {
    /// Build a color from three channels in `space` plus alpha
    pub fn from_space(space: ColorSpace, c: [f64; 3], alpha: f64) -> Self {
        let [c0, c1, c2] = c;
        match space {
            ColorSpace::Xyz => Self::from_xyz(c0, c1, c2, alpha),
            ColorSpace::Srgb => Self::from_srgb(c0, c1, c2, alpha),
            ColorSpace::LinearSrgb => Self::from_linear_srgb(c0, c1, c2, alpha),
            ColorSpace::DisplayP3 => Self::from_display_p3(c0, c1, c2, alpha),
            ColorSpace::LinearDisplayP3 => Self::from_linear_display_p3(c0, c1, c2, alpha),
            ColorSpace::Oklab => Self::from_oklab(c0, c1, c2, alpha),
            ColorSpace::Oklch => Self::from_oklch(c0, c1, c2, alpha),
        }
    }

    /// Channels of this color in `space`, plus alpha
    pub fn to_space(&self, space: ColorSpace) -> ([f64; 3], f64) {
        let (c0, c1, c2, alpha) = match space {
            ColorSpace::Xyz => self.to_xyz(),
            ColorSpace::Srgb => self.to_srgb(),
            ColorSpace::LinearSrgb => self.to_linear_srgb(),
            ColorSpace::DisplayP3 => self.to_display_p3(),
            ColorSpace::LinearDisplayP3 => self.to_linear_display_p3(),
            ColorSpace::Oklab => self.to_oklab(),
            ColorSpace::Oklch => self.to_oklch(),
        };
        ([c0, c1, c2], alpha)
    }

    /// Convert three channels plus alpha from one space to another
    #[inline]
    pub fn convert(from: ColorSpace, to: ColorSpace, c: [f64; 3], alpha: f64) -> ([f64; 3], f64) {
        Self::from_space(from, c, alpha).to_space(to)
    }
}
