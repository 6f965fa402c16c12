//! The canonical color value and its conversions
//!
//! [`Color`] stores a single point in CIE XYZ D65 plus alpha. Each external
//! space only knows how to get into and out of XYZ:
//!
//! - [`srgb`]: nonlinear and linear sRGB
//! - [`display_p3`]: nonlinear and linear Display P3
//! - [`oklab`]: OKLab and its polar form OKLCh
//!
//! Because the stored form never depends on where a color came from,
//! hopping across spaces does not accumulate the quantization or clipping
//! of any one encoding.

pub mod display_p3;
pub mod oklab;
pub mod srgb;

/// A color in CIE XYZ D65 with alpha
///
/// Immutable: every conversion returns a new value. Neither the coordinates
/// nor alpha are validated or clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    x: f64,
    y: f64,
    z: f64,
    alpha: f64,
}

impl Color {
    /// Fully transparent, all-zero color
    ///
    /// Also the result of unpremultiplying a pixel whose alpha is zero.
    pub const TRANSPARENT: Self = Self::from_xyz(0.0, 0.0, 0.0, 0.0);

    /// Opaque black
    pub const BLACK: Self = Self::from_xyz(0.0, 0.0, 0.0, 1.0);

    /// Opaque sRGB / Display P3 white (the D65 white point, Y = 1)
    pub const WHITE: Self = Self::from_xyz(
        506752.0 / 1228815.0 + 87881.0 / 245763.0 + 12673.0 / 70218.0,
        87098.0 / 409605.0 + 175762.0 / 245763.0 + 12673.0 / 175545.0,
        7918.0 / 409605.0 + 87881.0 / 737289.0 + 1001167.0 / 1053270.0,
        1.0,
    );

    /// Build a color from XYZ D65 coordinates and alpha, stored verbatim
    #[inline]
    pub const fn from_xyz(x: f64, y: f64, z: f64, alpha: f64) -> Self {
        Self { x, y, z, alpha }
    }

    /// XYZ D65 coordinates and alpha, exactly as stored
    #[inline]
    pub const fn to_xyz(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.z, self.alpha)
    }

    /// Alpha value
    #[inline]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Copy of this color with a different alpha
    #[inline]
    pub const fn with_alpha(&self, alpha: f64) -> Self {
        Self {
            x: self.x,
            y: self.y,
            z: self.z,
            alpha,
        }
    }

    /// Check if approximately equal to another color, alpha included
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
            && (self.alpha - other.alpha).abs() < epsilon
    }

    #[inline]
    pub(crate) const fn from_xyz_array(xyz: [f64; 3], alpha: f64) -> Self {
        Self::from_xyz(xyz[0], xyz[1], xyz[2], alpha)
    }

    #[inline]
    pub(crate) const fn xyz_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xyz_stored_verbatim() {
        let c = Color::from_xyz(0.3, 0.4, 0.5, 0.6);
        assert_eq!(c.to_xyz(), (0.3, 0.4, 0.5, 0.6));
    }

    #[test]
    fn test_out_of_range_not_clamped() {
        let c = Color::from_xyz(-1.5, 42.0, f64::MAX, 3.0);
        assert_eq!(c.to_xyz(), (-1.5, 42.0, f64::MAX, 3.0));
        assert_eq!(c.alpha(), 3.0);
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::from_xyz(0.1, 0.2, 0.3, 1.0);
        let faded = c.with_alpha(0.25);
        assert_eq!(faded.to_xyz(), (0.1, 0.2, 0.3, 0.25));
        // The original is untouched
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn test_default_is_transparent() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
        assert_eq!(Color::TRANSPARENT.to_xyz(), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_white_is_d65() {
        let (x, y, z, a) = Color::WHITE.to_xyz();
        assert!((x - 0.950_455_927_051_671_7).abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
        assert!((z - 1.089_057_750_759_878_4).abs() < 1e-12);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_approx_eq() {
        let a = Color::from_xyz(0.1, 0.2, 0.3, 0.4);
        let b = Color::from_xyz(0.1 + 1e-9, 0.2, 0.3, 0.4);
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&b.with_alpha(0.5), 1e-6));
    }
}
