//! OKLab and OKLCh
//!
//! OKLab goes straight to XYZ without touching the RGB matrices:
//!
//! ```text
//! XYZ --M1--> LMS --cbrt--> LMS' --M2--> Lab
//! ```
//!
//! OKLCh is the same space in polar form, with hue in radians.

use super::Color;
use crate::math::matrix::{LMS_TO_OKLAB, LMS_TO_XYZ, OKLAB_TO_LMS, XYZ_TO_LMS};

impl Color {
    /// Build a color from OKLab components and alpha
    pub fn from_oklab(l: f64, a: f64, b: f64, alpha: f64) -> Self {
        let [l_, m_, s_] = OKLAB_TO_LMS.multiply_vec([l, a, b]);
        let lms = [l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_];
        Self::from_xyz_array(LMS_TO_XYZ.multiply_vec(lms), alpha)
    }

    /// Build a color from OKLCh components (hue in radians) and alpha
    #[inline]
    pub fn from_oklch(l: f64, c: f64, h: f64, alpha: f64) -> Self {
        let (sin, cos) = h.sin_cos();
        Self::from_oklab(l, c * cos, c * sin, alpha)
    }

    /// OKLab components and alpha
    pub fn to_oklab(&self) -> (f64, f64, f64, f64) {
        let [l_, m_, s_] = XYZ_TO_LMS.multiply_vec(self.xyz_array());
        // f64::cbrt is the real cube root: negative LMS (out-of-gamut input)
        // maps to a negative root instead of NaN.
        let [l, a, b] = LMS_TO_OKLAB.multiply_vec([l_.cbrt(), m_.cbrt(), s_.cbrt()]);
        (l, a, b, self.alpha())
    }

    /// OKLCh components (hue in radians, `(-π, π]`) and alpha
    ///
    /// Chroma is never negative. Achromatic colors get whatever hue
    /// `atan2` assigns to their residual a/b, which is 0 for exact zeros.
    #[inline]
    pub fn to_oklch(&self) -> (f64, f64, f64, f64) {
        let (l, a, b, alpha) = self.to_oklab();
        (l, a.hypot(b), b.atan2(a), alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-6;

    #[test]
    fn test_oklab_roundtrip() {
        let (l, a, b, alpha) = Color::from_oklab(0.5, 0.1, -0.2, 0.9).to_oklab();
        assert!((l - 0.5).abs() <= TOL);
        assert!((a - 0.1).abs() <= TOL);
        assert!((b + 0.2).abs() <= TOL);
        assert!((alpha - 0.9).abs() <= TOL);
    }

    #[test]
    fn test_oklch_roundtrip() {
        let h = 2.0;
        let (l, c, h2, alpha) = Color::from_oklch(0.7, 0.15, h, 1.0).to_oklch();
        assert!((l - 0.7).abs() <= TOL);
        assert!((c - 0.15).abs() <= TOL);
        assert!((h2 - h).abs() <= TOL);
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn test_srgb_red_in_oklab() {
        // Reference from CSS Color 4 conversion code
        let (l, a, b, _) = Color::from_srgb(1.0, 0.0, 0.0, 1.0).to_oklab();
        assert!((l - 0.627_955_363_921_431_3).abs() < 1e-9);
        assert!((a - 0.224_863_068_426_274_24).abs() < 1e-9);
        assert!((b - 0.125_846_277_330_584_95).abs() < 1e-9);
    }

    #[test]
    fn test_white_is_achromatic() {
        let (l, a, b, _) = Color::WHITE.to_oklab();
        assert!((l - 1.0).abs() < 1e-9);
        assert!(a.abs() < 1e-9);
        assert!(b.abs() < 1e-9);
    }

    #[test]
    fn test_black_has_zero_hue() {
        let (l, c, h, _) = Color::BLACK.to_oklch();
        assert_eq!(l, 0.0);
        assert_eq!(c, 0.0);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_negative_lms_uses_real_cube_root() {
        // Far outside any gamut; the L cone response is negative here.
        let c = Color::from_xyz(-0.5, 0.1, 0.9, 1.0);
        let (l, a, b, _) = c.to_oklab();
        assert!(l.is_finite() && a.is_finite() && b.is_finite());
        let back = Color::from_oklab(l, a, b, 1.0);
        assert!(back.approx_eq(&c, 1e-9));
    }

    #[test]
    fn test_polar_consistency() {
        let c = Color::from_srgb(0.15, 0.35, 0.55, 0.75);
        let (l, a, b, alpha) = c.to_oklab();
        let (l2, ch, h, alpha2) = c.to_oklch();
        assert_eq!(l, l2);
        assert_eq!(alpha, alpha2);
        assert!((a.hypot(b) - ch).abs() < 1e-12);
        assert!((b.atan2(a) - h).abs() < 1e-12);
        assert!(ch >= 0.0);
        assert!(h > -PI && h <= PI);
    }

    #[test]
    fn test_hue_wraps() {
        // h and h + 2π describe the same color
        let a = Color::from_oklch(0.6, 0.1, 0.5, 1.0);
        let b = Color::from_oklch(0.6, 0.1, 0.5 + 2.0 * PI, 1.0);
        assert!(a.approx_eq(&b, 1e-12));
    }
}
