//! sRGB and linear sRGB
//!
//! Linear sRGB reaches XYZ through a single matrix; nonlinear sRGB adds the
//! IEC 61966-2-1 transfer function in front of it.

use super::Color;
use crate::math::gamma::{degamma3, gamma3};
use crate::math::matrix::{SRGB_TO_XYZ, XYZ_TO_SRGB};

impl Color {
    /// Build a color from nonlinear sRGB channels (nominally `[0, 1]`) and alpha
    #[inline]
    pub fn from_srgb(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        let [r, g, b] = degamma3([r, g, b]);
        Self::from_linear_srgb(r, g, b, alpha)
    }

    /// Build a color from linear sRGB channels and alpha
    #[inline]
    pub fn from_linear_srgb(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self::from_xyz_array(SRGB_TO_XYZ.multiply_vec([r, g, b]), alpha)
    }

    /// Nonlinear sRGB channels and alpha
    ///
    /// Colors outside the sRGB gamut produce channels outside `[0, 1]`.
    #[inline]
    pub fn to_srgb(&self) -> (f64, f64, f64, f64) {
        let (r, g, b, alpha) = self.to_linear_srgb();
        let [r, g, b] = gamma3([r, g, b]);
        (r, g, b, alpha)
    }

    /// Linear sRGB channels and alpha
    #[inline]
    pub fn to_linear_srgb(&self) -> (f64, f64, f64, f64) {
        let [r, g, b] = XYZ_TO_SRGB.multiply_vec(self.xyz_array());
        (r, g, b, self.alpha())
    }
}
