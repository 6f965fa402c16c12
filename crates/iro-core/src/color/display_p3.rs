//! Display P3 and linear Display P3
//!
//! Same shape as sRGB: P3 primaries with a D65 white and the sRGB transfer
//! function, as defined by CSS Color 4.

use super::Color;
use crate::math::gamma::{degamma3, gamma3};
use crate::math::matrix::{DISPLAY_P3_TO_XYZ, XYZ_TO_DISPLAY_P3};

impl Color {
    /// Build a color from nonlinear Display P3 channels and alpha
    #[inline]
    pub fn from_display_p3(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        let [r, g, b] = degamma3([r, g, b]);
        Self::from_linear_display_p3(r, g, b, alpha)
    }

    /// Build a color from linear Display P3 channels and alpha
    #[inline]
    pub fn from_linear_display_p3(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self::from_xyz_array(DISPLAY_P3_TO_XYZ.multiply_vec([r, g, b]), alpha)
    }

    /// Nonlinear Display P3 channels and alpha
    #[inline]
    pub fn to_display_p3(&self) -> (f64, f64, f64, f64) {
        let (r, g, b, alpha) = self.to_linear_display_p3();
        let [r, g, b] = gamma3([r, g, b]);
        (r, g, b, alpha)
    }

    /// Linear Display P3 channels and alpha
    #[inline]
    pub fn to_linear_display_p3(&self) -> (f64, f64, f64, f64) {
        let [r, g, b] = XYZ_TO_DISPLAY_P3.multiply_vec(self.xyz_array());
        (r, g, b, self.alpha())
    }
}
