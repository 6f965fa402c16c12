//! 3x3 matrix operations and the fixed conversion matrices
//!
//! The RGB matrices are the exact rational forms from CSS Color 4
//! (<https://www.w3.org/TR/css-color-4/#color-conversion-code>), written as
//! `n / d` so the compiler evaluates each quotient once in f64. The OKLab
//! matrices are Björn Ottosson's coefficients relative to XYZ D65.

use std::ops::Mul;

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Multiply this matrix by a 3-element vector
    ///
    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut m = [[0.0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        Self { m }
    }

    /// Check if approximately equal to another matrix
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul<[f64; 3]> for Matrix3x3 {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> Self::Output {
        self.multiply_vec(rhs)
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

/// Linear sRGB → XYZ D65
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [506752.0 / 1228815.0, 87881.0 / 245763.0, 12673.0 / 70218.0],
    [87098.0 / 409605.0, 175762.0 / 245763.0, 12673.0 / 175545.0],
    [7918.0 / 409605.0, 87881.0 / 737289.0, 1001167.0 / 1053270.0],
]);

/// XYZ D65 → linear sRGB
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [12831.0 / 3959.0, -329.0 / 214.0, -1974.0 / 3959.0],
    [-851781.0 / 878810.0, 1648619.0 / 878810.0, 36519.0 / 878810.0],
    [705.0 / 12673.0, -2585.0 / 12673.0, 705.0 / 667.0],
]);

/// Linear Display P3 → XYZ D65
pub const DISPLAY_P3_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [608311.0 / 1250200.0, 189793.0 / 714400.0, 198249.0 / 1000160.0],
    [35783.0 / 156275.0, 247089.0 / 357200.0, 198249.0 / 2500400.0],
    [0.0, 32229.0 / 714400.0, 5220557.0 / 5000800.0],
]);

/// XYZ D65 → linear Display P3
pub const XYZ_TO_DISPLAY_P3: Matrix3x3 = Matrix3x3::new([
    [446124.0 / 178915.0, -333277.0 / 357830.0, -72051.0 / 178915.0],
    [-14852.0 / 17905.0, 63121.0 / 35810.0, 423.0 / 17905.0],
    [11844.0 / 330415.0, -50337.0 / 660830.0, 316169.0 / 330415.0],
]);

/// XYZ D65 → LMS cone response (before the cube root)
#[allow(clippy::excessive_precision)]
pub const XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.8190224379967030, 0.3619062600528904, -0.1288737815209879],
    [0.0329836539323885, 0.9292868615863434, 0.0361446663506424],
    [0.0481771893596242, 0.2642395317527308, 0.6335478284694309],
]);

/// Cube-rooted LMS → OKLab
#[allow(clippy::excessive_precision)]
pub const LMS_TO_OKLAB: Matrix3x3 = Matrix3x3::new([
    [0.2104542683093140, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.4505937096174110],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
]);

/// OKLab → cube-rooted LMS
#[allow(clippy::excessive_precision)]
pub const OKLAB_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [1.0, 0.3963377773761749, 0.2158037573099136],
    [1.0, -0.1055613458156586, -0.0638541728258133],
    [1.0, -0.0894841775298119, -1.2914855480194092],
]);

/// LMS cone response → XYZ D65
#[allow(clippy::excessive_precision)]
pub const LMS_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [1.2268798758459243, -0.5578149944602171, 0.2813910456659647],
    [-0.0405757452148008, 1.1122868032803170, -0.0717110580655164],
    [-0.0763729366746601, -0.4214933324022432, 1.5869240198367816],
]);

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_identity() {
        let v = [0.25, 0.5, 0.75];
        assert_eq!(Matrix3x3::identity() * v, v);
        assert_eq!(Matrix3x3::default(), Matrix3x3::identity());
    }

    #[test]
    fn test_srgb_pair_is_inverse() {
        let product = SRGB_TO_XYZ * XYZ_TO_SRGB;
        assert!(product.approx_eq(&Matrix3x3::identity(), 1e-14));
    }

    #[test]
    fn test_display_p3_pair_is_inverse() {
        let product = DISPLAY_P3_TO_XYZ * XYZ_TO_DISPLAY_P3;
        assert!(product.approx_eq(&Matrix3x3::identity(), 1e-14));
    }

    #[test]
    fn test_oklab_pairs_are_inverse() {
        // Published to 16 digits, so the products are only close to identity.
        assert!((LMS_TO_OKLAB * OKLAB_TO_LMS).approx_eq(&Matrix3x3::identity(), 1e-9));
        assert!((XYZ_TO_LMS * LMS_TO_XYZ).approx_eq(&Matrix3x3::identity(), 1e-9));
    }

    #[test]
    fn test_srgb_white_maps_to_d65() {
        let white = SRGB_TO_XYZ * [1.0, 1.0, 1.0];
        assert!((white[0] - 0.950_455_927_051_671_7).abs() < EPSILON);
        assert!((white[1] - 1.0).abs() < EPSILON);
        assert!((white[2] - 1.089_057_750_759_878_4).abs() < EPSILON);
    }

    #[test]
    fn test_rgb_spaces_share_white() {
        let srgb_white = SRGB_TO_XYZ * [1.0, 1.0, 1.0];
        let p3_white = DISPLAY_P3_TO_XYZ * [1.0, 1.0, 1.0];
        for i in 0..3 {
            assert!((srgb_white[i] - p3_white[i]).abs() < EPSILON);
        }
    }
}
