//! Transfer functions shared by sRGB and Display P3
//!
//! Both spaces use the IEC 61966-2-1 curve. Both functions accept negative
//! inputs: the power is taken of `|x|` and the sign reapplied, so an
//! out-of-gamut channel never hits `powf` on a negative base.

const DECODE_THRESHOLD: f64 = 0.04045;
const ENCODE_THRESHOLD: f64 = 0.0031308;
const LINEAR_SCALE: f64 = 12.92;
const POWER_OFFSET: f64 = 0.055;
const POWER_SCALE: f64 = 1.055;
const POWER_EXP: f64 = 2.4;

/// Gamma decode (encoded → linear)
///
/// `x / 12.92` for `|x| <= 0.04045`, otherwise
/// `sign(x) * ((|x| + 0.055) / 1.055)^2.4`.
#[inline]
pub fn degamma(x: f64) -> f64 {
    let abs = x.abs();
    if abs <= DECODE_THRESHOLD {
        return x / LINEAR_SCALE;
    }
    ((abs + POWER_OFFSET) / POWER_SCALE)
        .powf(POWER_EXP)
        .copysign(x)
}

/// Gamma encode (linear → encoded)
///
/// `12.92 * x` for `|x| <= 0.0031308`, otherwise
/// `sign(x) * 1.055 * |x|^(1/2.4) - 0.055`.
///
/// The offset is subtracted after the sign is applied, so for negative `x`
/// past the linear segment this is not the inverse of [`degamma`].
#[inline]
pub fn gamma(x: f64) -> f64 {
    let abs = x.abs();
    if abs <= ENCODE_THRESHOLD {
        return LINEAR_SCALE * x;
    }
    POWER_SCALE * abs.powf(1.0 / POWER_EXP).copysign(x) - POWER_OFFSET
}

/// Apply [`degamma`] to each channel
#[inline]
pub fn degamma3(c: [f64; 3]) -> [f64; 3] {
    [degamma(c[0]), degamma(c[1]), degamma(c[2])]
}

/// Apply [`gamma`] to each channel
#[inline]
pub fn gamma3(c: [f64; 3]) -> [f64; 3] {
    [gamma(c[0]), gamma(c[1]), gamma(c[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_endpoints() {
        assert_eq!(degamma(0.0), 0.0);
        assert_eq!(gamma(0.0), 0.0);
        assert!((degamma(1.0) - 1.0).abs() < EPSILON);
        assert!((gamma(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_linear_segment() {
        assert!((degamma(0.04045) - 0.04045 / 12.92).abs() < EPSILON);
        assert!((gamma(0.003) - 0.003 * 12.92).abs() < EPSILON);
        assert!((degamma(-0.02) + 0.02 / 12.92).abs() < EPSILON);
    }

    #[test]
    fn test_known_values() {
        // ((0.5 + 0.055) / 1.055)^2.4
        assert!((degamma(0.5) - 0.214_041_140_482_232_55).abs() < EPSILON);
        // 1.055 * 0.5^(1/2.4) - 0.055
        assert!((gamma(0.5) - 0.735_356_983_052_449_3).abs() < 1e-9);
    }

    #[test]
    fn test_negative_inputs_mirror_decode() {
        for x in [0.05, 0.2, 0.5, 0.9, 1.3] {
            assert_eq!(degamma(-x), -degamma(x));
            assert!(degamma(-x).is_finite());
        }
    }

    #[test]
    fn test_negative_encode_offset_after_sign() {
        // -1.055 * 0.5^(1/2.4) - 0.055
        assert!((gamma(-0.5) + 0.845_356_983_052_449_6).abs() < 1e-12);
        for x in [0.2, 0.5, 1.0, 4.0] {
            assert!((gamma(-x) + gamma(x) + 2.0 * POWER_OFFSET).abs() < 1e-12);
            assert!(gamma(-x).is_finite());
        }
    }

    #[test]
    fn test_negative_linear_segment_mirrors() {
        for x in [0.0001, 0.001, 0.003] {
            assert_eq!(gamma(-x), -gamma(x));
        }
    }

    #[test]
    fn test_roundtrip() {
        for i in 0..=1000 {
            let x = i as f64 / 1000.0;
            assert!((gamma(degamma(x)) - x).abs() < 1e-12, "mismatch at {x}");
        }
    }

    #[test]
    fn test_out_of_range_passes_through() {
        let x = 1.25;
        assert!(degamma(x) > 1.0);
        assert!((gamma(degamma(x)) - x).abs() < 1e-12);
    }
}
