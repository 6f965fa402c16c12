//! Fixed-width integer channel quantization
//!
//! This is the only place where values are clamped. Everything upstream
//! passes out-of-range channels through unchanged.

/// Map a `[0, 1]` channel to `0..=65535`, rounding half away from zero.
///
/// Out-of-range inputs clamp to the nearest end; NaN maps to 0.
#[inline]
pub fn quantize_u16(v: f64) -> u16 {
    // `as` saturates and sends NaN to 0.
    (v * 65535.0).round().clamp(0.0, 65535.0) as u16
}

/// Map a `[0, 1]` channel to `0..=255`, rounding half away from zero.
#[inline]
pub fn quantize_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Inverse of [`quantize_u16`] for in-range values
#[inline]
pub fn unquantize_u16(v: u16) -> f64 {
    v as f64 / 65535.0
}

/// Inverse of [`quantize_u8`] for in-range values
#[inline]
pub fn unquantize_u8(v: u8) -> f64 {
    v as f64 / 255.0
}
