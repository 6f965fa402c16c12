//! Reference implementation wrappers
//!
//! Provides unified interfaces to palette and moxcms so the parity tests
//! can compare plain arrays and buffers.

use palette::convert::FromColorUnclamped;
use palette::{LinSrgb, Oklab, Oklch, Srgb, Xyz, white_point::D65};

/// Nonlinear sRGB → XYZ D65 using palette
pub fn palette_srgb_to_xyz([r, g, b]: [f64; 3]) -> [f64; 3] {
    let linear: LinSrgb<f64> = Srgb::new(r, g, b).into_linear();
    let xyz = Xyz::<D65, f64>::from_color_unclamped(linear);
    [xyz.x, xyz.y, xyz.z]
}

/// Nonlinear sRGB → linear sRGB using palette
pub fn palette_srgb_to_linear([r, g, b]: [f64; 3]) -> [f64; 3] {
    let linear: LinSrgb<f64> = Srgb::new(r, g, b).into_linear();
    [linear.red, linear.green, linear.blue]
}

/// Nonlinear sRGB → OKLab using palette
pub fn palette_srgb_to_oklab([r, g, b]: [f64; 3]) -> [f64; 3] {
    let linear: LinSrgb<f64> = Srgb::new(r, g, b).into_linear();
    let lab = Oklab::<f64>::from_color_unclamped(linear);
    [lab.l, lab.a, lab.b]
}

/// Nonlinear sRGB → OKLCh using palette, hue in radians
pub fn palette_srgb_to_oklch([r, g, b]: [f64; 3]) -> [f64; 3] {
    let linear: LinSrgb<f64> = Srgb::new(r, g, b).into_linear();
    let lch = Oklch::<f64>::from_color_unclamped(linear);
    [lch.l, lch.chroma, lch.hue.into_raw_degrees().to_radians()]
}

/// OKLab → nonlinear sRGB using palette
pub fn palette_oklab_to_srgb([l, a, b]: [f64; 3]) -> [f64; 3] {
    let linear = LinSrgb::<f64>::from_color_unclamped(Oklab::new(l, a, b));
    let srgb: Srgb<f64> = Srgb::from_linear(linear);
    [srgb.red, srgb.green, srgb.blue]
}

/// 8-bit RGB sRGB → Display P3 using moxcms built-in profiles
pub fn transform_moxcms_srgb_to_p3(src_pixels: &[u8]) -> Result<Vec<u8>, String> {
    transform_moxcms(
        &moxcms::ColorProfile::new_srgb(),
        &moxcms::ColorProfile::new_display_p3(),
        src_pixels,
    )
}

/// 8-bit RGB Display P3 → sRGB using moxcms built-in profiles
pub fn transform_moxcms_p3_to_srgb(src_pixels: &[u8]) -> Result<Vec<u8>, String> {
    transform_moxcms(
        &moxcms::ColorProfile::new_display_p3(),
        &moxcms::ColorProfile::new_srgb(),
        src_pixels,
    )
}

fn transform_moxcms(
    src_profile: &moxcms::ColorProfile,
    dst_profile: &moxcms::ColorProfile,
    src_pixels: &[u8],
) -> Result<Vec<u8>, String> {
    use moxcms::{Layout, TransformOptions};

    let transform = src_profile
        .create_transform_8bit(
            Layout::Rgb,
            dst_profile,
            Layout::Rgb,
            TransformOptions::default(),
        )
        .map_err(|e| format!("moxcms transform: {:?}", e))?;

    let mut dst_pixels = vec![0u8; src_pixels.len()];
    transform
        .transform(src_pixels, &mut dst_pixels)
        .map_err(|e| format!("moxcms execute: {:?}", e))?;

    Ok(dst_pixels)
}

/// 8-bit RGB conversion with iro, rounding to nearest
pub fn transform_iro_8bit(
    src_space: iro_core::ColorSpace,
    dst_space: iro_core::ColorSpace,
    src_pixels: &[u8],
) -> Vec<u8> {
    use iro_core::math::{quantize_u8, unquantize_u8};

    let mut dst_pixels = vec![0u8; src_pixels.len()];
    for (src, dst) in src_pixels
        .chunks_exact(3)
        .zip(dst_pixels.chunks_exact_mut(3))
    {
        let c = [
            unquantize_u8(src[0]),
            unquantize_u8(src[1]),
            unquantize_u8(src[2]),
        ];
        let (out, _) = iro_core::Color::convert(src_space, dst_space, c, 1.0);
        for (d, v) in dst.iter_mut().zip(out) {
            *d = quantize_u8(v);
        }
    }
    dst_pixels
}
