//! Multiversioned per-pixel buffer loops
//!
//! The loops are compiled once per target feature set. The per-pixel
//! conversion itself is scalar f64.
//!
//! Each loop widens a pixel to `[c0, c1, c2, alpha]` in f64, hands it to the
//! conversion closure, and narrows the result back. Three-channel buffers get
//! an implied alpha of 1.0 and drop the output alpha.
//!
//! Callers validate buffer lengths first; the asserts here only guard
//! against misuse of the kernels themselves.

use multiversion::multiversion;

use crate::math::quantize::{quantize_u16, unquantize_u16};

/// Transform a buffer of f64 pixels
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn transform_f64_batch<F>(src: &[f64], dst: &mut [f64], channels: usize, transform_fn: F)
where
    F: Fn([f64; 4]) -> [f64; 4],
{
    assert!(channels == 3 || channels == 4);
    assert!(src.len() % channels == 0);
    assert!(dst.len() >= src.len());

    for (src_px, dst_px) in src.chunks_exact(channels).zip(dst.chunks_exact_mut(channels)) {
        let alpha = if channels == 4 { src_px[3] } else { 1.0 };
        let out = transform_fn([src_px[0], src_px[1], src_px[2], alpha]);
        dst_px.copy_from_slice(&out[..channels]);
    }
}

/// Transform a buffer of f32 pixels, computing in f64
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn transform_f32_batch<F>(src: &[f32], dst: &mut [f32], channels: usize, transform_fn: F)
where
    F: Fn([f64; 4]) -> [f64; 4],
{
    assert!(channels == 3 || channels == 4);
    assert!(src.len() % channels == 0);
    assert!(dst.len() >= src.len());

    for (src_px, dst_px) in src.chunks_exact(channels).zip(dst.chunks_exact_mut(channels)) {
        let alpha = if channels == 4 { src_px[3] as f64 } else { 1.0 };
        let out = transform_fn([src_px[0] as f64, src_px[1] as f64, src_px[2] as f64, alpha]);
        for (d, v) in dst_px.iter_mut().zip(out) {
            *d = v as f32;
        }
    }
}

/// Transform a buffer of 16-bit pixels
///
/// Channels are read as `v / 65535` and written back through
/// [`quantize_u16`], which clamps.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn transform_u16_batch<F>(src: &[u16], dst: &mut [u16], channels: usize, transform_fn: F)
where
    F: Fn([f64; 4]) -> [f64; 4],
{
    assert!(channels == 3 || channels == 4);
    assert!(src.len() % channels == 0);
    assert!(dst.len() >= src.len());

    for (src_px, dst_px) in src.chunks_exact(channels).zip(dst.chunks_exact_mut(channels)) {
        let alpha = if channels == 4 {
            unquantize_u16(src_px[3])
        } else {
            1.0
        };
        let out = transform_fn([
            unquantize_u16(src_px[0]),
            unquantize_u16(src_px[1]),
            unquantize_u16(src_px[2]),
            alpha,
        ]);
        for (d, v) in dst_px.iter_mut().zip(out) {
            *d = quantize_u16(v);
        }
    }
}
