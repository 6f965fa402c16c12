//! Buffer transforms between color spaces
//!
//! A [`Transform`] fixes a source space, a destination space and a pixel
//! layout, then converts whole interleaved buffers by running every pixel
//! through [`Color::from_space`] and [`Color::to_space`].

use crate::pixel::Nrgba16;
use crate::simd::{transform_f32_batch, transform_f64_batch, transform_u16_batch};
use crate::types::ColorSpace;
use crate::{Color, Error, Result};

/// Pixel layout for transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// 3 channels, alpha implied opaque
    Rgb,
    /// 4 channels, alpha last
    #[default]
    Rgba,
}

impl Layout {
    /// Get number of channels for this layout
    pub fn channels(&self) -> usize {
        match self {
            Layout::Rgb => 3,
            Layout::Rgba => 4,
        }
    }

    /// Check if layout has alpha channel
    pub fn has_alpha(&self) -> bool {
        matches!(self, Layout::Rgba)
    }
}

/// How color channels relate to alpha in RGBA buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaMode {
    /// Channels are independent of alpha
    #[default]
    Straight,
    /// Channels are multiplied by alpha
    ///
    /// Input is unpremultiplied before conversion and the output is
    /// premultiplied again. A pixel with zero alpha converts to all zeros.
    /// For OKLCh only lightness and chroma carry alpha; hue does not.
    Premultiplied,
}

/// Options for transform creation
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformOptions {
    /// Alpha interpretation for [`Layout::Rgba`] buffers
    pub alpha: AlphaMode,
}

/// A conversion between two color spaces over pixel buffers
///
/// Every pair of spaces is supported for float buffers. Integer buffers
/// need both spaces to be bounded RGB spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    src_space: ColorSpace,
    dst_space: ColorSpace,
    layout: Layout,
    premultiplied: bool,
}

impl Transform {
    /// Create a new transform
    pub fn new(
        src_space: ColorSpace,
        dst_space: ColorSpace,
        layout: Layout,
        options: TransformOptions,
    ) -> Self {
        Self {
            src_space,
            dst_space,
            layout,
            premultiplied: layout.has_alpha() && options.alpha == AlphaMode::Premultiplied,
        }
    }

    /// Get source color space
    pub fn src_space(&self) -> ColorSpace {
        self.src_space
    }

    /// Get destination color space
    pub fn dst_space(&self) -> ColorSpace {
        self.dst_space
    }

    /// Get buffer layout
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Convert a single `[c0, c1, c2, alpha]` pixel
    pub fn apply(&self, [c0, c1, c2, alpha]: [f64; 4]) -> [f64; 4] {
        let mut channels = [c0, c1, c2];
        if self.premultiplied {
            if alpha == 0.0 {
                return [0.0; 4];
            }
            for c in &mut channels[..premultiplied_channels(self.src_space)] {
                *c /= alpha;
            }
        }

        let (mut out, alpha) = Color::convert(self.src_space, self.dst_space, channels, alpha);

        if self.premultiplied {
            for c in &mut out[..premultiplied_channels(self.dst_space)] {
                *c *= alpha;
            }
        }
        [out[0], out[1], out[2], alpha]
    }

    /// Transform 64-bit floating point pixel data
    pub fn transform_f64(&self, src: &[f64], dst: &mut [f64]) -> Result<()> {
        check_buffers(src.len(), dst.len(), self.layout.channels())?;
        transform_f64_batch(src, dst, self.layout.channels(), |px| self.apply(px));
        Ok(())
    }

    /// Transform 32-bit floating point pixel data
    ///
    /// Arithmetic runs in f64; only storage is f32.
    pub fn transform_f32(&self, src: &[f32], dst: &mut [f32]) -> Result<()> {
        check_buffers(src.len(), dst.len(), self.layout.channels())?;
        transform_f32_batch(src, dst, self.layout.channels(), |px| self.apply(px));
        Ok(())
    }

    /// Transform 16-bit pixel data
    ///
    /// Output channels are rounded and clamped to `0..=65535`.
    pub fn transform_u16(&self, src: &[u16], dst: &mut [u16]) -> Result<()> {
        self.check_integer_spaces()?;
        check_buffers(src.len(), dst.len(), self.layout.channels())?;
        transform_u16_batch(src, dst, self.layout.channels(), |px| self.apply(px));
        Ok(())
    }

    /// Transform straight-alpha 16-bit pixels
    ///
    /// The pixels always carry alpha, so the transform's layout is not
    /// consulted. Alpha is treated as straight regardless of the options.
    pub fn transform_pixels(&self, src: &[Nrgba16], dst: &mut [Nrgba16]) -> Result<()> {
        self.check_integer_spaces()?;
        if dst.len() < src.len() {
            return Err(Error::BufferSize {
                expected: src.len(),
                actual: dst.len(),
            });
        }
        let straight = Self {
            layout: Layout::Rgba,
            premultiplied: false,
            ..*self
        };
        let src: &[u16] = bytemuck::cast_slice(src);
        let dst: &mut [u16] = bytemuck::cast_slice_mut(dst);
        transform_u16_batch(src, dst, 4, |px| straight.apply(px));
        Ok(())
    }

    fn check_integer_spaces(&self) -> Result<()> {
        for space in [self.src_space, self.dst_space] {
            if !space.is_bounded() {
                return Err(Error::UnsupportedColorSpace(format!(
                    "{space} has no fixed-width integer encoding"
                )));
            }
        }
        Ok(())
    }
}

/// Number of leading channels scaled by alpha in premultiplied buffers
///
/// OKLCh hue is an angle and stays unscaled.
fn premultiplied_channels(space: ColorSpace) -> usize {
    match space {
        ColorSpace::Oklch => 2,
        _ => 3,
    }
}

/// Validate interleaved buffer lengths for a layout
fn check_buffers(src_len: usize, dst_len: usize, channels: usize) -> Result<()> {
    if src_len % channels != 0 {
        return Err(Error::BufferSize {
            expected: src_len.next_multiple_of(channels),
            actual: src_len,
        });
    }
    if dst_len < src_len {
        return Err(Error::BufferSize {
            expected: src_len,
            actual: dst_len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_channels() {
        assert_eq!(Layout::Rgb.channels(), 3);
        assert_eq!(Layout::Rgba.channels(), 4);
        assert!(!Layout::Rgb.has_alpha());
        assert!(Layout::Rgba.has_alpha());
    }

    #[test]
    fn test_transform_identity() {
        let transform = Transform::new(
            ColorSpace::Srgb,
            ColorSpace::Srgb,
            Layout::Rgb,
            TransformOptions::default(),
        );

        let src = [1.0, 0.5, 0.25];
        let mut dst = [0.0; 3];
        transform.transform_f64(&src, &mut dst).unwrap();

        for (s, d) in src.iter().zip(dst) {
            assert!((s - d).abs() < 1e-12);
        }
    }

    #[test]
    fn test_transform_srgb_to_p3() {
        let transform = Transform::new(
            ColorSpace::Srgb,
            ColorSpace::DisplayP3,
            Layout::Rgb,
            TransformOptions::default(),
        );

        let src = [65535u16, 0, 0];
        let mut dst = [0u16; 3];
        transform.transform_u16(&src, &mut dst).unwrap();

        // sRGB red is less saturated in P3
        assert!(dst[0] < 65535);
        assert!(dst[1] > 0);
        assert!(dst[2] > 0);
    }

    #[test]
    fn test_buffer_size_errors() {
        let transform = Transform::new(
            ColorSpace::Srgb,
            ColorSpace::Oklab,
            Layout::Rgba,
            TransformOptions::default(),
        );

        let mut dst = [0.0; 8];
        assert_eq!(
            transform.transform_f64(&[0.0; 6], &mut dst),
            Err(Error::BufferSize {
                expected: 8,
                actual: 6
            })
        );
        assert_eq!(
            transform.transform_f64(&[0.0; 8], &mut dst[..4]),
            Err(Error::BufferSize {
                expected: 8,
                actual: 4
            })
        );
    }

    #[test]
    fn test_integer_needs_bounded_spaces() {
        let transform = Transform::new(
            ColorSpace::Srgb,
            ColorSpace::Oklch,
            Layout::Rgb,
            TransformOptions::default(),
        );
        let result = transform.transform_u16(&[0; 3], &mut [0; 3]);
        assert!(matches!(result, Err(Error::UnsupportedColorSpace(_))));

        let result = transform.transform_pixels(&[Nrgba16::default()], &mut [Nrgba16::default()]);
        assert!(matches!(result, Err(Error::UnsupportedColorSpace(_))));
    }

    #[test]
    fn test_premultiplied_alpha_zero() {
        let transform = Transform::new(
            ColorSpace::Srgb,
            ColorSpace::DisplayP3,
            Layout::Rgba,
            TransformOptions {
                alpha: AlphaMode::Premultiplied,
            },
        );
        assert_eq!(transform.apply([0.3, 0.2, 0.1, 0.0]), [0.0; 4]);
    }

    #[test]
    fn test_premultiplied_roundtrip() {
        let options = TransformOptions {
            alpha: AlphaMode::Premultiplied,
        };
        let forward = Transform::new(ColorSpace::Srgb, ColorSpace::Oklab, Layout::Rgba, options);
        let back = Transform::new(ColorSpace::Oklab, ColorSpace::Srgb, Layout::Rgba, options);

        let src = [0.4, 0.2, 0.1, 0.5];
        let mut lab = [0.0; 4];
        let mut out = [0.0; 4];
        forward.transform_f64(&src, &mut lab).unwrap();
        back.transform_f64(&lab, &mut out).unwrap();

        for (s, o) in src.iter().zip(out) {
            assert!((s - o).abs() < 1e-9);
        }
    }

    #[test]
    fn test_premultiplied_oklch_keeps_hue() {
        let options = TransformOptions {
            alpha: AlphaMode::Premultiplied,
        };
        let premultiplied =
            Transform::new(ColorSpace::Srgb, ColorSpace::Oklch, Layout::Rgba, options);
        let straight = Transform::new(
            ColorSpace::Srgb,
            ColorSpace::Oklch,
            Layout::Rgba,
            TransformOptions::default(),
        );

        let [l, c, h, a] = premultiplied.apply([0.0, 0.0, 0.5, 0.5]);
        let [sl, sc, sh, sa] = straight.apply([0.0, 0.0, 1.0, 0.5]);
        assert!((l - sl * 0.5).abs() < 1e-12);
        assert!((c - sc * 0.5).abs() < 1e-12);
        assert!((h - sh).abs() < 1e-12, "hue {h} vs {sh}");
        assert_eq!(a, sa);

        let back = Transform::new(ColorSpace::Oklch, ColorSpace::Srgb, Layout::Rgba, options);
        let out = back.apply([l, c, h, a]);
        for (o, e) in out.iter().zip([0.0, 0.0, 0.5, 0.5]) {
            assert!((o - e).abs() < 1e-9, "{out:?}");
        }
    }

    #[test]
    fn test_premultiplied_ignored_without_alpha() {
        let transform = Transform::new(
            ColorSpace::LinearSrgb,
            ColorSpace::LinearSrgb,
            Layout::Rgb,
            TransformOptions {
                alpha: AlphaMode::Premultiplied,
            },
        );
        let out = transform.apply([0.5, 0.5, 0.5, 1.0]);
        assert!((out[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_transform_pixels() {
        let transform = Transform::new(
            ColorSpace::Srgb,
            ColorSpace::LinearSrgb,
            Layout::Rgb,
            TransformOptions::default(),
        );
        let src = [Nrgba16::new(65535, 0, 0, 32768), Nrgba16::new(0, 0, 0, 0)];
        let mut dst = [Nrgba16::default(); 2];
        transform.transform_pixels(&src, &mut dst).unwrap();
        assert_eq!(dst[0], Nrgba16::new(65535, 0, 0, 32768));
        assert_eq!(dst[1], Nrgba16::new(0, 0, 0, 0));
    }
}
