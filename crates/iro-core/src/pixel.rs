//! Fixed-width integer pixels
//!
//! These mirror the integer color encodings found in image and windowing
//! libraries: premultiplied RGBA, straight-alpha RGBA, alpha-only masks and
//! grayscale, each at 8 and 16 bits. [`PixelColor`] is the closed set the
//! conversions dispatch on; [`PremultipliedRgba`] is the open fallback for
//! any other type that can report 16-bit premultiplied channels.
//!
//! All pixel structs are `#[repr(C)]` and [`bytemuck::Pod`], so raw channel
//! buffers can be viewed as pixel slices without copying.

use bytemuck::{Pod, Zeroable};

use crate::Color;
use crate::math::quantize::{quantize_u8, quantize_u16, unquantize_u8, unquantize_u16};

/// 8-bit RGBA with premultiplied alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// 16-bit RGBA with premultiplied alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

/// 8-bit RGBA with straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Nrgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// 16-bit RGBA with straight (non-premultiplied) alpha
///
/// The output format of the quantizing accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Nrgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

/// 8-bit alpha mask (color is implicitly white)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Alpha8 {
    pub a: u8,
}

/// 16-bit alpha mask (color is implicitly white)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Alpha16 {
    pub a: u16,
}

/// 8-bit opaque grayscale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Gray8 {
    pub y: u8,
}

/// 16-bit opaque grayscale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Gray16 {
    pub y: u16,
}

impl Nrgba16 {
    /// Create a new pixel
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Quantize four `[0, 1]` channels, clamping anything outside
    #[inline]
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: quantize_u16(r),
            g: quantize_u16(g),
            b: quantize_u16(b),
            a: quantize_u16(a),
        }
    }

    /// Channels as `[0, 1]` floats
    #[inline]
    pub fn to_unit(&self) -> [f64; 4] {
        [
            unquantize_u16(self.r),
            unquantize_u16(self.g),
            unquantize_u16(self.b),
            unquantize_u16(self.a),
        ]
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Narrow to 8 bits, rounding to nearest
    #[inline]
    pub fn to_nrgba8(&self) -> Nrgba8 {
        let [r, g, b, a] = self.to_unit();
        Nrgba8 {
            r: quantize_u8(r),
            g: quantize_u8(g),
            b: quantize_u8(b),
            a: quantize_u8(a),
        }
    }
}

impl Nrgba8 {
    /// Create a new pixel
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Nrgba8> for Nrgba16 {
    /// Widen to 16 bits exactly (`v * 257`)
    fn from(p: Nrgba8) -> Self {
        Self {
            r: widen(p.r),
            g: widen(p.g),
            b: widen(p.b),
            a: widen(p.a),
        }
    }
}

#[inline]
const fn widen(v: u8) -> u16 {
    v as u16 * 0x101
}

#[inline]
fn premultiply(v: u16, a: u16) -> u16 {
    (v as u32 * a as u32 / 0xffff) as u16
}

/// Source of 16-bit premultiplied RGBA
///
/// The generic way into [`Color`] for pixel types that are not one of the
/// [`PixelColor`] variants.
pub trait PremultipliedRgba {
    /// Red, green, blue, alpha in `0..=0xffff`, color channels premultiplied
    fn premultiplied_rgba(&self) -> [u16; 4];
}

impl PremultipliedRgba for Rgba8 {
    fn premultiplied_rgba(&self) -> [u16; 4] {
        [widen(self.r), widen(self.g), widen(self.b), widen(self.a)]
    }
}

impl PremultipliedRgba for Rgba16 {
    fn premultiplied_rgba(&self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl PremultipliedRgba for Nrgba8 {
    fn premultiplied_rgba(&self) -> [u16; 4] {
        Nrgba16::from(*self).premultiplied_rgba()
    }
}

impl PremultipliedRgba for Nrgba16 {
    fn premultiplied_rgba(&self) -> [u16; 4] {
        [
            premultiply(self.r, self.a),
            premultiply(self.g, self.a),
            premultiply(self.b, self.a),
            self.a,
        ]
    }
}

impl PremultipliedRgba for Alpha8 {
    fn premultiplied_rgba(&self) -> [u16; 4] {
        let a = widen(self.a);
        [a, a, a, a]
    }
}

impl PremultipliedRgba for Alpha16 {
    fn premultiplied_rgba(&self) -> [u16; 4] {
        [self.a, self.a, self.a, self.a]
    }
}

impl PremultipliedRgba for Gray8 {
    fn premultiplied_rgba(&self) -> [u16; 4] {
        let y = widen(self.y);
        [y, y, y, 0xffff]
    }
}

impl PremultipliedRgba for Gray16 {
    fn premultiplied_rgba(&self) -> [u16; 4] {
        [self.y, self.y, self.y, 0xffff]
    }
}

/// One of the known integer pixel encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelColor {
    Rgba8(Rgba8),
    Rgba16(Rgba16),
    Nrgba8(Nrgba8),
    Nrgba16(Nrgba16),
    Alpha8(Alpha8),
    Alpha16(Alpha16),
    Gray8(Gray8),
    Gray16(Gray16),
}

macro_rules! impl_from_pixel {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for PixelColor {
                fn from(p: $ty) -> Self {
                    Self::$ty(p)
                }
            }
        )*
    };
}

impl_from_pixel!(Rgba8, Rgba16, Nrgba8, Nrgba16, Alpha8, Alpha16, Gray8, Gray16);

impl PixelColor {
    /// Straight-alpha channels in `[0, 1]`
    ///
    /// Returns `None` for a premultiplied pixel with zero alpha, whose color
    /// cannot be recovered.
    fn unit_channels(&self) -> Option<([f64; 3], f64)> {
        match *self {
            Self::Nrgba8(p) => Some((
                [unquantize_u8(p.r), unquantize_u8(p.g), unquantize_u8(p.b)],
                unquantize_u8(p.a),
            )),
            Self::Nrgba16(p) => Some((
                [unquantize_u16(p.r), unquantize_u16(p.g), unquantize_u16(p.b)],
                unquantize_u16(p.a),
            )),
            Self::Alpha8(p) => Some(([1.0; 3], unquantize_u8(p.a))),
            Self::Alpha16(p) => Some(([1.0; 3], unquantize_u16(p.a))),
            Self::Gray8(p) => Some(([unquantize_u8(p.y); 3], 1.0)),
            Self::Gray16(p) => Some(([unquantize_u16(p.y); 3], 1.0)),
            Self::Rgba8(p) => unpremultiply(
                [p.r as f64, p.g as f64, p.b as f64, p.a as f64],
                u8::MAX as f64,
            ),
            Self::Rgba16(p) => unpremultiply(
                [p.r as f64, p.g as f64, p.b as f64, p.a as f64],
                u16::MAX as f64,
            ),
        }
    }
}

impl PremultipliedRgba for PixelColor {
    fn premultiplied_rgba(&self) -> [u16; 4] {
        match self {
            Self::Rgba8(p) => p.premultiplied_rgba(),
            Self::Rgba16(p) => p.premultiplied_rgba(),
            Self::Nrgba8(p) => p.premultiplied_rgba(),
            Self::Nrgba16(p) => p.premultiplied_rgba(),
            Self::Alpha8(p) => p.premultiplied_rgba(),
            Self::Alpha16(p) => p.premultiplied_rgba(),
            Self::Gray8(p) => p.premultiplied_rgba(),
            Self::Gray16(p) => p.premultiplied_rgba(),
        }
    }
}

/// Divide color channels by alpha; `None` when alpha is zero
#[inline]
fn unpremultiply([r, g, b, a]: [f64; 4], max: f64) -> Option<([f64; 3], f64)> {
    if a == 0.0 {
        return None;
    }
    Some(([r / a, g / a, b / a], a / max))
}

#[inline]
fn unpremultiply_rgba(src: &impl PremultipliedRgba) -> Option<([f64; 3], f64)> {
    let [r, g, b, a] = src.premultiplied_rgba();
    unpremultiply([r as f64, g as f64, b as f64, a as f64], u16::MAX as f64)
}

impl Color {
    /// Build a color from an integer pixel holding nonlinear sRGB
    ///
    /// Premultiplied pixels are unpremultiplied before the transfer function
    /// is undone; one with zero alpha becomes [`Color::TRANSPARENT`].
    pub fn from_srgb_pixel(pixel: impl Into<PixelColor>) -> Self {
        match pixel.into().unit_channels() {
            Some(([r, g, b], a)) => Self::from_srgb(r, g, b, a),
            None => Self::TRANSPARENT,
        }
    }

    /// Build a color from an integer pixel holding linear sRGB
    pub fn from_linear_srgb_pixel(pixel: impl Into<PixelColor>) -> Self {
        match pixel.into().unit_channels() {
            Some(([r, g, b], a)) => Self::from_linear_srgb(r, g, b, a),
            None => Self::TRANSPARENT,
        }
    }

    /// Build a color from any premultiplied nonlinear sRGB source
    ///
    /// Undoing the transfer function after dividing by alpha is only an
    /// approximation for sources that premultiplied the encoded values, but
    /// 16-bit premultiplied channels carry nothing better.
    pub fn from_srgb_premultiplied(src: &impl PremultipliedRgba) -> Self {
        match unpremultiply_rgba(src) {
            Some(([r, g, b], a)) => Self::from_srgb(r, g, b, a),
            None => Self::TRANSPARENT,
        }
    }

    /// Build a color from any premultiplied linear sRGB source
    pub fn from_linear_srgb_premultiplied(src: &impl PremultipliedRgba) -> Self {
        match unpremultiply_rgba(src) {
            Some(([r, g, b], a)) => Self::from_linear_srgb(r, g, b, a),
            None => Self::TRANSPARENT,
        }
    }

    /// Quantize to a 16-bit straight-alpha nonlinear sRGB pixel
    pub fn to_srgb_pixel(&self) -> Nrgba16 {
        let (r, g, b, a) = self.to_srgb();
        Nrgba16::from_unit(r, g, b, a)
    }

    /// Quantize to a 16-bit straight-alpha linear sRGB pixel
    pub fn to_linear_srgb_pixel(&self) -> Nrgba16 {
        let (r, g, b, a) = self.to_linear_srgb();
        Nrgba16::from_unit(r, g, b, a)
    }

    /// Quantize to a 16-bit straight-alpha nonlinear Display P3 pixel
    pub fn to_display_p3_pixel(&self) -> Nrgba16 {
        let (r, g, b, a) = self.to_display_p3();
        Nrgba16::from_unit(r, g, b, a)
    }
}
