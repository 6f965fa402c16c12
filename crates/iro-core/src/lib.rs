//! # iro - color conversion through XYZ D65
//!
//! Converts colors between nonlinear and linear sRGB, nonlinear and linear
//! Display P3, OKLab and OKLCh. Every [`Color`] is stored as CIE XYZ D65 plus
//! alpha, so a color can move between spaces without picking up the
//! rounding or clipping of an intermediate encoding.
//!
//! ## Quick Start
//!
//! ```
//! use iro_core::Color;
//!
//! // sRGB in, OKLCh out
//! let orange = Color::from_srgb(1.0, 0.5, 0.0, 1.0);
//! let (l, c, h, alpha) = orange.to_oklch();
//! assert!(c > 0.0);
//!
//! // Rotate the hue and read it back as Display P3
//! let rotated = Color::from_oklch(l, c, h + 1.0, alpha);
//! let (r, g, b, _) = rotated.to_display_p3();
//! # let _ = (r, g, b);
//! ```
//!
//! ## Guarantees
//!
//! - Conversions never fail and never clamp. Out-of-gamut channels (negative
//!   or above 1) pass through, and the transfer functions and OKLab cube root
//!   are defined for negative values.
//! - Clamping happens only when quantizing to integer pixels
//!   ([`Color::to_srgb_pixel`], [`Transform::transform_u16`]).
//! - sRGB → XYZ → sRGB round-trips to within floating-point error for
//!   channels at or above zero, because the RGB matrices are exact rational
//!   inverses of each other. The encoding of a negative channel applies the
//!   0.055 offset after the sign, so it does not invert exactly; linear
//!   spaces carry such channels losslessly.
//!
//! ## Buffers
//!
//! ```
//! use iro_core::{ColorSpace, Layout, Transform, TransformOptions};
//!
//! let transform = Transform::new(
//!     ColorSpace::Srgb,
//!     ColorSpace::DisplayP3,
//!     Layout::Rgb,
//!     TransformOptions::default(),
//! );
//!
//! let src = [65535u16, 32768, 0];
//! let mut dst = [0u16; 3];
//! transform.transform_u16(&src, &mut dst).unwrap();
//! ```

pub mod color;
pub mod error;
pub mod math;
pub mod pixel;
pub mod simd;
pub mod transform;
pub mod types;

pub use color::Color;
pub use error::{Error, Result};
pub use pixel::{
    Alpha8, Alpha16, Gray8, Gray16, Nrgba8, Nrgba16, PixelColor, PremultipliedRgba, Rgba8, Rgba16,
};
pub use transform::{AlphaMode, Layout, Transform, TransformOptions};
pub use types::ColorSpace;

/// Version of iro
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
