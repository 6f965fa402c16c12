//! Numeric building blocks for the conversions
//!
//! - 3x3 matrices and the fixed RGB/OKLab coefficient sets
//! - sRGB / Display P3 transfer functions
//! - Integer channel quantization

pub mod gamma;
pub mod matrix;
pub mod quantize;

pub use gamma::{degamma, gamma};
pub use matrix::Matrix3x3;
pub use quantize::{quantize_u8, quantize_u16, unquantize_u8, unquantize_u16};
