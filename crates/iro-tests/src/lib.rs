//! # iro-tests
//!
//! Property and cross-implementation tests for iro.
//!
//! This crate provides:
//! - Seeded sample generators for sRGB, Display P3, OKLab and XYZ
//! - Absolute-error statistics for comparing channel buffers
//! - Wrappers around reference implementations
//! - Reference color fixtures computed with exact rational matrices
//!
//! ## Reference Implementations
//!
//! - **palette**: Pure Rust color types, used for per-color parity
//! - **moxcms**: Pure Rust CMS, used for 8-bit sRGB ↔ Display P3 parity
//!
//! ## Test Categories
//!
//! 1. **Round trips**: every space back to XYZ, chained conversions
//! 2. **Pixel interop**: integer encodings, premultiplied alpha
//! 3. **Reference values**: fixed colors against stored fixtures
//! 4. **Parity**: agreement with palette and moxcms
//! 5. **Buffers**: [`iro_core::Transform`] over interleaved data

pub mod accuracy;
pub mod fixtures;
pub mod patterns;
pub mod reference;

pub use accuracy::{ErrorStats, compare_f64_buffers, compare_u8_buffers};
pub use fixtures::{ReferenceColor, load_reference_colors};
