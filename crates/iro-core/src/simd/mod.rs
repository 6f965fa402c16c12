//! Per-target buffer loops
//!
//! The `multiversion` crate compiles the loops that drive the per-pixel
//! conversions once per instruction set and picks one at runtime:
//! x86-64 SSE4.1 or AVX2, ARM64 NEON, or the scalar fallback.

mod batch;

pub use batch::{transform_f32_batch, transform_f64_batch, transform_u16_batch};
