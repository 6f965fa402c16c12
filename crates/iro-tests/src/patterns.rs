//! Test pattern generation
//!
//! Deterministic inputs for round-trip and parity sweeps. Random patterns
//! use a seeded ChaCha8 generator so failures reproduce.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// 8-bit RGB test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Grayscale ramp 0-255
    Grayscale,
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation
    HueRamp,
    /// Saturated colors near gamut boundary
    GamutBoundary,
    /// Random pixels with seed
    Random(u64),
}

/// Generate `count` pixels of a pattern as an interleaved RGB8 buffer
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<u8> {
    let mut data = vec![0u8; count * 3];

    match pattern {
        TestPattern::Grayscale => {
            for (i, chunk) in data.chunks_exact_mut(3).enumerate() {
                chunk.fill((i % 256) as u8);
            }
        }
        TestPattern::ColorCube => {
            let corners: [[u8; 3]; 8] = [
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ];
            for (i, chunk) in data.chunks_exact_mut(3).enumerate() {
                chunk.copy_from_slice(&corners[i % 8]);
            }
        }
        TestPattern::HueRamp => {
            for (i, chunk) in data.chunks_exact_mut(3).enumerate() {
                let hue = (i as f32 / count as f32) * 360.0;
                chunk.copy_from_slice(&hsl_to_rgb(hue, 1.0, 0.5));
            }
        }
        TestPattern::GamutBoundary => {
            let colors: [[u8; 3]; 8] = [
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 128, 0],
                [128, 0, 255],
            ];
            for (i, chunk) in data.chunks_exact_mut(3).enumerate() {
                chunk.copy_from_slice(&colors[i % 8]);
            }
        }
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.fill_bytes(&mut data);
        }
    }

    data
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    ]
}

/// Random `[c0, c1, c2, alpha]` samples with every value in `[0, 1]`
pub fn random_unit_rgba(seed: u64, count: usize) -> Vec<[f64; 4]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            [
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
            ]
        })
        .collect()
}

/// Random OKLab samples: L in `[0, 1]`, a and b in `[-0.5, 0.5]`
pub fn random_oklab(seed: u64, count: usize) -> Vec<[f64; 4]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            [
                rng.gen_range(0.0..=1.0),
                rng.gen_range(-0.5..=0.5),
                rng.gen_range(-0.5..=0.5),
                rng.gen_range(0.0..=1.0),
            ]
        })
        .collect()
}

/// Random XYZ samples spanning a little past the visible range
pub fn random_xyz(seed: u64, count: usize) -> Vec<[f64; 4]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-0.2..=1.2),
                rng.gen_range(-0.2..=1.2),
                rng.gen_range(-0.2..=1.3),
                rng.gen_range(0.0..=1.0),
            ]
        })
        .collect()
}

/// Standard sample counts
pub mod sizes {
    pub const SMALL: usize = 256;
    pub const MEDIUM: usize = 4096;
    pub const LARGE: usize = 65536;
}
