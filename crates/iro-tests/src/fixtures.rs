//! Reference color fixtures
//!
//! `testdata/reference_colors.json` holds a handful of sRGB colors with
//! their XYZ D65, Display P3 and OKLab coordinates, computed independently
//! in double precision from the same rational matrices.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// One fixture entry
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceColor {
    /// Human-readable name, used in assertion messages
    pub name: String,
    /// Nonlinear sRGB input
    pub srgb: [f64; 3],
    /// Expected XYZ D65
    pub xyz: [f64; 3],
    /// Expected nonlinear Display P3
    pub display_p3: [f64; 3],
    /// Expected OKLab
    pub oklab: [f64; 3],
}

/// Directory holding fixture files
pub fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Load `reference_colors.json` from [`testdata_dir`]
pub fn load_reference_colors() -> Result<Vec<ReferenceColor>> {
    load_reference_colors_from(&testdata_dir().join("reference_colors.json"))
}

/// Load reference colors from an explicit path
pub fn load_reference_colors_from(path: &Path) -> Result<Vec<ReferenceColor>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let colors: Vec<ReferenceColor> = serde_json::from_str(&data)
        .with_context(|| format!("parsing {}", path.display()))?;
    anyhow::ensure!(!colors.is_empty(), "{} has no entries", path.display());
    Ok(colors)
}
