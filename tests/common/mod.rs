//! Common test utilities module
//!
//! Provides shared utilities for tests including:
//! - Seasonal test series generation
//! - Config files in temporary directories

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Reference quarterly series: three seasons of period 4
pub const QUARTERLY: [f64; 12] = [
    10.0, 20.0, 30.0, 40.0, 11.0, 22.0, 31.0, 42.0, 10.0, 21.0, 33.0, 41.0,
];

/// Linear trend times a repeating multiplicative pattern
pub fn multiplicative_series(seasons: usize, pattern: &[f64], base: f64, slope: f64) -> Vec<f64> {
    let period = pattern.len();
    (0..seasons * period)
        .map(|t| (base + slope * t as f64) * pattern[t % period])
        .collect()
}

/// Temporary directory holding one config file; removed on drop
pub struct TempConfig {
    dir: TempDir,
    path: PathBuf,
}

impl TempConfig {
    pub fn new(file_name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(file_name);
        fs::write(&path, contents).expect("Failed to write config");
        TempConfig { dir, path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}
