#![allow(dead_code)]

pub mod fixtures;

use std::path::{Path, PathBuf};

pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Writes `contents` to `dir/name` and returns the path.
pub fn write_dump(dir: &Path, name: &str, contents: &str) -> TestResult<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}
