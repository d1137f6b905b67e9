// src/error.rs
use simdump_reader::ReaderError;
use thiserror::Error;

/// Errors surfaced by the dump entry points and the command line tool.
#[derive(Error, Debug)]
pub enum DumpError {
    #[error("Reading dump failed: {0}")]
    Reader(#[from] ReaderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
