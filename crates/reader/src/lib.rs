//! Streaming reader for interval measurement dumps.
//!
//! [`DumpReader`] collects a fixed set of attributes from `edge` and `lane`
//! elements into one snapshot per `interval`, and can collapse a collected
//! series into a single per-element sum or average with [`DumpReader::join`].
//!
//! ```ignore
//! use simdump_events::drive_str;
//! use simdump_reader::DumpReader;
//! use simdump_types::Reduction;
//!
//! let mut reader = DumpReader::new(["speed"]);
//! drive_str(xml, &mut reader)?;
//! reader.join(["speed"], Reduction::Average)?;
//! let means = &reader.get("speed")?[0];
//! ```

pub mod config;
pub mod error;
pub mod reader;
pub mod reduce;

pub use config::{ReaderBuilder, ReaderConfig};
pub use error::ReaderError;
pub use reader::{DumpReader, ReaderPhase};
pub use reduce::reduce;
