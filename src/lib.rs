//! Reads interval measurement dumps of a traffic simulation into per-attribute
//! time series.
//!
//! ```ignore
//! let mut dump = simdump::read_dump("edgedata.xml", ["speed", "density"])?;
//! dump.join(["speed"], simdump::Reduction::Average)?;
//! let mean_speed = &dump.get("speed")?[0];
//! ```

pub mod error;
pub mod report;

pub use error::DumpError;
pub use report::DumpReport;

pub use simdump_events as events;
pub use simdump_reader::{DumpReader, ReaderBuilder, ReaderConfig, ReaderError, ReaderPhase};
pub use simdump_types::{AttributeSeries, ElementKind, IntervalSnapshot, Reduction};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads the dump at `path`, collecting the given attributes.
pub fn read_dump<P, I, S>(path: P, attributes: I) -> Result<DumpReader, DumpError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    read_dump_with_config(path, ReaderConfig::new(attributes))
}

pub fn read_dump_with_config<P: AsRef<Path>>(
    path: P,
    config: ReaderConfig,
) -> Result<DumpReader, DumpError> {
    let path = path.as_ref();
    log::info!("Reading dump from {}", path.display());
    let file = File::open(path)?;
    read_dump_from(BufReader::new(file), config)
}

/// Reads a dump from any buffered source without loading it whole.
pub fn read_dump_from<R: BufRead>(source: R, config: ReaderConfig) -> Result<DumpReader, DumpError> {
    let mut reader = DumpReader::with_config(config)?;
    simdump_events::drive_reader(source, &mut reader)?;
    Ok(reader)
}

pub fn read_dump_str<I, S>(xml: &str, attributes: I) -> Result<DumpReader, DumpError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut reader = DumpReader::new(attributes);
    simdump_events::drive_str(xml, &mut reader)?;
    Ok(reader)
}
