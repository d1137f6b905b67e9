//! Push-style event delivery for interval dumps.
//!
//! The reader crates never tokenize XML themselves. They implement
//! [`DumpEventHandler`] and are fed by [`drive_str`] or [`drive_reader`],
//! which wrap a quick-xml pull parser, or by [`replay`] for pre-built events.

pub mod driver;
pub mod error;
pub mod event_model;

pub use driver::{drive_reader, drive_str, replay};
pub use error::EventError;
pub use event_model::{Attribute, DumpEvent, DumpEventHandler, QName, attribute_value};
