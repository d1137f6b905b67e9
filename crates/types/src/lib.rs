//! Shared value types for interval dumps.
//!
//! A dump is a sequence of intervals. For every requested attribute the reader
//! keeps one [`IntervalSnapshot`] per interval, so an attribute's history is an
//! [`AttributeSeries`].

pub mod element;
pub mod reduction;
pub mod series;

pub use element::{ElementKind, UnknownElementKind};
pub use reduction::{InvalidReductionKind, Reduction};
pub use series::{AttributeSeries, IntervalSnapshot};
