use crate::config::{ReaderBuilder, ReaderConfig};
use crate::error::ReaderError;
use crate::reduce::reduce;
use simdump_events::{Attribute, DumpEventHandler, QName, attribute_value};
use simdump_types::{AttributeSeries, ElementKind, IntervalSnapshot, Reduction};
use std::collections::BTreeMap;

/// Lifecycle of a [`DumpReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderPhase {
    /// Constructed, no events received yet.
    Empty,
    /// Between document start (or the first interval) and document end.
    Parsing,
    /// Document end received.
    Parsed,
    /// At least one series has been joined. No further events are accepted.
    Reduced,
}

/// Collects per-interval snapshots of the requested attributes.
///
/// Every `interval` element appends one empty snapshot to each requested
/// attribute's series, so all series stay index-aligned with
/// [`interval_begins`](Self::interval_begins). Edge and lane elements fill the
/// most recent snapshot.
#[derive(Debug, Clone)]
pub struct DumpReader {
    config: ReaderConfig,
    values: BTreeMap<String, AttributeSeries>,
    interval_begins: Vec<f64>,
    phase: ReaderPhase,
    inside_interval: bool,
}

impl DumpReader {
    /// Creates a reader for the given attributes with default element naming.
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_valid_config(ReaderConfig::new(attributes))
    }

    pub fn with_config(config: ReaderConfig) -> Result<Self, ReaderError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    pub fn builder() -> ReaderBuilder {
        ReaderBuilder::new()
    }

    fn from_valid_config(config: ReaderConfig) -> Self {
        let values = config
            .attributes
            .iter()
            .map(|a| (a.clone(), AttributeSeries::new()))
            .collect();
        Self {
            config,
            values,
            interval_begins: Vec::new(),
            phase: ReaderPhase::Empty,
            inside_interval: false,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Requested attribute names, in sorted order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_requested(&self, attribute: &str) -> bool {
        self.values.contains_key(attribute)
    }

    /// Begin times of every interval seen, in document order.
    pub fn interval_begins(&self) -> &[f64] {
        &self.interval_begins
    }

    pub fn interval_count(&self) -> usize {
        self.interval_begins.len()
    }

    pub fn phase(&self) -> ReaderPhase {
        self.phase
    }

    /// Returns the collected series of `attribute`.
    ///
    /// After a [`join`](Self::join) on that attribute the series holds a single
    /// aggregate snapshot.
    pub fn get(&self, attribute: &str) -> Result<&[IntervalSnapshot], ReaderError> {
        self.values
            .get(attribute)
            .map(Vec::as_slice)
            .ok_or_else(|| ReaderError::UnknownAttribute(attribute.to_string()))
    }

    /// Every series with its attribute name, in sorted order.
    pub fn series(&self) -> impl Iterator<Item = (&str, &[IntervalSnapshot])> {
        self.values
            .iter()
            .map(|(name, series)| (name.as_str(), series.as_slice()))
    }

    /// Consumes the reader, returning every series keyed by attribute name.
    pub fn into_series(self) -> BTreeMap<String, AttributeSeries> {
        self.values
    }

    /// Starts a new interval: records its begin time and appends an empty
    /// snapshot to every requested series.
    pub fn open_interval(&mut self, begin: f64) -> Result<(), ReaderError> {
        self.ensure_accepting_events()?;
        self.phase = ReaderPhase::Parsing;

        if let Some(&previous) = self.interval_begins.last()
            && begin < previous
        {
            log::warn!(
                "Interval begin {} is earlier than the previous interval ({})",
                begin,
                previous
            );
        }

        self.interval_begins.push(begin);
        for series in self.values.values_mut() {
            series.push(IntervalSnapshot::new());
        }
        log::debug!("Opened interval #{} at {}", self.interval_begins.len(), begin);
        Ok(())
    }

    /// Stores the requested attributes of one element in the current interval.
    ///
    /// Unrequested attributes are ignored and requested ones the element does
    /// not carry are left absent.
    pub fn record_element(
        &mut self,
        kind: ElementKind,
        id: &str,
        attributes: &[Attribute],
    ) -> Result<(), ReaderError> {
        self.ensure_accepting_events()?;
        if !self.config.element_kinds.contains(&kind) {
            return Ok(());
        }

        for attr in attributes {
            let name = attr.name.local_name.as_str();
            let Some(series) = self.values.get_mut(name) else {
                continue;
            };
            let Some(snapshot) = series.last_mut() else {
                return Err(ReaderError::malformed(format!(
                    "{} '{}' appears before any <{}> element",
                    kind, id, self.config.interval_tag
                )));
            };
            let value = parse_number(&attr.value)
                .ok_or_else(|| ReaderError::invalid_value(id, name, &attr.value))?;
            snapshot.insert(id.to_string(), value);
        }

        log::trace!("Recorded {} '{}'", kind, id);
        Ok(())
    }

    /// Replaces the series of each named attribute with its single aggregate
    /// snapshot.
    ///
    /// Every name is checked before any series is touched, so an unknown name
    /// leaves the reader unchanged.
    pub fn join<I, S>(&mut self, attributes: I, how: Reduction) -> Result<(), ReaderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = attributes.into_iter().collect();
        for name in &names {
            let name: &str = name.as_ref();
            if !self.is_requested(name) {
                return Err(ReaderError::UnknownAttribute(name.to_string()));
            }
        }

        for name in &names {
            let name: &str = name.as_ref();
            if let Some(series) = self.values.get_mut(name) {
                let intervals = series.len();
                let aggregate = reduce(series, how);
                log::debug!(
                    "Joined '{}' over {} intervals ({}): {} elements",
                    name,
                    intervals,
                    how,
                    aggregate.len()
                );
                *series = vec![aggregate];
            }
        }

        if !names.is_empty() {
            self.phase = ReaderPhase::Reduced;
        }
        Ok(())
    }

    /// Like [`join`](Self::join), with the reduction given by name
    /// (`"sum"` or `"average"`).
    pub fn join_named<I, S>(&mut self, attributes: I, how: &str) -> Result<(), ReaderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let how: Reduction = how.parse()?;
        self.join(attributes, how)
    }

    fn ensure_accepting_events(&self) -> Result<(), ReaderError> {
        if self.phase == ReaderPhase::Reduced {
            return Err(ReaderError::malformed(
                "parse events received after series were joined",
            ));
        }
        Ok(())
    }

    fn has_requested(&self, attributes: &[Attribute]) -> bool {
        attributes
            .iter()
            .any(|a| self.is_requested(&a.name.local_name))
    }
}

impl DumpEventHandler for DumpReader {
    type Error = ReaderError;

    fn start_document(&mut self) -> Result<(), Self::Error> {
        self.ensure_accepting_events()?;
        self.phase = ReaderPhase::Parsing;
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), Self::Error> {
        if self.phase != ReaderPhase::Reduced {
            self.phase = ReaderPhase::Parsed;
        }
        log::debug!(
            "Dump read: {} intervals, {} attributes",
            self.interval_begins.len(),
            self.values.len()
        );
        Ok(())
    }

    fn start_element(&mut self, name: &QName, attributes: &[Attribute]) -> Result<(), Self::Error> {
        if name.is(&self.config.interval_tag) {
            let raw = attribute_value(attributes, &self.config.begin_attribute).ok_or_else(|| {
                ReaderError::malformed(format!(
                    "<{}> without a '{}' attribute",
                    self.config.interval_tag, self.config.begin_attribute
                ))
            })?;
            let begin = parse_number(raw).ok_or_else(|| {
                ReaderError::invalid_value(
                    &self.config.interval_tag,
                    &self.config.begin_attribute,
                    raw,
                )
            })?;
            if self.inside_interval {
                log::warn!(
                    "<{}> at {} opened before the previous one was closed",
                    self.config.interval_tag,
                    begin
                );
            }
            self.inside_interval = true;
            return self.open_interval(begin);
        }

        let Some(kind) = ElementKind::from_tag(&name.local_name) else {
            return Ok(());
        };
        if !self.has_requested(attributes) {
            return Ok(());
        }
        let id = attribute_value(attributes, &self.config.id_attribute).ok_or_else(|| {
            ReaderError::malformed(format!(
                "{} without a '{}' attribute",
                kind, self.config.id_attribute
            ))
        })?;
        self.record_element(kind, id, attributes)
    }

    fn end_element(&mut self, name: &QName) -> Result<(), Self::Error> {
        if name.is(&self.config.interval_tag) {
            self.inside_interval = false;
        }
        Ok(())
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
