use crate::error::ReaderError;
use crate::reader::DumpReader;
use serde::{Deserialize, Serialize};
use simdump_types::ElementKind;
use std::collections::BTreeSet;

/// What a [`DumpReader`] collects and how it recognizes dump elements.
///
/// Fixed once the reader is built; attributes cannot be registered mid-parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Attribute names to collect from edge and lane elements.
    pub attributes: BTreeSet<String>,
    pub interval_tag: String,
    pub begin_attribute: String,
    pub id_attribute: String,
    /// Element kinds whose attributes are collected. Others are ignored.
    pub element_kinds: BTreeSet<ElementKind>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            attributes: BTreeSet::new(),
            interval_tag: "interval".to_string(),
            begin_attribute: "begin".to_string(),
            id_attribute: "id".to_string(),
            element_kinds: ElementKind::ALL.into_iter().collect(),
        }
    }
}

impl ReaderConfig {
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ReaderError> {
        for (field, value) in [
            ("interval_tag", &self.interval_tag),
            ("begin_attribute", &self.begin_attribute),
            ("id_attribute", &self.id_attribute),
        ] {
            if value.is_empty() {
                return Err(ReaderError::config(format!("`{}` must not be empty", field)));
            }
        }
        if ElementKind::from_tag(&self.interval_tag).is_some() {
            return Err(ReaderError::config(format!(
                "interval tag '{}' collides with an element kind",
                self.interval_tag
            )));
        }
        Ok(())
    }
}

/// A builder for creating a [`DumpReader`].
#[derive(Debug, Default)]
pub struct ReaderBuilder {
    config: ReaderConfig,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Starts from an existing configuration, e.g. one loaded from a file.
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.config.attributes.insert(name.into());
        self
    }

    pub fn with_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.attributes.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_interval_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.interval_tag = tag.into();
        self
    }

    pub fn with_begin_attribute(mut self, name: impl Into<String>) -> Self {
        self.config.begin_attribute = name.into();
        self
    }

    pub fn with_id_attribute(mut self, name: impl Into<String>) -> Self {
        self.config.id_attribute = name.into();
        self
    }

    /// Restricts collection to the given element kinds.
    pub fn with_element_kinds(mut self, kinds: impl IntoIterator<Item = ElementKind>) -> Self {
        self.config.element_kinds = kinds.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<DumpReader, ReaderError> {
        DumpReader::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReaderConfig::new(["speed", "density"]);
        assert_eq!(config.interval_tag, "interval");
        assert_eq!(config.begin_attribute, "begin");
        assert_eq!(config.id_attribute, "id");
        assert_eq!(config.element_kinds.len(), 2);
        assert!(config.attributes.contains("speed"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_names() {
        let config = ReaderConfig {
            begin_attribute: String::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ReaderError::Config(msg) if msg.contains("begin_attribute")));
    }

    #[test]
    fn test_validate_rejects_interval_tag_colliding_with_kind() {
        let config = ReaderConfig {
            interval_tag: "lane".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ReaderError::Config(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ReaderConfig =
            serde_json::from_str(r#"{"attributes": ["waitingTime"], "element_kinds": ["lane"]}"#)
                .unwrap();
        assert_eq!(config.interval_tag, "interval");
        assert_eq!(config.element_kinds, BTreeSet::from([ElementKind::Lane]));
        assert!(config.attributes.contains("waitingTime"));
    }

    #[test]
    fn test_builder_collects_attributes() {
        let reader = ReaderBuilder::new()
            .with_attribute("speed")
            .with_attributes(["occupancy", "speed"])
            .with_interval_tag("step")
            .build()
            .unwrap();
        let names: Vec<&str> = reader.attributes().collect();
        assert_eq!(names, vec!["occupancy", "speed"]);
        assert_eq!(reader.config().interval_tag, "step");
    }

    #[test]
    fn test_builder_with_config_then_extend() {
        let reader = ReaderBuilder::new()
            .with_config(ReaderConfig::new(["entered"]))
            .with_attribute("left")
            .build()
            .unwrap();
        assert!(reader.is_requested("entered"));
        assert!(reader.is_requested("left"));
    }
}
