use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Network element kinds that carry measurements inside an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Edge,
    Lane,
}

impl ElementKind {
    pub const ALL: [ElementKind; 2] = [ElementKind::Edge, ElementKind::Lane];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Edge => "edge",
            ElementKind::Lane => "lane",
        }
    }

    /// Maps an element tag to a kind. Returns `None` for tags that carry no
    /// measurements.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "edge" => Some(ElementKind::Edge),
            "lane" => Some(ElementKind::Lane),
            _ => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown element kind '{0}' (expected 'edge' or 'lane')")]
pub struct UnknownElementKind(pub String);

impl FromStr for ElementKind {
    type Err = UnknownElementKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::from_tag(s).ok_or_else(|| UnknownElementKind(s.to_string()))
    }
}
