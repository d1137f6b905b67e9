use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a series of interval snapshots is collapsed into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reduction {
    /// Per-id sum over every interval that reported the id.
    Sum,
    /// Per-id mean over only the intervals that reported the id.
    Average,
}

impl Reduction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reduction::Sum => "sum",
            Reduction::Average => "average",
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid reduction kind '{0}' (expected 'sum' or 'average')")]
pub struct InvalidReductionKind(pub String);

impl FromStr for Reduction {
    type Err = InvalidReductionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum" => Ok(Reduction::Sum),
            "average" => Ok(Reduction::Average),
            other => Err(InvalidReductionKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_reductions() {
        assert_eq!("sum".parse::<Reduction>(), Ok(Reduction::Sum));
        assert_eq!("average".parse::<Reduction>(), Ok(Reduction::Average));
    }

    #[test]
    fn test_parse_rejects_other_names() {
        for name in ["mean", "Sum", "avg", ""] {
            let err = name.parse::<Reduction>().unwrap_err();
            assert_eq!(err.0, name);
        }
    }

    #[test]
    fn test_display_matches_parse() {
        for r in [Reduction::Sum, Reduction::Average] {
            assert_eq!(r.to_string().parse::<Reduction>(), Ok(r));
        }
    }
}
