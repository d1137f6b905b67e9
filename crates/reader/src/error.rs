use simdump_events::EventError;
use simdump_types::InvalidReductionKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unknown attribute '{0}': it was not requested when the reader was created")]
    UnknownAttribute(String),

    #[error(transparent)]
    InvalidReductionKind(#[from] InvalidReductionKind),

    #[error("Invalid reader configuration: {0}")]
    Config(String),

    #[error("Event source error: {0}")]
    Event(#[from] EventError),
}

impl ReaderError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    pub fn invalid_value(element: &str, attribute: &str, raw: &str) -> Self {
        Self::MalformedInput(format!(
            "value '{}' of attribute '{}' on element '{}' is not a number",
            raw, attribute, element
        ))
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }
}
