use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("XML error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Unclosed element <{element}> at end of input (byte {position})")]
    Unclosed { element: String, position: u64 },

    #[error("Invalid UTF-8 in element or attribute: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Invalid escape sequence in attribute value: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
}

impl EventError {
    pub fn xml(position: u64, source: quick_xml::Error) -> Self {
        Self::Xml { position, source }
    }
}
