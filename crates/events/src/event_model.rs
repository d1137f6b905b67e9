/// An element or attribute name with its namespace prefix split off.
///
/// Dumps are matched on local names only; the prefix is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QName {
    pub prefix: Option<String>,
    pub local_name: String,
}

impl QName {
    pub fn new(local_name: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local_name: local_name.into(),
        }
    }

    pub fn with_prefix(prefix: Option<String>, local_name: impl Into<String>) -> Self {
        Self {
            prefix,
            local_name: local_name.into(),
        }
    }

    pub fn is(&self, local_name: &str) -> bool {
        self.local_name == local_name
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{}:{}", prefix, self.local_name),
            None => f.write_str(&self.local_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: QName::new(name),
            value: value.into(),
        }
    }
}

/// Looks up an attribute value by local name.
pub fn attribute_value<'a>(attributes: &'a [Attribute], local_name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|a| a.name.is(local_name))
        .map(|a| a.value.as_str())
}

#[derive(Debug, Clone, PartialEq)]
pub enum DumpEvent {
    StartDocument,
    EndDocument,
    StartElement {
        name: QName,
        attributes: Vec<Attribute>,
    },
    EndElement {
        name: QName,
    },
}

impl DumpEvent {
    /// Shorthand for a start-element event with unprefixed attribute names.
    pub fn start(name: &str, attributes: &[(&str, &str)]) -> Self {
        DumpEvent::StartElement {
            name: QName::new(name),
            attributes: attributes
                .iter()
                .map(|(k, v)| Attribute::new(*k, *v))
                .collect(),
        }
    }

    pub fn end(name: &str) -> Self {
        DumpEvent::EndElement {
            name: QName::new(name),
        }
    }

    pub fn is_start_element(&self) -> bool {
        matches!(self, DumpEvent::StartElement { .. })
    }

    pub fn element_name(&self) -> Option<&QName> {
        match self {
            DumpEvent::StartElement { name, .. } => Some(name),
            DumpEvent::EndElement { name } => Some(name),
            _ => None,
        }
    }
}

/// Receives parse events in document order.
///
/// Driver failures are converted into the handler's own error type, so a
/// single `Result` carries both tokenizer and handler errors.
pub trait DumpEventHandler {
    type Error: From<crate::EventError>;

    fn start_document(&mut self) -> Result<(), Self::Error>;
    fn end_document(&mut self) -> Result<(), Self::Error>;

    fn start_element(&mut self, name: &QName, attributes: &[Attribute]) -> Result<(), Self::Error>;

    fn end_element(&mut self, _name: &QName) -> Result<(), Self::Error> {
        Ok(())
    }
}
