// src/error.rs
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    MissingDelimiter(String),
    EmptyName,
    EmptyDomain,
    NonNumericValue(String),
    UnknownDefinition(String),
    DuplicateDefinition(String),
    NonFiniteTotal(String),
    Deserialize(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDelimiter(id) => {
                write!(f, "Asset definition id should have format `name#domain`: {}", id)
            }
            Self::EmptyName => write!(f, "Empty `name` part in `name#domain`"),
            Self::EmptyDomain => write!(f, "Empty `domain` part in `name#domain`"),
            Self::NonNumericValue(value) => write!(f, "Asset value is not numeric: {}", value),
            Self::UnknownDefinition(id) => write!(f, "Asset definition not found: {}", id),
            Self::DuplicateDefinition(id) => write!(f, "Duplicate asset definition: {}", id),
            Self::NonFiniteTotal(id) => write!(f, "Total of {} is not finite", id),
            Self::Deserialize(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialize(err.to_string())
    }
}
