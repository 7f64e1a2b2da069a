// src/asset.rs
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Type of an asset as the client reports it: `name#domain`.
///
/// Construction never validates. Empty names, empty domains and any scale are
/// stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetDefinition {
    name: String,
    domain: String,
    #[serde(default)]
    scale: Option<i64>,
}

impl AssetDefinition {
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            scale: None,
        }
    }

    pub fn with_scale(name: impl Into<String>, domain: impl Into<String>, scale: i64) -> Self {
        Self {
            scale: Some(scale),
            ..Self::new(name, domain)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Decimal precision, `None` when the definition was registered without one.
    pub fn scale(&self) -> Option<i64> {
        self.scale
    }

    /// Definition id, `name#domain`.
    pub fn get_id(&self) -> String {
        format!("{}#{}", self.name, self.domain)
    }

    /// Whether `id` equals [`get_id`](Self::get_id), without allocating.
    pub fn matches_id(&self, id: &str) -> bool {
        id.strip_prefix(self.name.as_str())
            .and_then(|rest| rest.strip_prefix('#'))
            == Some(self.domain.as_str())
    }
}

impl fmt::Display for AssetDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.domain)
    }
}

/// Parses `name#domain`, splitting on the last `#`.
impl FromStr for AssetDefinition {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('#') {
            None => Err(ModelError::MissingDelimiter(s.to_string())),
            Some(("", _)) => Err(ModelError::EmptyName),
            Some((_, "")) => Err(ModelError::EmptyDomain),
            Some((name, domain)) => Ok(Self::new(name, domain)),
        }
    }
}

/// A quantity of some [`AssetDefinition`] held by an account.
///
/// `value` is kept exactly as the client printed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    definition: Arc<AssetDefinition>,
    account: String,
    value: String,
}

impl Asset {
    pub fn new(
        definition: Arc<AssetDefinition>,
        account: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            definition,
            account: account.into(),
            value: value.into(),
        }
    }

    pub fn definition(&self) -> &AssetDefinition {
        &self.definition
    }

    pub fn definition_id(&self) -> String {
        self.definition.get_id()
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// Stored value, unparsed.
    pub fn get_value(&self) -> &str {
        &self.value
    }

    /// Value interpreted as a finite number.
    pub fn numeric_value(&self) -> Result<f64, ModelError> {
        self.value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ModelError::NonNumericValue(self.value.clone()))
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.definition, self.value)
    }
}
