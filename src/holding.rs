// src/holding.rs
use crate::{Asset, error::ModelError};

/// An owned collection of assets that can be queried as a unit.
///
/// Usually built from a [`FixtureSet`](crate::FixtureSet):
/// ```ignore
/// let holdings = fixtures.holdings();
/// let alice = holdings.for_account("alice@wonderland");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Holdings {
    assets: Vec<Asset>,
}

impl Holdings {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// First asset of the given definition id (`name#domain`).
    pub fn get(&self, definition_id: &str) -> Option<&Asset> {
        self.assets
            .iter()
            .find(|a| a.definition().matches_id(definition_id))
    }

    /// Assets held by one account, in original order.
    pub fn for_account(&self, account: &str) -> Holdings {
        self.assets
            .iter()
            .filter(|a| a.account() == account)
            .cloned()
            .collect::<Vec<_>>()
            .into()
    }

    /// Sum of numeric values across every asset of a definition.
    ///
    /// Fails on the first value that does not parse, or when the sum
    /// overflows. A definition with no assets totals 0.
    pub fn total(&self, definition_id: &str) -> Result<f64, ModelError> {
        let total: f64 = self
            .assets
            .iter()
            .filter(|a| a.definition().matches_id(definition_id))
            .map(Asset::numeric_value)
            .sum::<Result<f64, ModelError>>()?;

        if !total.is_finite() {
            return Err(ModelError::NonFiniteTotal(definition_id.to_string()));
        }
        Ok(total)
    }
}

impl From<Vec<Asset>> for Holdings {
    fn from(assets: Vec<Asset>) -> Self {
        Self::new(assets)
    }
}

impl IntoIterator for Holdings {
    type Item = Asset;
    type IntoIter = std::vec::IntoIter<Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.into_iter()
    }
}

impl<'a> IntoIterator for &'a Holdings {
    type Item = &'a Asset;
    type IntoIter = std::slice::Iter<'a, Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}
