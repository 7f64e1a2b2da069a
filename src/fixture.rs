// src/fixture.rs
use crate::{Asset, AssetDefinition, Holdings, error::ModelError};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct RawFixtureSet {
    #[serde(default)]
    definitions: Vec<AssetDefinition>,
    #[serde(default)]
    assets: Vec<RawAsset>,
}

#[derive(Debug, Deserialize)]
struct RawAsset {
    definition: String,
    account: String,
    value: String,
}

/// Asset definitions and the assets that refer to them, loaded as one unit.
///
/// Definition ids are unique within a set, and every asset of a definition
/// shares the same `Arc<AssetDefinition>`.
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    definitions: Vec<Arc<AssetDefinition>>,
    holdings: Holdings,
}

impl FixtureSet {
    /// Reads a fixture document:
    ///
    /// ```json
    /// {
    ///   "definitions": [{ "name": "xor", "domain": "soramitsu", "scale": 2 }],
    ///   "assets": [{ "definition": "xor#soramitsu", "account": "alice@wonderland", "value": "100" }]
    /// }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let raw: RawFixtureSet = serde_json::from_str(json)?;

        let mut definitions = Vec::with_capacity(raw.definitions.len());
        let mut by_id: HashMap<String, Arc<AssetDefinition>> = HashMap::new();
        for definition in raw.definitions {
            let id = definition.get_id();
            if by_id.contains_key(&id) {
                tracing::warn!(definition = %id, "asset definition listed twice");
                return Err(ModelError::DuplicateDefinition(id));
            }
            let definition = Arc::new(definition);
            by_id.insert(id, Arc::clone(&definition));
            definitions.push(definition);
        }

        let mut assets = Vec::with_capacity(raw.assets.len());
        for raw_asset in raw.assets {
            // Rejects malformed ids before the lookup.
            let id = raw_asset.definition.parse::<AssetDefinition>()?.get_id();
            let Some(definition) = by_id.get(&id) else {
                tracing::warn!(
                    definition = %id,
                    account = %raw_asset.account,
                    "asset refers to unknown definition"
                );
                return Err(ModelError::UnknownDefinition(id));
            };
            assets.push(Asset::new(
                Arc::clone(definition),
                raw_asset.account,
                raw_asset.value,
            ));
        }

        tracing::debug!(
            definitions = definitions.len(),
            assets = assets.len(),
            "loaded asset fixtures"
        );

        Ok(Self {
            definitions,
            holdings: assets.into(),
        })
    }

    pub fn definitions(&self) -> &[Arc<AssetDefinition>] {
        &self.definitions
    }

    /// Looks up a definition by `name#domain`.
    pub fn definition(&self, id: &str) -> Option<Arc<AssetDefinition>> {
        self.definitions
            .iter()
            .find(|def| def.matches_id(id))
            .cloned()
    }

    pub fn holdings(&self) -> &Holdings {
        &self.holdings
    }
}
