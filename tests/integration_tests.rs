// tests/integration_tests.rs
use iroha_test_models::{Asset, AssetDefinition, FixtureSet, ModelError};
use std::sync::Arc;

const FIXTURES: &str = r#"{
    "definitions": [
        {"name": "xor", "domain": "soramitsu"},
        {"name": "rose", "domain": "wonderland", "scale": 2}
    ],
    "assets": [
        {"definition": "xor#soramitsu", "account": "alice@wonderland", "value": "100"},
        {"definition": "rose#wonderland", "account": "alice@wonderland", "value": "13.25"},
        {"definition": "xor#soramitsu", "account": "bob@wonderland", "value": "abc"}
    ]
}"#;

#[test]
fn test_fixture_assets_display_like_client_output() {
    let fixtures = FixtureSet::from_json(FIXTURES).unwrap();

    let shown: Vec<String> = fixtures
        .holdings()
        .into_iter()
        .map(|a| a.to_string())
        .collect();
    assert_eq!(
        shown,
        vec!["xor#soramitsu:100", "rose#wonderland:13.25", "xor#soramitsu:abc"]
    );
}

#[test]
fn test_fixture_definitions_are_shared() {
    let fixtures = FixtureSet::from_json(FIXTURES).unwrap();
    let xor = fixtures.definition("xor#soramitsu").unwrap();

    // The set, the lookup above and the two xor assets.
    assert_eq!(Arc::strong_count(&xor), 4);
    assert_eq!(xor.scale(), None);
    assert_eq!(
        fixtures.definition("rose#wonderland").unwrap().scale(),
        Some(2)
    );
}

#[test]
fn test_fixture_values_pass_through() {
    let fixtures = FixtureSet::from_json(FIXTURES).unwrap();
    let bob = fixtures.holdings().for_account("bob@wonderland");

    assert_eq!(bob.len(), 1);
    assert_eq!(bob.assets()[0].get_value(), "abc");
    assert_eq!(
        fixtures.holdings().total("xor#soramitsu"),
        Err(ModelError::NonNumericValue("abc".to_string()))
    );
    assert_eq!(fixtures.holdings().total("rose#wonderland"), Ok(13.25));
}

#[test]
fn test_unknown_definition_is_rejected() {
    let json = r#"{
        "definitions": [{"name": "xor", "domain": "soramitsu"}],
        "assets": [{"definition": "tulip#wonderland", "account": "alice@wonderland", "value": "1"}]
    }"#;

    assert_eq!(
        FixtureSet::from_json(json).unwrap_err(),
        ModelError::UnknownDefinition("tulip#wonderland".to_string())
    );
}

#[test]
fn test_json_shape() {
    let def = Arc::new(AssetDefinition::new("xor", "soramitsu"));
    let asset = Asset::new(def, "alice@wonderland", "100");

    let json = serde_json::to_value(&asset).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "definition": {"name": "xor", "domain": "soramitsu", "scale": null},
            "account": "alice@wonderland",
            "value": "100"
        })
    );
}

#[test]
fn test_bincode_keeps_scale() {
    let def = AssetDefinition::with_scale("rose", "wonderland", 0);
    let bytes = bincode::serialize(&def).unwrap();
    let back: AssetDefinition = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back, def);
    assert_eq!(back.scale(), Some(0));
}
