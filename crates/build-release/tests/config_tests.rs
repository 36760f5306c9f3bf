//! Tests for loading release config and pruning with it.

use build_release::{Error, PropertyPruner, Registry, ReleaseConfig, TARGET_RELEASE_ENV};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_file() {
    let file = write_config(
        r#"
target = "S"

[properties]
"java_header_libs" = "T+"
"sdk.compile_dex" = "S"
"#,
    );

    let config = ReleaseConfig::load(file.path()).unwrap();
    assert_eq!(config.target.as_deref(), Some("S"));
    assert_eq!(config.properties.len(), 2);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReleaseConfig::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_env_target_wins_over_file() {
    let file = write_config("target = \"S\"\n");

    temp_env::with_var(TARGET_RELEASE_ENV, Some("T"), || {
        let registry = Registry::builtin();
        let config = ReleaseConfig::load(file.path())
            .unwrap()
            .with_env_overrides();
        assert_eq!(config.target_release(&registry).unwrap().name(), "T");
    });
}

#[test]
fn test_env_target_must_be_registered() {
    temp_env::with_var(TARGET_RELEASE_ENV, Some("Z"), || {
        let registry = Registry::builtin();
        let config = ReleaseConfig::default().with_env_overrides();
        let err = config.target_release(&registry).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "unknown release \"Z\", expected one of {}",
                registry.all_releases()
            )
        );
    });
}

#[test]
fn test_prune_document_for_configured_target() {
    let registry = Registry::builtin().with_releases(["F1", "F2"]).unwrap();
    let file = write_config(
        r#"
target = "T"

[properties]
"java_header_libs" = "F1+"
"modules.stubs" = "S-T"
"#,
    );

    temp_env::with_var_unset(TARGET_RELEASE_ENV, || {
        let config = ReleaseConfig::load(file.path())
            .unwrap()
            .with_env_overrides();
        let target = config.target_release(&registry).unwrap();
        let pruner = PropertyPruner::from_config(&registry, &config).unwrap();

        let mut document = json!({
            "name": "sdk",
            "java_header_libs": ["a", "b"],
            "modules": [{ "name": "m", "stubs": true }]
        });
        let pruned = pruner.prune(&mut document, target);

        assert_eq!(pruned, vec!["java_header_libs".to_string()]);
        assert_eq!(
            document,
            json!({
                "name": "sdk",
                "modules": [{ "name": "m", "stubs": true }]
            })
        );
    });
}

#[test]
fn test_invalid_property_rule_in_config() {
    let registry = Registry::builtin();
    let config = ReleaseConfig::from_toml_str(
        r#"
[properties]
"field" = "A+"
"#,
    )
    .unwrap();

    let err = PropertyPruner::from_config(&registry, &config).unwrap_err();
    assert!(matches!(err, Error::InvalidPropertyRule { ref property, .. } if property == "field"));
    assert!(err.to_string().contains("unknown release \"A\""));
}
