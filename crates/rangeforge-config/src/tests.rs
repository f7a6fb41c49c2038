//! Tests for algorithm configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [sort]
        small_sort_threshold = 4
        pivot = "first"
    "#;

    let config = AlgorithmConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.sort.small_sort_threshold, 4);
    assert_eq!(config.sort.pivot, PivotStrategy::First);
    assert_eq!(config.sort.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        sort:
          pivot: random
          seed: 42
    "#;

    let config = AlgorithmConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.sort.pivot, PivotStrategy::Random);
    assert_eq!(config.sort.seed, Some(42));
    assert_eq!(config.sort.small_sort_threshold, 16);
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = AlgorithmConfig::from_toml_str("").unwrap();
    assert_eq!(config, AlgorithmConfig::default());
    assert_eq!(config.sort.pivot, PivotStrategy::Middle);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder() {
    let config = AlgorithmConfig::new()
        .with_small_sort_threshold(32)
        .with_pivot(PivotStrategy::Random)
        .with_seed(123);

    assert_eq!(config.sort.small_sort_threshold, 32);
    assert_eq!(config.sort.seed, Some(123));
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_threshold() {
    let config = AlgorithmConfig::new().with_small_sort_threshold(0);
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("small_sort_threshold"));
}

#[test]
fn test_validate_rejects_oversized_threshold() {
    let config = AlgorithmConfig::new().with_small_sort_threshold(MAX_SMALL_SORT_THRESHOLD + 1);
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_seed_without_random_pivot() {
    let config = AlgorithmConfig::new().with_seed(9);
    assert!(config.validate().is_err());
}

#[test]
fn test_unknown_pivot_is_a_parse_error() {
    let err = AlgorithmConfig::from_toml_str("[sort]\npivot = \"median\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = AlgorithmConfig::load("does/not/exist/rangeforge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_parses_yaml_by_extension() {
    let dir = std::env::temp_dir().join(format!("rangeforge-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let yaml_path = dir.join("rangeforge.yaml");
    std::fs::write(&yaml_path, "sort:\n  pivot: random\n  seed: 5\n").unwrap();
    let yml_path = dir.join("rangeforge.yml");
    std::fs::write(&yml_path, "sort:\n  small_sort_threshold: 3\n").unwrap();
    let toml_path = dir.join("rangeforge.toml");
    std::fs::write(&toml_path, "[sort]\npivot = \"first\"\n").unwrap();

    let from_yaml = AlgorithmConfig::load(&yaml_path).unwrap();
    let from_yml = AlgorithmConfig::load(&yml_path).unwrap();
    let from_toml = AlgorithmConfig::load(&toml_path).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(from_yaml.sort.pivot, PivotStrategy::Random);
    assert_eq!(from_yaml.sort.seed, Some(5));
    assert_eq!(from_yml.sort.small_sort_threshold, 3);
    assert_eq!(from_toml.sort.pivot, PivotStrategy::First);
}

#[test]
fn test_load_validates_yaml() {
    let dir = std::env::temp_dir().join(format!("rangeforge-config-invalid-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("rangeforge.yaml");
    std::fs::write(&path, "sort:\n  small_sort_threshold: 0\n").unwrap();

    let err = AlgorithmConfig::load(&path).unwrap_err();
    std::fs::remove_dir_all(&dir).unwrap();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_config_error_converts_to_core_error() {
    let err: RangeForgeError = ConfigError::Invalid("bad".to_string()).into();
    assert_eq!(err.to_string(), "Configuration error: Invalid configuration: bad");
}
