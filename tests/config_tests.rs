use tempfile::TempDir;
use vector_operations::{
    config::{EncodingStrategy, VectorOpsConfig},
    vector::MAX_DIMENSIONS,
    VectorOpsError,
};

#[test]
fn test_default_config() {
    let config = VectorOpsConfig::default();
    assert_eq!(config.max_dimensions, MAX_DIMENSIONS);
    assert_eq!(config.text_precision, None);
    assert_eq!(config.preview_len, 32);
    assert_eq!(config.encoding, EncodingStrategy::TextRoundTrip);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vector_ops.json");

    let config = VectorOpsConfig {
        max_dimensions: 1024,
        text_precision: Some(6),
        preview_len: 16,
        encoding: EncodingStrategy::Direct,
    };
    config.save(&path).unwrap();

    let loaded = VectorOpsConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_fills_missing_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("partial.json");
    std::fs::write(&path, r#"{ "encoding": "direct" }"#).unwrap();

    let loaded = VectorOpsConfig::load(&path).unwrap();
    assert_eq!(loaded.encoding, EncodingStrategy::Direct);
    assert_eq!(loaded.max_dimensions, MAX_DIMENSIONS);
    assert_eq!(loaded.preview_len, 32);
}

#[test]
fn test_config_rejects_dimension_bound_above_format_limit() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("too_big.json");
    std::fs::write(&path, r#"{ "max_dimensions": 20000 }"#).unwrap();

    let err = VectorOpsConfig::load(&path).unwrap_err();
    assert!(matches!(err, VectorOpsError::ConfigError(_)));
}

#[test]
fn test_config_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = VectorOpsConfig::load(&temp_dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, VectorOpsError::Other(_)));
}
