//! Configuration file loading and validation

use std::path::PathBuf;
use tempfile::TempDir;
use vision_demo::{
    config::{Config, GuiMode, EXAMPLE_CONFIG},
    Error,
};

#[test]
fn test_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demo.yaml");

    let mut config = Config::default();
    config.output.path = PathBuf::from("clips/run.avi");
    config.output.fourcc = "XVID".to_string();
    config.warp.seed = Some(1234);
    config.display.gui_mode = GuiMode::None;
    config.classifier.cache_dir = Some(dir.path().join("cache"));

    config.to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded, config);
    loaded.validate().unwrap();
}

#[test]
fn test_example_config_parses_and_validates() {
    let config = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
    config.validate().unwrap();
    assert_eq!(config.display.gui_mode, GuiMode::Window);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::from_file(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_malformed_yaml_is_config_error() {
    let result = Config::from_yaml("detection: [1, 2");
    assert!(matches!(result, Err(Error::ConfigError(_))));

    let result = Config::from_yaml("display:\n  gui_mode: fullscreen\n");
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_validation_messages() {
    let mut config = Config::default();
    config.contours.approx_epsilon_ratio = 0.0;
    match config.validate() {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("epsilon")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }

    let mut config = Config::default();
    config.output.fps = 0.0;
    match config.validate() {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("FPS")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }

    let mut config = Config::default();
    config.detection.min_neighbors = -1;
    assert!(config.validate().is_err());
}

#[test]
fn test_empty_document_is_default() {
    let config = Config::from_yaml("{}").unwrap();
    assert_eq!(config, Config::default());
}
