/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use srtblocks::app_config::{Config, LogLevel};
use srtblocks::timecode::DecimalTimecode;

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.block_length, "00:00:30,000");
    assert_eq!(config.output_dir, None);
    assert_eq!(config.output_suffix, "merged");
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.block_length().unwrap(), DecimalTimecode::from_seconds(30));
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.block_length = "30 seconds".to_string();
    assert!(config.validate().is_err());
    config.block_length = "00:01:00,000".to_string();
    assert!(config.validate().is_ok());

    config.output_suffix = "  ".to_string();
    assert!(config.validate().is_err());
    config.output_suffix = "blocks".to_string();

    config.output_dir = Some(String::new());
    assert!(config.validate().is_err());
    config.output_dir = Some("out".to_string());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{ "block_length": "00:00:45,000", "log_level": "debug" }"#)?;
    assert_eq!(config.block_length()?, DecimalTimecode::from_seconds(45));
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.output_suffix, "merged");
    Ok(())
}

#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;
    assert_eq!(config, Config::default());
    assert!(path.exists());

    // Second load reads the file written above
    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded, config);
    Ok(())
}

#[test]
fn test_load_or_create_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;
    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

#[test]
fn test_log_level_toLevelFilter_shouldMapEveryLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
