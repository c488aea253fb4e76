//! 配置系统功能测试

use gateway_lib::config::{create_default_config, load_config, GatewayConfig};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_default_config_roundtrip() {
    let config = create_default_config();

    let toml_content = toml::to_string_pretty(&config).unwrap();
    let parsed: GatewayConfig = toml::from_str(&toml_content).unwrap();

    assert_eq!(config, parsed);
}

#[test]
fn test_load_config_from_file_with_partial_sections() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[node]
host = "localhost"
password = "dev-password"

[autocomplete]
cache_ttl_ms = 5000
"#
    )
    .unwrap();

    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(config.node.host, "localhost");
    assert_eq!(config.node.password, "dev-password");
    // 未给出的字段取默认值
    assert_eq!(config.node.port, 2333);
    assert_eq!(config.autocomplete.cache_ttl_ms, 5000);
    assert_eq!(config.autocomplete.max_cache_entries, 100);
    assert_eq!(config.autocomplete.deadline_ms, 2500);
    assert!(config.health.enabled);
}

#[test]
fn test_missing_required_fields_reported_together() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[health]\nenabled = false").unwrap();

    let err = load_config(Some(file.path())).unwrap_err().to_string();
    assert!(err.contains("node.host"));
    assert!(err.contains("node.password"));
}

#[test]
fn test_engine_config_conversion() {
    let config = create_default_config();
    let engine = config.autocomplete.engine_config();

    assert_eq!(engine.cache_ttl, Duration::from_secs(30));
    assert_eq!(engine.deadline, Duration::from_millis(2500));
    assert_eq!(engine.sweep_interval, Duration::from_secs(60));
    assert_eq!(engine.max_cache_entries, 100);
}
