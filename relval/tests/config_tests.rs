use chrono::Utc;

use relval::{AnalysisConfig, ConfigLoader, Interval};

#[test]
fn json_config_fills_missing_fields_with_defaults() {
    let path = temp_path("minimal", "json");
    std::fs::write(&path, r#"{"symbol_a": "AAA", "symbol_b": "BBB"}"#).expect("write config");

    let config = ConfigLoader::load(&path).expect("load should succeed");
    let defaults = AnalysisConfig::default();
    assert_eq!(config.symbol_a, "AAA");
    assert_eq!(config.symbol_b, "BBB");
    assert_eq!(config.interval, defaults.interval);
    assert_eq!(config.rolling_window, defaults.rolling_window);
    assert_eq!(config.z_threshold, defaults.z_threshold);

    let _ = std::fs::remove_file(path);
}

#[test]
fn yaml_config_loads_all_fields() {
    let path = temp_path("full", "yaml");
    std::fs::write(
        &path,
        "interval: 5m\nrolling_window: 30\nz_threshold: 1.5\nsymbol_a: SYM1\nsymbol_b: SYM2\n",
    )
    .expect("write config");

    let config = ConfigLoader::load(&path).expect("load should succeed");
    assert_eq!(config.interval, Interval::M5);
    assert_eq!(config.rolling_window, 30);
    assert_eq!(config.z_threshold, 1.5);

    let _ = std::fs::remove_file(path);
}

#[test]
fn invalid_interval_is_rejected() {
    let path = temp_path("bad_interval", "json");
    std::fs::write(
        &path,
        r#"{"interval": "2h", "symbol_a": "A", "symbol_b": "B"}"#,
    )
    .expect("write config");

    assert!(ConfigLoader::load(&path).is_err());
    let _ = std::fs::remove_file(path);
}

#[test]
fn non_positive_parameters_are_rejected() {
    let path = temp_path("bad_window", "json");
    std::fs::write(
        &path,
        r#"{"rolling_window": 0, "symbol_a": "A", "symbol_b": "B"}"#,
    )
    .expect("write config");
    assert!(ConfigLoader::load(&path).is_err());
    let _ = std::fs::remove_file(&path);

    let path = temp_path("bad_threshold", "json");
    std::fs::write(
        &path,
        r#"{"z_threshold": -1.0, "symbol_a": "A", "symbol_b": "B"}"#,
    )
    .expect("write config");
    assert!(ConfigLoader::load(&path).is_err());
    let _ = std::fs::remove_file(path);
}

#[test]
fn unsupported_extension_is_rejected() {
    let path = temp_path("wrong", "toml");
    std::fs::write(&path, "symbol_a = 'A'\n").expect("write config");
    assert!(ConfigLoader::load(&path).is_err());
    let _ = std::fs::remove_file(path);
}

fn temp_path(name: &str, ext: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "relval_config_{}_{}_{}.{}",
        name,
        std::process::id(),
        Utc::now().timestamp_nanos_opt().unwrap_or_default(),
        ext
    ))
}
