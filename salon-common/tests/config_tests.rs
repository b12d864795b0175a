//! Configuration loading and root folder resolution
//!
//! Tests that touch SALON_* environment variables are marked #[serial]
//! so they never run in parallel with each other.

use salon_common::config::{
    default_root_folder, resolve_root_folder, ConfigSource, TomlConfig, CONFIG_FILE_ENV,
    ROOT_FOLDER_ENV,
};
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_full_config_parses() {
    let config = TomlConfig::parse(
        r#"
        root_folder = "/srv/salon"
        bind_addr = "0.0.0.0"
        port = 9000

        [logging]
        level = "debug"

        [report]
        output_path = "/srv/salon/out.json"

        [prices]
        "Corte de cabelo" = 40.0
        "Escova" = 45.5
        "#,
    )
    .expect("Config should parse");

    assert_eq!(config.root_folder, Some(PathBuf::from("/srv/salon")));
    assert_eq!(config.listen_addr(), "0.0.0.0:9000");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.report.output_path,
        Some(PathBuf::from("/srv/salon/out.json"))
    );
    assert_eq!(config.prices.get("Escova"), Some(&45.5));
}

#[test]
fn test_invalid_toml_is_rejected() {
    assert!(TomlConfig::parse("port = \"not a number\"").is_err());
}

#[test]
#[serial]
fn test_resolver_with_no_overrides_uses_default() {
    env::remove_var(ROOT_FOLDER_ENV);

    let resolved = resolve_root_folder(None, &TomlConfig::default());
    assert_eq!(resolved, default_root_folder());
}

#[test]
#[serial]
fn test_resolver_env_beats_toml() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/salon-from-env");

    let config = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/salon-from-toml")),
        ..TomlConfig::default()
    };
    let resolved = resolve_root_folder(None, &config);
    assert_eq!(resolved, PathBuf::from("/tmp/salon-from-env"));

    env::remove_var(ROOT_FOLDER_ENV);
    let resolved = resolve_root_folder(None, &config);
    assert_eq!(resolved, PathBuf::from("/tmp/salon-from-toml"));
}

#[test]
#[serial]
fn test_resolver_cli_beats_env() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/salon-from-env");

    let resolved = resolve_root_folder(Some(Path::new("/tmp/salon-from-cli")), &TomlConfig::default());
    assert_eq!(resolved, PathBuf::from("/tmp/salon-from-cli"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_load_explicit_file() {
    env::remove_var(CONFIG_FILE_ENV);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 8123\n").unwrap();

    let (config, source) = TomlConfig::load_or_default(Some(&path)).unwrap();
    assert_eq!(config.port, 8123);
    assert_eq!(source, ConfigSource::File(path));
}

#[test]
#[serial]
fn test_load_from_env_var() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "bind_addr = \"0.0.0.0\"\n").unwrap();
    env::set_var(CONFIG_FILE_ENV, &path);

    let (config, source) = TomlConfig::load_or_default(None).unwrap();
    assert_eq!(config.bind_addr, "0.0.0.0");
    assert_eq!(source, ConfigSource::File(path));

    env::remove_var(CONFIG_FILE_ENV);
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    env::remove_var(CONFIG_FILE_ENV);
    let dir = TempDir::new().unwrap();

    let result = TomlConfig::load_or_default(Some(&dir.path().join("absent.toml")));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_no_config_file_reports_defaults_source() {
    env::remove_var(CONFIG_FILE_ENV);
    let user_file_exists = salon_common::config::user_config_path()
        .map(|p| p.exists())
        .unwrap_or(false);
    if user_file_exists {
        return;
    }

    let (config, source) = TomlConfig::load_or_default(None).unwrap();
    assert_eq!(source, ConfigSource::Defaults);
    assert_eq!(config.port, 8000);
    assert_eq!(config.bind_addr, "127.0.0.1");
}
