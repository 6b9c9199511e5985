//! Tests for configuration assembly and precedence

use std::path::Path;

use selfheal::config::{
    Config, DEFAULT_HEALTH_URL, DEFAULT_INTERVAL_SECS, DEFAULT_RETRIES, FileConfig, Overrides,
};
use tempfile::TempDir;

fn file_config(content: &str) -> FileConfig {
    toml::from_str(content).expect("test TOML must parse")
}

#[test]
fn test_defaults_when_nothing_is_configured() {
    let config = Config::resolve(Path::new("."), Overrides::default(), FileConfig::default())
        .unwrap();

    assert_eq!(config.targets.len(), 1);
    assert_eq!(config.targets[0].url(), DEFAULT_HEALTH_URL);
    assert_eq!(config.retries, DEFAULT_RETRIES);
    assert!((config.interval_secs - DEFAULT_INTERVAL_SECS).abs() < f64::EPSILON);
    assert!(!config.force_push);
    assert_eq!(config.install_command[0], "npm");
}

#[test]
fn test_file_values_apply() {
    let file = file_config(
        r#"
        [health]
        urls = ["http://a/health", "http://b/health"]
        retries = 2
        interval_secs = 0.5

        [rollback]
        force_push = true

        [pipeline]
        install = ["make", "deps"]
        build = ["make"]
        "#,
    );

    let config = Config::resolve(Path::new("."), Overrides::default(), file).unwrap();

    assert_eq!(config.targets.len(), 2);
    assert_eq!(config.retries, 2);
    assert!(config.force_push);
    assert_eq!(config.install_command, vec!["make", "deps"]);
    assert_eq!(config.build_command, vec!["make"]);
}

#[test]
fn test_overrides_beat_file_values() {
    let file = file_config(
        r#"
        [health]
        urls = ["http://file/health"]
        retries = 9
        "#,
    );
    let overrides = Overrides {
        urls: vec!["http://cli/health".to_string()],
        retries: Some(1),
        ..Overrides::default()
    };

    let config = Config::resolve(Path::new("."), overrides, file).unwrap();

    assert_eq!(config.targets[0].url(), "http://cli/health");
    assert_eq!(config.retries, 1);
}

#[test]
fn test_override_urls_may_be_comma_separated() {
    let overrides = Overrides {
        urls: vec!["http://a/health, http://b/health".to_string()],
        ..Overrides::default()
    };

    let config = Config::resolve(Path::new("."), overrides, FileConfig::default()).unwrap();
    assert_eq!(config.targets.len(), 2);
}

#[test]
fn test_force_push_flag_cannot_be_unset_by_file() {
    let file = file_config("[rollback]\nforce_push = false\n");
    let overrides = Overrides {
        force_push: true,
        ..Overrides::default()
    };

    let config = Config::resolve(Path::new("."), overrides, file).unwrap();
    assert!(config.force_push);
}

#[test]
fn test_rejects_effectively_empty_url_list() {
    let overrides = Overrides {
        urls: vec![" , ".to_string()],
        ..Overrides::default()
    };

    assert!(Config::resolve(Path::new("."), overrides, FileConfig::default()).is_err());
}

#[test]
fn test_rejects_negative_interval() {
    let overrides = Overrides {
        interval_secs: Some(-1.0),
        ..Overrides::default()
    };

    assert!(Config::resolve(Path::new("."), overrides, FileConfig::default()).is_err());
}

#[test]
fn test_rejects_zero_probe_timeout() {
    let overrides = Overrides {
        probe_timeout_secs: Some(0.0),
        ..Overrides::default()
    };

    assert!(Config::resolve(Path::new("."), overrides, FileConfig::default()).is_err());
}

#[test]
fn test_rejects_empty_pipeline_command() {
    let file = file_config("[pipeline]\ninstall = []\n");
    assert!(Config::resolve(Path::new("."), Overrides::default(), file).is_err());
}

#[test]
fn test_file_load_missing_file_is_default() {
    let temp = TempDir::new().unwrap();
    let file = FileConfig::load(temp.path());
    assert!(file.health.urls.is_none());
    assert!(file.rollback.force_push.is_none());
}

#[test]
fn test_file_load_reads_selfheal_toml() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("selfheal.toml"), "[health]\nretries = 3\n").unwrap();

    let file = FileConfig::load(temp.path());
    assert_eq!(file.health.retries, Some(3));
}

#[test]
fn test_file_load_tolerates_malformed_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("selfheal.toml"), "not [valid toml").unwrap();

    let file = FileConfig::load(temp.path());
    assert!(file.health.retries.is_none());
}

#[test]
fn test_file_load_rejects_unknown_keys_as_malformed() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("selfheal.toml"), "[health]\nretires = 3\n").unwrap();

    // Typos surface as a warning and the file is ignored wholesale
    let file = FileConfig::load(temp.path());
    assert!(file.health.retries.is_none());
}

#[test]
fn test_durations() {
    let config = Config {
        interval_secs: 1.5,
        probe_timeout_secs: 0.25,
        ..Config::default()
    };
    assert_eq!(config.interval().as_millis(), 1500);
    assert_eq!(config.probe_timeout().as_millis(), 250);
}
