// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    let lines: Vec<String> = config
        .format_options()
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    git.executable          = git
    git.remote              = origin
    global.file_log_level   = 5
    global.json_log         = false
    global.log_file         =
    global.output_log_level = 3
    repository.path         =
    script.benign_patterns  =
    watcher.interval_ms     = 3000
    ");
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
output_log_level = 4
log_file = "logs/gitscope.log"

[git]
remote = "upstream"

[watcher]
interval_ms = 750

[repository]
path = "/work/project"

[script]
benign_patterns = ["Everything up-to-date"]
"#;

    let config = Config::parse(toml).expect("valid config");
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file,
        Some(PathBuf::from("logs/gitscope.log"))
    );
    assert_eq!(config.git.remote, "upstream");
    assert_eq!(config.git.executable, PathBuf::from("git"));
    assert_eq!(config.watcher.interval(), Duration::from_millis(750));
    assert_eq!(config.repository.path, Some(PathBuf::from("/work/project")));
    assert_eq!(config.script.benign_patterns, ["Everything up-to-date"]);
}

#[test]
fn test_zero_interval_rejected() {
    let err = Config::parse("[watcher]\ninterval_ms = 0").expect_err("zero interval");
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'interval_ms' in section '[watcher]': interval must be greater than zero");
}

#[test]
fn test_empty_remote_rejected() {
    let err = Config::parse("[git]\nremote = \"  \"").expect_err("blank remote");
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'remote' in section '[git]': remote name cannot be empty");
}

#[test]
fn test_out_of_range_log_level_rejected() {
    assert!(Config::parse("[global]\noutput_log_level = 9").is_err());
}

#[test]
fn test_deny_unknown_fields() {
    assert!(Config::parse("[git]\nbinary = \"git\"").is_err());
    assert!(Config::parse("[unknown]\nkey = 1").is_err());
}

#[test]
fn test_config_loader_tracks_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[git]\nremote = \"a\"")
        .add_toml_file_optional("/nonexistent/optional.toml")
        .add_toml_str("[git]\nremote = \"b\"");

    assert_eq!(loader.loaded_files().len(), 2);
    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @r"
    1. [string] <string>
    2. [string] <string>
    ");
}

#[test]
fn test_config_loader_add_toml_file_success() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "[git]\nexecutable = \"/opt/git/bin/git\"").expect("failed to write");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .build()
        .expect("build should succeed");

    assert_eq!(config.git.executable, PathBuf::from("/opt/git/bin/git"));
    assert_eq!(
        Config::from_file(file.path()).ok().map(|c| c.git.executable),
        Some(PathBuf::from("/opt/git/bin/git"))
    );
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/path/to/gitscope.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_config_loader_invalid_toml() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "this is not valid toml {{{{{{").expect("failed to write");

    assert!(ConfigLoader::new().add_toml_file(file.path()).build().is_err());
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: variable names are unique to this test
    unsafe {
        std::env::set_var("GSENVTEST_GIT__REMOTE", "upstream");
        std::env::set_var("GSENVTEST_WATCHER__INTERVAL_MS", "500");
        std::env::set_var("GSENVTEST_SCRIPT__BENIGN_PATTERNS", "up-to-date,skipped");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[git]\nremote = \"origin\"")
        .with_env_prefix("GSENVTEST")
        .build()
        .expect("build should succeed");

    assert_eq!(config.git.remote, "upstream");
    assert_eq!(config.watcher.interval_ms, 500);
    assert_eq!(config.script.benign_patterns, ["up-to-date", "skipped"]);

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("GSENVTEST_GIT__REMOTE");
        std::env::remove_var("GSENVTEST_WATCHER__INTERVAL_MS");
        std::env::remove_var("GSENVTEST_SCRIPT__BENIGN_PATTERNS");
    }
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[watcher]\ninterval_ms = 1000")
        .set("watcher.interval_ms", 250)
        .expect("set should succeed")
        .build()
        .expect("build should succeed");

    assert_eq!(config.watcher.interval_ms, 250);
}
