//! Tests for configuration loading and validation

use std::io::Write;

use sysprobe_domain::Error;
use sysprobe_infrastructure::config::{
    AppConfig, BenchmarkConfig, ConfigBuilder, ConfigLoader, ShellConfig, Theme,
};
use tempfile::{NamedTempFile, TempDir};

/// Env prefix no test environment sets, so only defaults and files apply
const ISOLATED_PREFIX: &str = "SYSPROBE_TEST_UNSET";

fn loader_for(file: &NamedTempFile) -> ConfigLoader {
    ConfigLoader::new()
        .with_env_prefix(ISOLATED_PREFIX)
        .with_config_path(file.path())
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn assert_config_error(result: Result<AppConfig, Error>, needle: &str) {
    match result {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.contains(needle), "unexpected message: {message}");
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.benchmark.batch_size, 200);
    assert_eq!(config.benchmark.min_file_size, 1024);
    assert_eq!(config.benchmark.max_file_size, 4096);
    assert_eq!(config.benchmark.scratch_dir_name, ".copy_test");
    assert_eq!(config.shell.mount_target, "#app");
    assert_eq!(config.shell.theme, Theme::Dark);
    assert!(config.system.sample_cpu);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = ConfigLoader::new()
        .with_env_prefix(ISOLATED_PREFIX)
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .expect("defaults load");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_partial_file_overrides_defaults() {
    let file = write_config(
        r#"
[logging]
level = "debug"

[benchmark]
batch_size = 16

[shell]
theme = "light"
"#,
    );

    let config = loader_for(&file).load().expect("load");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.benchmark.batch_size, 16);
    assert_eq!(config.benchmark.max_file_size, 4096);
    assert_eq!(config.shell.theme, Theme::Light);
    assert_eq!(config.shell.mount_target, "#app");
}

#[test]
fn test_invalid_log_level_rejected() {
    let file = write_config("[logging]\nlevel = \"loud\"\n");
    assert_config_error(loader_for(&file).load(), "Invalid log level");
}

#[test]
fn test_zero_batch_size_rejected() {
    let file = write_config("[benchmark]\nbatch_size = 0\n");
    assert_config_error(loader_for(&file).load(), "batch size");
}

#[test]
fn test_empty_file_size_range_rejected() {
    let file = write_config("[benchmark]\nmin_file_size = 4096\nmax_file_size = 1024\n");
    assert_config_error(loader_for(&file).load(), "file size range");
}

#[test]
fn test_scratch_name_with_separator_rejected() {
    let file = write_config("[benchmark]\nscratch_dir_name = \"../escape\"\n");
    assert_config_error(loader_for(&file).load(), "single file name");
}

#[test]
fn test_mount_target_requires_hash() {
    let file = write_config("[shell]\nmount_target = \"app\"\n");
    assert_config_error(loader_for(&file).load(), "Mount target");
}

#[test]
fn test_malformed_toml_rejected() {
    let file = write_config("[benchmark\nbatch_size = ");
    assert_config_error(loader_for(&file).load(), "Failed to extract configuration");
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("sysprobe.toml");
    let config = ConfigBuilder::new()
        .with_benchmark(BenchmarkConfig {
            batch_size: 32,
            ..BenchmarkConfig::default()
        })
        .with_shell(ShellConfig {
            theme: Theme::Light,
            ..ShellConfig::default()
        })
        .build()
        .expect("valid config");

    let loader = ConfigLoader::new()
        .with_env_prefix(ISOLATED_PREFIX)
        .with_config_path(&path);
    loader.save_to_file(&config, &path).expect("save");

    assert_eq!(loader.load().expect("reload"), config);
}

#[test]
fn test_builder_validates() {
    let result = ConfigBuilder::new()
        .with_shell(ShellConfig {
            start_route: "introduction".to_string(),
            ..ShellConfig::default()
        })
        .build();
    assert_config_error(result, "Start route");
}
