//! Config loading from a real file on disk.

use pseudoterm::config::{load_config, load_config_with_source, ConfigSource};
use pseudoterm::error::ConfigError;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn write_temp_config(name: &str, text: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("pseudoterm-test-{name}-{nanos}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("pseudoterm.toml");
    fs::write(&path, text).expect("write config");
    path
}

#[test]
fn explicit_file_is_loaded_and_reported() {
    let path = write_temp_config(
        "explicit",
        "[display]\nprompt = \"guest$ \"\n\n[effects]\nwipe_step_ms = 20\n",
    );
    let loaded =
        load_config_with_source(Some(path.to_string_lossy().as_ref())).expect("load config");
    assert_eq!(loaded.config.display.prompt, "guest$ ");
    assert_eq!(loaded.config.effects.wipe_step_ms, 20);
    assert_eq!(loaded.config.effects.matrix_tick_ms, 33);
    assert_eq!(loaded.source, ConfigSource::Explicit(path.clone()));
    let _ = fs::remove_dir_all(path.parent().expect("parent"));
}

#[test]
fn invalid_values_are_rejected() {
    let path = write_temp_config("invalid", "[effects]\nmatrix_tick_ms = 0\n");
    let err = load_config(Some(path.to_string_lossy().as_ref())).expect_err("zero tick");
    assert!(matches!(err, ConfigError::Invalid(_)), "got {err}");
    let _ = fs::remove_dir_all(path.parent().expect("parent"));
}

#[test]
fn missing_explicit_file_is_an_io_error() {
    let err = load_config(Some("/nonexistent/pseudoterm/none.toml")).expect_err("missing");
    assert!(matches!(err, ConfigError::Io(_)), "got {err}");
}
