//! Shared test helpers for dbt_mcp tests.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::time::Duration;

use dbt_mcp::DbtCliConfig;
use rmcp::model::{CallToolResult, RawContent};
use tempfile::TempDir;

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// The argument vector a fake dbt received, one argument per output line.
pub fn get_args(result: &CallToolResult) -> Vec<String> {
    get_text(result).lines().map(str::to_string).collect()
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

/// Write an executable shell script standing in for dbt.
///
/// Returns the TempDir (must be kept alive) and the script path.
pub fn write_script(contents: &str) -> (TempDir, String) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("dbt");
    fs::write(&path, contents).expect("Failed to write script");

    let mut perms = fs::metadata(&path)
        .expect("Failed to stat script")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to chmod script");

    (dir, path.to_string_lossy().into_owned())
}

/// A fake dbt that prints each argument it received on its own line.
pub fn echo_args_dbt() -> (TempDir, String) {
    write_script("#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\"; done\n")
}

/// A fake dbt that produces no output at all.
pub fn silent_dbt() -> (TempDir, String) {
    write_script("#!/bin/sh\nexit 0\n")
}

/// A fake dbt that never finishes within test timeouts.
pub fn slow_dbt() -> (TempDir, String) {
    write_script("#!/bin/sh\nsleep 30\n")
}

/// Config pointing at the given fake dbt, with a relative project dir.
pub fn config_for(dbt_path: String) -> DbtCliConfig {
    DbtCliConfig {
        dbt_path,
        project_dir: ".".to_string(),
        list_timeout: Some(Duration::from_secs(10)),
    }
}
