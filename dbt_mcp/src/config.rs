//! Configuration for invoking the dbt CLI.

use std::time::Duration;

/// Configuration consumed by the dbt MCP server.
///
/// Built once by the entrypoint and passed into the server by value; the
/// server never reads ambient state (environment, globals) itself.
#[derive(Debug, Clone)]
pub struct DbtCliConfig {
    /// Path to the dbt executable.
    pub dbt_path: String,
    /// dbt project directory, absolute or relative.
    pub project_dir: String,
    /// Timeout applied to `list` invocations. `None` disables it.
    pub list_timeout: Option<Duration>,
}
