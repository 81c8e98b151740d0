//! Show tool implementation.

use rmcp::model::{CallToolResult, Content};
use rmcp::schemars;

use crate::command::CommandBuilder;
use crate::config::DbtCliConfig;
use crate::exec;

/// Parameters for the show tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ShowParams {
    /// Raw SQL to preview via `--inline`.
    pub sql_query: Option<String>,
    /// dbt node selector to preview via `--select`.
    pub selector: Option<String>,
    /// Row limit. Ignored when the SQL already contains a LIMIT clause:
    /// `--limit -1` is passed instead so dbt does not add a second limit.
    pub limit: Option<i64>,
}

/// Execute the show tool: preview query or model results.
///
/// Exactly one of `sql_query` or `selector` must be supplied. If both are
/// provided (or neither), a validation error is returned and no process is
/// spawned. Output is always requested as JSON.
pub async fn execute(config: &DbtCliConfig, params: &ShowParams) -> CallToolResult {
    if params.sql_query.is_some() == params.selector.is_some() {
        return CallToolResult::error(vec![Content::text(
            "You must provide either `sql_query` or `selector` (but not both) \
             when calling the `show` tool.",
        )]);
    }

    let spec = CommandBuilder::new(["show", "--favor-state"])
        .selector(params.selector.as_deref())
        .inline_sql(params.sql_query.as_deref())
        .row_limit(effective_limit(params.sql_query.as_deref(), params.limit))
        .output_json()
        .build();
    exec::run_command(config, spec).await
}

/// Reconcile the explicit row limit against a LIMIT clause embedded in the
/// SQL. A user-written LIMIT wins: `-1` tells dbt not to add another one.
fn effective_limit(sql_query: Option<&str>, limit: Option<i64>) -> Option<i64> {
    match sql_query {
        Some(sql) if sql.to_lowercase().contains("limit") => Some(-1),
        _ => limit,
    }
}
