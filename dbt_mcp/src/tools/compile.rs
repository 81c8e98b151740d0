//! Compile tool implementation.

use rmcp::model::{CallToolResult, Content};
use rmcp::schemars;

use crate::command::CommandBuilder;
use crate::config::DbtCliConfig;
use crate::exec;

/// Parameters for the compile tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CompileParams {
    /// Raw SQL to render via `--inline`.
    pub sql_query: Option<String>,
    /// dbt node selector to compile via `--select`.
    pub selector: Option<String>,
}

/// Execute the compile tool: render executable SQL.
///
/// At most one of `sql_query` and `selector` may be provided. If both are
/// present, a validation error is returned and no process is spawned. With
/// neither (or an empty selector), the entire project is compiled.
pub async fn execute(config: &DbtCliConfig, params: &CompileParams) -> CallToolResult {
    if params.sql_query.is_some() && params.selector.is_some() {
        return CallToolResult::error(vec![Content::text(
            "You cannot provide both `sql_query` and `selector` when calling the `compile` tool.",
        )]);
    }

    let mut builder = CommandBuilder::new(["compile"]);
    if let Some(sql) = params.sql_query.as_deref() {
        builder = builder.inline_sql(Some(sql));
    } else if let Some(selector) = params.selector.as_deref() {
        builder = builder.selector(Some(selector)).selectable();
    }

    exec::run_command(config, builder.build()).await
}
