//! Docs tool implementation.

use rmcp::model::CallToolResult;
use rmcp::schemars;

use crate::command::CommandBuilder;
use crate::config::DbtCliConfig;
use crate::exec;

/// Parameters for the docs tool.
/// This tool takes no parameters - it regenerates the project documentation.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DocsParams {}

/// Execute the docs tool: generate the documentation catalog.
pub async fn execute(config: &DbtCliConfig, _params: &DocsParams) -> CallToolResult {
    let spec = CommandBuilder::new(["docs", "generate"]).build();
    exec::run_command(config, spec).await
}
