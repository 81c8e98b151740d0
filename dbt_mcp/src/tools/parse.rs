//! Parse tool implementation.

use rmcp::model::CallToolResult;
use rmcp::schemars;

use crate::command::CommandBuilder;
use crate::config::DbtCliConfig;
use crate::exec;

/// Parameters for the parse tool.
/// This tool takes no parameters - it validates the whole project.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ParseParams {}

/// Execute the parse tool: validate project files and update the manifest.
pub async fn execute(config: &DbtCliConfig, _params: &ParseParams) -> CallToolResult {
    let spec = CommandBuilder::new(["parse"]).build();
    exec::run_command(config, spec).await
}
