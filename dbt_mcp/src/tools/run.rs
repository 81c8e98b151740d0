//! Run tool implementation.

use rmcp::model::CallToolResult;
use rmcp::schemars;

use crate::command::CommandBuilder;
use crate::config::DbtCliConfig;
use crate::exec;

/// Parameters for the run tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct RunParams {
    /// dbt node selector limiting which models are run.
    pub selector: Option<String>,
}

/// Execute the run tool: materialize models in the warehouse.
pub async fn execute(config: &DbtCliConfig, params: &RunParams) -> CallToolResult {
    let spec = CommandBuilder::new(["run"])
        .selector(params.selector.as_deref())
        .selectable()
        .build();
    exec::run_command(config, spec).await
}
