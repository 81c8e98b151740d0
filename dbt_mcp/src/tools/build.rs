//! Build tool implementation.

use rmcp::model::CallToolResult;
use rmcp::schemars;

use crate::command::CommandBuilder;
use crate::config::DbtCliConfig;
use crate::exec;

/// Parameters for the build tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct BuildParams {
    /// dbt node selector limiting which resources are built
    /// (e.g. "my_model", "tag:nightly", "my_model+").
    pub selector: Option<String>,
}

/// Execute the build tool: run models, tests, snapshots and seeds in
/// dependency order.
pub async fn execute(config: &DbtCliConfig, params: &BuildParams) -> CallToolResult {
    let spec = CommandBuilder::new(["build"])
        .selector(params.selector.as_deref())
        .selectable()
        .build();
    exec::run_command(config, spec).await
}
