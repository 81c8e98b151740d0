//! List tool implementation.

use rmcp::model::CallToolResult;
use rmcp::schemars;

use crate::command::CommandBuilder;
use crate::config::DbtCliConfig;
use crate::exec;

/// Parameters for the list tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListParams {
    /// dbt node selector limiting which resources are listed.
    pub selector: Option<String>,
    /// Resource types to include (e.g. ["model"], ["seed", "snapshot"]).
    pub resource_type: Option<Vec<String>>,
}

/// Execute the list tool.
///
/// Listing a large project can be slow, so this is the one tool that runs
/// under the configured timeout.
pub async fn execute(config: &DbtCliConfig, params: &ListParams) -> CallToolResult {
    let spec = CommandBuilder::new(["list"])
        .selector(params.selector.as_deref())
        .resource_types(params.resource_type.as_deref())
        .timeout(config.list_timeout)
        .selectable()
        .build();
    exec::run_command(config, spec).await
}
