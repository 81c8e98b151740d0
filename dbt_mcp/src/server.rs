//! Core MCP server implementation for the dbt CLI.

use std::sync::Arc;

use log::debug;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt, handler::server::wrapper::Parameters,
    model::*, tool, tool_handler, tool_router, transport::stdio,
};

use crate::config::DbtCliConfig;
use crate::tools;
use crate::tools::{
    BuildParams, CompileParams, DocsParams, ListParams, ParseParams, RunParams, ShowParams,
    TestParams,
};

/// Error type for MCP server operations.
#[derive(Debug)]
pub enum ServerError {
    /// MCP protocol error
    Mcp(String),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Mcp(msg) => write!(f, "MCP error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

/// MCP server exposing dbt CLI commands as tools.
///
/// Every tool resolves to a single plain-text result: the command's merged
/// output ("OK" when empty), a timeout message, a validation error, or a
/// spawn failure. Invocations are independent; there is no shared mutable
/// state, so the configuration is held behind a plain `Arc`.
#[derive(Clone)]
pub struct DbtMcpServer {
    config: Arc<DbtCliConfig>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<DbtMcpServer>,
}

#[tool_router]
impl DbtMcpServer {
    /// Create a new MCP server for the given dbt configuration.
    pub fn new(config: DbtCliConfig) -> Self {
        debug!(
            "Creating MCP server for dbt at {} (project dir: {})",
            config.dbt_path, config.project_dir
        );
        Self {
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Run models, data tests, snapshots and seeds in dependency (DAG) order. \
        Pass a selector to build a subset of the project, e.g. 'my_model' or 'tag:nightly'."
    )]
    async fn build(
        &self,
        Parameters(params): Parameters<BuildParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: build, selector={:?}", params.selector);
        Ok(tools::build::execute(&self.config, &params).await)
    }

    #[tool(
        description = "Render executable SQL without running it against the warehouse. \
        Pass either raw SQL via 'sql_query' or a node selector via 'selector' (not both). \
        With neither, the entire project is compiled."
    )]
    async fn compile(
        &self,
        Parameters(params): Parameters<CompileParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: compile, sql_query={:?}, selector={:?}",
            params.sql_query, params.selector
        );
        Ok(tools::compile::execute(&self.config, &params).await)
    }

    #[tool(description = "Generate the documentation catalog for the project.")]
    async fn docs(
        &self,
        Parameters(params): Parameters<DocsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: docs");
        Ok(tools::docs::execute(&self.config, &params).await)
    }

    #[tool(
        description = "List resources in the project. Optionally filter with a node selector \
        and/or resource types (e.g. 'model', 'seed', 'snapshot', 'test')."
    )]
    async fn list(
        &self,
        Parameters(params): Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: list, selector={:?}, resource_type={:?}",
            params.selector, params.resource_type
        );
        Ok(tools::list::execute(&self.config, &params).await)
    }

    #[tool(description = "Parse and validate project files, updating the manifest.")]
    async fn parse(
        &self,
        Parameters(params): Parameters<ParseParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: parse");
        Ok(tools::parse::execute(&self.config, &params).await)
    }

    #[tool(
        description = "Materialize models in the warehouse. \
        Pass a selector to run a subset of the project."
    )]
    async fn run(
        &self,
        Parameters(params): Parameters<RunParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: run, selector={:?}", params.selector);
        Ok(tools::run::execute(&self.config, &params).await)
    }

    #[tool(
        description = "Run data and unit tests. Pass a selector to test a subset of the project."
    )]
    async fn test(
        &self,
        Parameters(params): Parameters<TestParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: test, selector={:?}", params.selector);
        Ok(tools::test::execute(&self.config, &params).await)
    }

    #[tool(
        description = "Preview results as JSON. Provide exactly one of 'sql_query' (raw SQL) \
        or 'selector' (node selector). An optional 'limit' caps the row count; if the SQL \
        already contains a LIMIT clause it is honored as-is."
    )]
    async fn show(
        &self,
        Parameters(params): Parameters<ShowParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: show, sql_query={:?}, selector={:?}, limit={:?}",
            params.sql_query, params.selector, params.limit
        );
        Ok(tools::show::execute(&self.config, &params).await)
    }

    #[tool(description = "Get the version of this dbt MCP server.")]
    async fn get_dbt_mcp_server_version(&self) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_dbt_mcp_server_version");
        Ok(tools::version::execute())
    }

    /// Serve MCP over stdio (stdin/stdout).
    ///
    /// This method blocks until the connection is closed.
    pub async fn serve_stdio(self) -> Result<(), ServerError> {
        debug!("Starting MCP server on stdio");
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Mcp(format!("Failed to start server: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Mcp(format!("Server error: {}", e)))?;
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for DbtMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "dbt MCP server. Use tools to build, run, test, compile and preview models \
                 in the dbt project. Every tool returns the dbt command's text output."
                    .into(),
            ),
        }
    }
}
