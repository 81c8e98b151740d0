//! Server version tool implementation.

use rmcp::model::{CallToolResult, Content};

/// Execute the version tool. Reports the server's own version, not dbt's.
pub fn execute() -> CallToolResult {
    CallToolResult::success(vec![Content::text(env!("CARGO_PKG_VERSION"))])
}
