//! Spawning the dbt process and classifying its outcome.
//!
//! Every invocation resolves to exactly one [`ExecutionOutcome`], which is
//! rendered to plain text for the caller. Nothing in this module propagates
//! an error past the tool boundary: spawn failures, timeouts, and empty
//! output all become well-defined strings.

use std::path::Path;
use std::process::Stdio;

use log::{debug, warn};
use rmcp::model::{CallToolResult, Content};
use tokio::process::Command;
use tokio::time;

use crate::command::CommandSpec;
use crate::config::DbtCliConfig;

/// Fixed prefix of every timeout message.
pub const TIMEOUT_MESSAGE: &str = "Timeout: dbt command took too long to complete.";

/// Appended to the timeout message when the operation supports a selector.
pub const SELECTOR_HINT: &str = " Try using a specific selector to narrow down the results.";

/// Outcome of one dbt invocation.
#[derive(Debug)]
pub enum ExecutionOutcome {
    /// The process ran to completion. Holds the merged stdout/stderr text;
    /// exit status is not inspected.
    Completed(String),
    /// The process exceeded its wall-clock bound and was killed.
    TimedOut {
        /// Whether the operation supports narrowing with a selector.
        selectable: bool,
    },
    /// The process could not be spawned or its output could not be read.
    Failed(String),
}

impl ExecutionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Render the outcome as the single text channel callers receive.
    ///
    /// Empty output becomes `"OK"` so callers always get non-empty
    /// confirmation text.
    pub fn into_text(self) -> String {
        match self {
            Self::Completed(output) if output.is_empty() => "OK".to_string(),
            Self::Completed(output) => output,
            Self::TimedOut { selectable: true } => format!("{TIMEOUT_MESSAGE}{SELECTOR_HINT}"),
            Self::TimedOut { selectable: false } => TIMEOUT_MESSAGE.to_string(),
            Self::Failed(message) => message,
        }
    }
}

/// Run the dbt executable with the given spec and classify the result.
pub async fn execute(config: &DbtCliConfig, spec: &CommandSpec) -> ExecutionOutcome {
    debug!("Running dbt with args: {:?}", spec.args);

    let mut command = Command::new(&config.dbt_path);
    command
        .args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    // Only change the working directory for an absolute project path. A
    // relative DBT_PROJECT_DIR is already applied by dbt Core and Fusion,
    // and applying it here as well would resolve it twice.
    if Path::new(&config.project_dir).is_absolute() {
        command.current_dir(&config.project_dir);
    }

    let output = command.output();
    let result = match spec.timeout {
        Some(limit) => match time::timeout(limit, output).await {
            Ok(result) => result,
            Err(_) => {
                // Dropping the output future kills the child (kill_on_drop).
                warn!("dbt command timed out after {:?}", limit);
                return ExecutionOutcome::TimedOut {
                    selectable: spec.selectable,
                };
            }
        },
        None => output.await,
    };

    match result {
        Ok(output) => {
            // Merge stderr into stdout: callers get one text channel.
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            ExecutionOutcome::Completed(text)
        }
        Err(err) => ExecutionOutcome::Failed(err.to_string()),
    }
}

/// Run a spec and wrap the rendered text as an MCP tool result.
///
/// `Completed` maps to a success result; timeouts and spawn failures map to
/// an error result. Both carry plain text only.
pub async fn run_command(config: &DbtCliConfig, spec: CommandSpec) -> CallToolResult {
    let outcome = execute(config, &spec).await;
    let is_completed = outcome.is_completed();
    let text = outcome.into_text();

    if is_completed {
        CallToolResult::success(vec![Content::text(text)])
    } else {
        CallToolResult::error(vec![Content::text(text)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_output_renders_as_ok() {
        assert_eq!(ExecutionOutcome::Completed(String::new()).into_text(), "OK");
    }

    #[test]
    fn non_empty_output_passes_through() {
        let outcome = ExecutionOutcome::Completed("1 of 1 OK\n".to_string());
        assert_eq!(outcome.into_text(), "1 of 1 OK\n");
    }

    #[test]
    fn timeout_message_includes_hint_when_selectable() {
        let text = ExecutionOutcome::TimedOut { selectable: true }.into_text();
        assert!(text.starts_with(TIMEOUT_MESSAGE));
        assert!(text.ends_with(SELECTOR_HINT));
    }

    #[test]
    fn timeout_message_omits_hint_when_not_selectable() {
        let text = ExecutionOutcome::TimedOut { selectable: false }.into_text();
        assert_eq!(text, TIMEOUT_MESSAGE);
    }

    #[test]
    fn failure_renders_its_message() {
        let outcome = ExecutionOutcome::Failed("No such file or directory".to_string());
        assert_eq!(outcome.into_text(), "No such file or directory");
    }
}
