//! Command-line entrypoint for the dbt MCP server.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::info;

use dbt_mcp::{DbtCliConfig, DbtMcpServer};

/// Defines the command-line interface of the dbt MCP server with clap.
#[derive(Parser, Debug)]
#[command(name = "dbt-mcp")]
#[command(version, about = "Serve dbt CLI commands over MCP on stdio.")]
struct DbtMcpCli {
    /// Path to the dbt executable.
    #[arg(long, env = "DBT_PATH", default_value = "dbt")]
    dbt_path: String,

    /// Path to the dbt project directory, absolute or relative.
    #[arg(long, env = "DBT_PROJECT_DIR", default_value = ".")]
    project_dir: String,

    /// Timeout in seconds for the list tool. 0 disables the timeout.
    #[arg(long, env = "DBT_CLI_TIMEOUT", default_value_t = 10)]
    cli_timeout: u64,
}

fn main() -> ExitCode {
    let cli = DbtMcpCli::parse();
    initialize_logging();

    let config = DbtCliConfig {
        dbt_path: cli.dbt_path,
        project_dir: cli.project_dir,
        list_timeout: (cli.cli_timeout > 0).then(|| Duration::from_secs(cli.cli_timeout)),
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = rt.block_on(async {
        info!("Serving dbt MCP on stdio (dbt: {})", config.dbt_path);
        DbtMcpServer::new(config).serve_stdio().await
    });

    if let Err(e) = result {
        eprintln!("MCP server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn initialize_logging() {
    // Stdout carries the MCP protocol, so logs go to stderr.
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .init();
}
