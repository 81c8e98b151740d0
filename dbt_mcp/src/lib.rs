//! MCP server for the dbt CLI.
//!
//! This crate provides an MCP (Model Context Protocol) server that exposes
//! dbt CLI commands to AI assistants like Claude. Each tool builds a dbt
//! invocation, runs it as a child process, and returns the output as plain
//! text.

pub mod command;
pub mod config;
pub mod exec;
mod server;
pub mod tools;

pub use config::DbtCliConfig;
pub use server::DbtMcpServer;
