//! MCP tool implementations for the dbt CLI.

pub mod build;
pub mod compile;
pub mod docs;
pub mod list;
pub mod parse;
pub mod run;
pub mod show;
pub mod version;

pub use build::BuildParams;
pub use compile::CompileParams;
pub use docs::DocsParams;
pub use list::ListParams;
pub use parse::ParseParams;
pub use run::RunParams;
pub use show::ShowParams;
pub use test::TestParams;
