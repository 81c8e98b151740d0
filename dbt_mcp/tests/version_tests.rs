mod helpers;

use dbt_mcp::tools::version::execute;
use helpers::{get_text, is_success};

#[test]
fn test_version_reports_crate_version() {
    let result = execute();

    assert!(is_success(&result));
    assert_eq!(get_text(&result), env!("CARGO_PKG_VERSION"));
}
