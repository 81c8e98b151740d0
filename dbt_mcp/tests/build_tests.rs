mod helpers;

use dbt_mcp::tools::build::{BuildParams, execute};
use helpers::{config_for, echo_args_dbt, get_args, is_success};

#[tokio::test]
async fn test_build_without_selector() {
    let (_dir, dbt) = echo_args_dbt();
    let config = config_for(dbt);

    let result = execute(&config, &BuildParams { selector: None }).await;

    assert!(is_success(&result));
    assert_eq!(get_args(&result), ["build", "--quiet"]);
}

#[tokio::test]
async fn test_build_with_selector() {
    let (_dir, dbt) = echo_args_dbt();
    let config = config_for(dbt);

    let params = BuildParams {
        selector: Some("my_model".to_string()),
    };
    let result = execute(&config, &params).await;

    assert!(is_success(&result));
    assert_eq!(
        get_args(&result),
        ["build", "--quiet", "--select", "my_model"]
    );
}

#[tokio::test]
async fn test_build_selector_splits_into_tokens() {
    let (_dir, dbt) = echo_args_dbt();
    let config = config_for(dbt);

    let params = BuildParams {
        selector: Some("tag:nightly my_model+".to_string()),
    };
    let result = execute(&config, &params).await;

    assert_eq!(
        get_args(&result),
        ["build", "--quiet", "--select", "tag:nightly", "my_model+"]
    );
}
