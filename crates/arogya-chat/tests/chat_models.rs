//! Integration tests for chat model discovery.
//!
//! These tests call real AWS APIs and require valid credentials in the
//! environment (e.g. `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`).
//!
//! Run with: `cargo test -p arogya-chat --test chat_models -- --ignored`

use arogya_chat::chat::list_chat_models;

async fn build_config() -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await
}

/// All model IDs must be inference profile IDs (prefixed with `us.`), not
/// bare foundation model IDs.
#[tokio::test]
#[ignore]
async fn list_chat_models_all_have_us_prefix() {
    let config = build_config().await;
    let models = list_chat_models(&config)
        .await
        .expect("list_chat_models should succeed");

    for m in &models {
        assert!(
            m.model_id.starts_with("us."),
            "model ID should start with 'us.' but got: {}",
            m.model_id
        );
    }
}

/// Discovery must return at least one Claude model on a provisioned account.
#[tokio::test]
#[ignore]
async fn list_chat_models_returns_claude_models() {
    let config = build_config().await;
    let models = list_chat_models(&config)
        .await
        .expect("list_chat_models should succeed");

    assert!(
        models.iter().any(|m| m.model_id.contains("anthropic.claude")),
        "expected Claude models, got: {:?}",
        models.iter().map(|m| &m.model_id).collect::<Vec<_>>()
    );
}
