//! 翻译客户端集成测试

use std::sync::Arc;

use serde_json::json;

use message_relay::translation::{
    ClientConfig, HttpTranslationEngine, TranslationClient, TranslationEngine,
};

mod common;

use common::{unreachable_url, EngineBehavior, StubEngine};

/// 固定配置的客户端，不受 `RELAY_*` 环境变量影响
fn french_client(engine: Arc<dyn TranslationEngine>) -> TranslationClient {
    let config = ClientConfig {
        default_language: "french".to_string(),
        cache_capacity: 256,
    };
    TranslationClient::with_config(engine, config)
}

#[tokio::test]
async fn test_whitespace_input_skips_remote_call() {
    let engine = StubEngine::spawn(EngineBehavior::Prefix("fr:")).await;
    let mut client = french_client(engine.engine());

    for input in ["", " ", "\t\n", "   \r\n  "] {
        assert_eq!(client.process_text(input).await, "");
    }

    assert_eq!(engine.request_count().await, 0);
}

#[tokio::test]
async fn test_successful_translation_is_returned_verbatim() {
    let engine = StubEngine::spawn(EngineBehavior::Fixed(json!({ "translation": "bonjour" }))).await;
    let mut client = french_client(engine.engine());

    assert_eq!(client.process_text("hello").await, "bonjour");

    let requests = engine.requests().await;
    assert_eq!(requests, vec![json!({ "text": "hello", "target_language": "french" })]);
}

#[tokio::test]
async fn test_surrounding_whitespace_is_sent_untrimmed() {
    let engine = StubEngine::spawn(EngineBehavior::Prefix("fr:")).await;
    let mut client = french_client(engine.engine());

    assert_eq!(client.process_text("  hello ").await, "fr:  hello ");
    assert_eq!(engine.requests().await[0]["text"], "  hello ");
}

#[tokio::test]
async fn test_unreachable_engine_returns_original_text() {
    let engine: Arc<dyn TranslationEngine> =
        Arc::new(HttpTranslationEngine::with_endpoint(unreachable_url().await).unwrap());
    let mut client = french_client(engine);

    assert_eq!(client.process_text("hello there").await, "hello there");
}

#[tokio::test]
async fn test_error_status_returns_original_text() {
    let engine = StubEngine::spawn(EngineBehavior::Status(500)).await;
    let mut client = french_client(engine.engine());

    assert_eq!(client.process_text("good morning").await, "good morning");
    assert_eq!(engine.request_count().await, 1);
}

#[tokio::test]
async fn test_malformed_body_returns_original_text() {
    let engine = StubEngine::spawn(EngineBehavior::Garbage).await;
    let mut client = french_client(engine.engine());

    assert_eq!(client.translate("good night").await, "good night");
}

#[tokio::test]
async fn test_missing_translation_field_falls_back() {
    let engine = StubEngine::spawn(EngineBehavior::Fixed(json!({ "detail": "no translation" }))).await;
    let mut client = french_client(engine.engine());

    assert_eq!(client.process_text("hello").await, "hello");
    // 失败的结果不进入缓存
    assert_eq!(client.cache_len(), 0);
}

#[tokio::test]
async fn test_set_language_changes_target_and_clears_cache() {
    let engine = StubEngine::spawn(EngineBehavior::Prefix("t:")).await;
    let mut client = french_client(engine.engine());

    client.process_text("hello").await;
    assert_eq!(client.cache_len(), 1);

    client.set_language("german");
    assert_eq!(client.current_language(), "german");
    assert_eq!(client.cache_len(), 0);

    client.process_text("hello").await;

    let requests = engine.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0]["target_language"], "french");
    assert_eq!(requests[1]["target_language"], "german");
}

#[tokio::test]
async fn test_set_language_accepts_any_string() {
    let engine = StubEngine::spawn(EngineBehavior::Prefix("t:")).await;
    let mut client = french_client(engine.engine());

    client.set_language("Français");
    client.process_text("hi").await;

    assert_eq!(engine.requests().await[0]["target_language"], "Français");
}

#[tokio::test]
async fn test_repeated_text_is_served_from_cache() {
    let engine = StubEngine::spawn(EngineBehavior::Prefix("fr:")).await;
    let mut client = french_client(engine.engine());

    assert_eq!(client.process_text("hello").await, "fr:hello");
    assert_eq!(client.process_text("hello").await, "fr:hello");

    assert_eq!(engine.request_count().await, 1);
}

#[tokio::test]
async fn test_disabled_cache_calls_engine_every_time() {
    let engine = StubEngine::spawn(EngineBehavior::Prefix("fr:")).await;
    let config = ClientConfig {
        default_language: "spanish".to_string(),
        cache_capacity: 0,
    };
    let mut client = TranslationClient::with_config(engine.engine(), config);

    client.process_text("hello").await;
    client.process_text("hello").await;

    let requests = engine.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0]["target_language"], "spanish");
}

#[test]
fn test_client_config_variables_parse() {
    use message_relay::env::{translation, EnvVar};

    assert_eq!(translation::ClientCacheSize::DEFAULT, Some(256));
    assert_eq!(translation::DefaultTargetLanguage::parse("german").unwrap(), "german");
    assert_eq!(translation::ClientCacheSize::parse("32").unwrap(), 32);
    assert!(translation::DefaultTargetLanguage::parse("").is_err());
}

#[test]
fn test_client_config_validation() {
    let mut config = ClientConfig {
        default_language: "french".to_string(),
        cache_capacity: 256,
    };
    assert!(config.validate().is_ok());

    config.default_language = "  ".to_string();
    let err = config.validate().unwrap_err();
    assert_eq!(err.variable, "RELAY_DEFAULT_TARGET_LANGUAGE");
}
