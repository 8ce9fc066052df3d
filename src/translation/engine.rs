//! 远程翻译引擎接口
//!
//! 客户端、后台任务和中继代理都通过 [`TranslationEngine`] 访问同一个上游，
//! 上游地址只在 [`EngineConfig`] 中配置一次。

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::env::{self, EnvResult, EnvVar};
use crate::translation::error::{TranslationError, TranslationResult};

/// 发往翻译引擎的请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
            source_language: None,
        }
    }
}

/// 从引擎响应体中取出 `translation` 字段
pub fn extract_translation(body: &Value) -> TranslationResult<String> {
    body.get("translation")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(TranslationError::MissingTranslation)
}

/// 翻译引擎
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    /// 原样发送 JSON 负载，返回引擎的原始响应体
    async fn post_json(&self, payload: &Value) -> TranslationResult<Value>;

    /// 发送一次翻译请求并返回译文
    async fn translate(&self, request: &TranslationRequest) -> TranslationResult<String> {
        let payload = serde_json::to_value(request)?;
        let body = self.post_json(&payload).await?;
        extract_translation(&body)
    }
}

/// 翻译引擎连接配置
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// 引擎的翻译端点（也可以指向中继服务的 `/translate`）
    pub endpoint: String,
    /// 单次调用超时，`None` 表示不设超时
    pub timeout: Option<Duration>,
}

impl EngineConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::translation;

        Ok(Self {
            endpoint: translation::EngineUrl::get()?,
            timeout: env::optional::<Duration, translation::EngineTimeout>()?,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load engine config from environment: {}. Using defaults.",
                e
            );
            Self {
                endpoint: "http://localhost:8000/api/v1/translate".to_string(),
                timeout: None,
            }
        })
    }
}

/// 基于 HTTP 的翻译引擎客户端
#[derive(Debug, Clone)]
pub struct HttpTranslationEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTranslationEngine {
    /// 创建新的引擎客户端
    pub fn new(config: &EngineConfig) -> TranslationResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TranslationError::ConfigError(format!("HTTP客户端创建失败: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// 使用指定端点和默认设置创建
    pub fn with_endpoint(endpoint: impl Into<String>) -> TranslationResult<Self> {
        Self::new(&EngineConfig {
            endpoint: endpoint.into(),
            timeout: None,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TranslationEngine for HttpTranslationEngine {
    async fn post_json(&self, payload: &Value) -> TranslationResult<Value> {
        tracing::debug!(endpoint = %self.endpoint, "发送翻译请求");

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<Value>().await?;
        Ok(body)
    }
}
