//! 会话级翻译客户端
//!
//! 保存当前目标语言和翻译缓存，把任意文本转换成译文。翻译是尽力而为的：
//! 任何失败都会被上报，然后原样返回输入文本，调用方永远看不到错误。

use std::sync::Arc;

use crate::env::{EnvError, EnvResult, EnvVar};
use crate::translation::cache::TranslationCache;
use crate::translation::engine::{TranslationEngine, TranslationRequest};
use crate::translation::error::helpers::report_failure;

/// 客户端配置
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 初始目标语言
    pub default_language: String,
    /// 缓存容量，0 表示不缓存
    pub cache_capacity: usize,
}

impl ClientConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::translation;

        let config = Self {
            default_language: translation::DefaultTargetLanguage::get()?,
            cache_capacity: translation::ClientCacheSize::get()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// 验证配置
    pub fn validate(&self) -> EnvResult<()> {
        if self.default_language.trim().is_empty() {
            return Err(EnvError {
                variable: "RELAY_DEFAULT_TARGET_LANGUAGE".to_string(),
                message: "Target language cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load client config from environment: {}. Using defaults.",
                e
            );
            Self {
                default_language: "french".to_string(),
                cache_capacity: 256,
            }
        })
    }
}

/// 翻译客户端
pub struct TranslationClient {
    engine: Arc<dyn TranslationEngine>,
    current_language: String,
    cache: TranslationCache,
}

impl TranslationClient {
    /// 使用默认配置创建客户端
    pub fn new(engine: Arc<dyn TranslationEngine>) -> Self {
        Self::with_config(engine, ClientConfig::default())
    }

    pub fn with_config(engine: Arc<dyn TranslationEngine>, config: ClientConfig) -> Self {
        Self {
            engine,
            current_language: config.default_language,
            cache: TranslationCache::new(config.cache_capacity),
        }
    }

    /// 处理输入文本
    ///
    /// 空白输入直接返回空字符串，不发起远程调用。
    pub async fn process_text(&mut self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        self.translate(text).await
    }

    /// 把文本翻译成当前目标语言，失败时返回原文
    pub async fn translate(&mut self, text: &str) -> String {
        if let Some(cached) = self.cache.get(text, &self.current_language) {
            tracing::debug!(language = %self.current_language, "命中翻译缓存");
            return cached;
        }

        let request = TranslationRequest::new(text, self.current_language.clone());
        match self.engine.translate(&request).await {
            Ok(translation) => {
                self.cache
                    .put(text, &self.current_language, translation.clone());
                translation
            }
            Err(e) => {
                report_failure("client.translate", &e);
                text.to_string()
            }
        }
    }

    /// 切换目标语言，同时清空缓存
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.current_language = language.into();
        self.cache.clear();
        tracing::debug!(language = %self.current_language, "目标语言已切换");
    }

    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
