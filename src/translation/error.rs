//! 翻译模块统一错误处理
//!
//! 提供结构化错误类型，以及把已降级处理的失败上报到日志和指标的助手函数

use thiserror::Error;

/// 翻译错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// 配置错误
    #[error("配置错误: {0}")]
    ConfigError(String),

    /// 网络错误（连接失败、超时等）
    #[error("网络错误: {0}")]
    NetworkError(String),

    /// 翻译引擎返回了非 2xx 状态码
    #[error("翻译引擎返回错误状态: {0}")]
    UpstreamStatus(u16),

    /// 响应体不是合法 JSON
    #[error("解析错误: {0}")]
    ParseError(String),

    /// 响应成功但缺少 `translation` 字段
    #[error("翻译引擎响应缺少 translation 字段")]
    MissingTranslation,

    /// 序列化错误
    #[error("序列化错误: {0}")]
    SerializationError(String),

    /// 后台翻译任务已停止
    #[error("后台翻译任务已停止")]
    WorkerClosed,
}

impl TranslationError {
    /// 获取错误类别
    pub fn category(&self) -> ErrorCategory {
        match self {
            TranslationError::ConfigError(_) => ErrorCategory::Configuration,
            TranslationError::NetworkError(_) => ErrorCategory::Network,
            TranslationError::UpstreamStatus(_) => ErrorCategory::Upstream,
            TranslationError::ParseError(_) => ErrorCategory::Parsing,
            TranslationError::MissingTranslation => ErrorCategory::Parsing,
            TranslationError::SerializationError(_) => ErrorCategory::Serialization,
            TranslationError::WorkerClosed => ErrorCategory::Internal,
        }
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Upstream,
    Parsing,
    Serialization,
    Internal,
}

impl ErrorCategory {
    /// 用作日志字段和指标标签的稳定名称
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Network => "network",
            ErrorCategory::Upstream => "upstream",
            ErrorCategory::Parsing => "parsing",
            ErrorCategory::Serialization => "serialization",
            ErrorCategory::Internal => "internal",
        }
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            TranslationError::UpstreamStatus(status.as_u16())
        } else if error.is_decode() {
            TranslationError::ParseError(error.to_string())
        } else if error.is_builder() {
            TranslationError::ConfigError(error.to_string())
        } else {
            TranslationError::NetworkError(error.to_string())
        }
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(error: serde_json::Error) -> Self {
        TranslationError::SerializationError(format!("JSON序列化错误: {}", error))
    }
}

/// 错误结果类型别名
pub type TranslationResult<T> = Result<T, TranslationError>;

/// 错误处理助手函数
pub mod helpers {
    use super::*;

    /// 失败计数指标名称
    pub const FAILURE_COUNTER: &str = "relay_translation_failures_total";

    /// 上报一次已被调用方降级处理的失败
    ///
    /// 结构化字段 `operation` / `category` / `error` 写入 tracing 事件，
    /// 同时按 `operation` 和 `category` 累加失败计数。
    pub fn report_failure(operation: &'static str, error: &TranslationError) {
        let category = error.category().as_str();

        match error.category() {
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(operation, category, error = %error, "翻译调用失败")
            }
            _ => tracing::warn!(operation, category, error = %error, "翻译调用失败"),
        }

        metrics::counter!(FAILURE_COUNTER, "operation" => operation, "category" => category)
            .increment(1);
    }
}
