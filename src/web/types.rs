//! Web 模块的数据类型定义

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::{deserialize_present, MessageStore};
use crate::translation::engine::TranslationEngine;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MessageStore>,
    pub engine: Arc<dyn TranslationEngine>,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>, engine: Arc<dyn TranslationEngine>) -> Self {
        Self { store, engine }
    }
}

/// 发送消息请求
#[derive(Debug, Default, Deserialize)]
pub struct PostMessageRequest {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub message: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub language: Option<Value>,
}

impl PostMessageRequest {
    /// 宽松解析请求体：空体或非 JSON 按空对象处理
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// 发送消息响应
#[derive(Debug, Serialize)]
pub struct PostMessageResponse {
    pub success: bool,
}

/// 翻译代理请求，字段原样转发给翻译引擎
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProxyTranslateRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_language: Option<Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_language: Option<Value>,
}

impl ProxyTranslateRequest {
    /// 宽松解析请求体：空体或非 JSON 按空对象处理，由翻译引擎决定是否接受
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// 翻译代理失败时返回给调用方的固定错误信息
pub const TRANSLATE_FAILURE_MESSAGE: &str = "Failed to translate text";
