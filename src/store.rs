//! 消息存储
//!
//! 广播和会话两个互不相关的只追加日志。路由层只依赖 [`MessageStore`]，
//! 可以替换成有界或持久化的实现。

use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;

/// 消息日志类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Broadcast,
    Conversation,
}

impl MessageKind {
    /// 按路由参数选择日志：除 `conversation` 以外一律视为广播
    pub fn from_route(segment: &str) -> Self {
        if segment == "conversation" {
            MessageKind::Conversation
        } else {
            MessageKind::Broadcast
        }
    }
}

/// 已存储的消息
///
/// `message` 和 `language` 按收到的内容原样保存，缺失的字段保持缺失，
/// 显式的 `null` 保存为 `Some(Value::Null)`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<Value>,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// 以当前时间创建消息
    pub fn new(message: Option<Value>, language: Option<Value>) -> Self {
        Self {
            message,
            language,
            timestamp: Utc::now(),
        }
    }
}

/// 只要字段出现就返回 `Some`，包括 `null`
///
/// 配合 `#[serde(default)]` 使用：缺失的字段走 `default` 得到 `None`。
pub fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// 消息存储接口
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// 追加一条消息
    async fn append(&self, kind: MessageKind, message: Message);

    /// 按插入顺序返回日志快照
    async fn list(&self, kind: MessageKind) -> Vec<Message>;
}

#[derive(Default)]
struct Logs {
    broadcast: VecDeque<Message>,
    conversation: VecDeque<Message>,
}

impl Logs {
    fn select(&mut self, kind: MessageKind) -> &mut VecDeque<Message> {
        match kind {
            MessageKind::Broadcast => &mut self.broadcast,
            MessageKind::Conversation => &mut self.conversation,
        }
    }
}

/// 进程内消息存储，进程退出即丢失
#[derive(Default)]
pub struct InMemoryMessageStore {
    logs: RwLock<Logs>,
    capacity: Option<usize>,
}

impl InMemoryMessageStore {
    /// 创建不限容量的存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建每个日志最多保留 `capacity` 条消息的存储，超出时丢弃最旧的
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            logs: RwLock::new(Logs::default()),
            capacity,
        }
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn append(&self, kind: MessageKind, message: Message) {
        let mut logs = self.logs.write().await;
        let log = logs.select(kind);
        log.push_back(message);

        if let Some(capacity) = self.capacity {
            while log.len() > capacity {
                log.pop_front();
            }
        }
    }

    async fn list(&self, kind: MessageKind) -> Vec<Message> {
        let logs = self.logs.read().await;
        let log = match kind {
            MessageKind::Broadcast => &logs.broadcast,
            MessageKind::Conversation => &logs.conversation,
        };
        log.iter().cloned().collect()
    }
}
