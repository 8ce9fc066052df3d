//! # Message Relay
//!
//! 短消息中继服务，以及尽力而为的文本翻译客户端。
//!
//! ## 模块组织
//!
//! - `core` - 启动阶段错误类型
//! - `env` - 类型安全的环境变量配置
//! - `store` - 广播/会话消息日志
//! - `translation` - 翻译引擎接口、会话客户端和后台工作者
//! - `web` - Web服务器功能（可选）

pub mod core;
pub mod env;
pub mod store;
pub mod translation;
#[cfg(feature = "web")]
pub mod web;

pub use self::core::{RelayError, RelayResult};
pub use store::{InMemoryMessageStore, Message, MessageKind, MessageStore};
