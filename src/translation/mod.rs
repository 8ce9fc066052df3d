//! 翻译模块
//!
//! - `engine` - 远程翻译引擎的线协议和 HTTP 实现
//! - `client` - 带目标语言状态和缓存的会话级客户端
//! - `worker` - 在独立任务中执行翻译的后台工作者
//! - `cache` - 客户端使用的 LRU 缓存
//! - `error` - 错误类型和失败上报

pub mod cache;
pub mod client;
pub mod engine;
pub mod error;
pub mod worker;

pub use client::{ClientConfig, TranslationClient};
pub use engine::{EngineConfig, HttpTranslationEngine, TranslationEngine, TranslationRequest};
pub use error::{TranslationError, TranslationResult};
pub use worker::{TranslationWorker, WorkerReply, WorkerRequest};
