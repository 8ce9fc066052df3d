//! 核心错误类型
//!
//! 仅覆盖启动阶段的失败：运行期的翻译失败在各组件内部降级处理，不会走到这里。

use thiserror::Error;

use crate::env::EnvError;
use crate::translation::error::TranslationError;

/// 中继服务启动错误
#[derive(Error, Debug)]
pub enum RelayError {
    /// 环境变量配置错误
    #[error("配置错误: {0}")]
    Config(#[from] EnvError),

    /// 翻译引擎客户端初始化失败
    #[error("翻译引擎初始化失败: {0}")]
    Engine(#[from] TranslationError),

    /// 监听端口绑定失败
    #[error("Failed to bind server on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// 服务运行期间的 IO 错误
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type RelayResult<T> = Result<T, RelayError>;
