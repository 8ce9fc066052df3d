//! 统一的环境变量管理系统
//!
//! 每个变量是一个实现了 [`EnvVar`] 的零大小类型，负责自己的名称、默认值和解析校验。

use std::env;
use std::fmt;
use std::time::Duration;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "RELAY_LOG_LEVEL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("info".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }
}

/// 翻译相关环境变量
pub mod translation {
    use super::*;

    /// 翻译引擎地址
    pub struct EngineUrl;
    impl EnvVar<String> for EngineUrl {
        const NAME: &'static str = "RELAY_ENGINE_URL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("http://localhost:8000/api/v1/translate".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Translation engine endpoint URL";

        fn parse(value: &str) -> EnvResult<String> {
            let raw = value.trim();
            let parsed = url::Url::parse(raw).map_err(|e| EnvError {
                variable: Self::NAME.to_string(),
                message: format!("Invalid URL '{}': {}", raw, e),
            })?;

            match parsed.scheme() {
                "http" | "https" => Ok(raw.to_string()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Engine URL must start with http:// or https://".to_string(),
                }),
            }
        }
    }

    /// 单次引擎调用超时
    pub struct EngineTimeout;
    impl EnvVar<Duration> for EngineTimeout {
        const NAME: &'static str = "RELAY_ENGINE_TIMEOUT";
        const DEFAULT: Option<Duration> = None; // 未设置时不超时
        const DESCRIPTION: &'static str = "Engine call timeout in seconds (unset: no timeout)";

        fn parse(value: &str) -> EnvResult<Duration> {
            let seconds: u64 = value.trim().parse().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: "Must be a valid number of seconds".to_string(),
            })?;

            if seconds == 0 {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Timeout must be greater than 0".to_string(),
                });
            }

            Ok(Duration::from_secs(seconds))
        }
    }

    /// 客户端默认目标语言
    pub struct DefaultTargetLanguage;
    impl EnvVar<String> for DefaultTargetLanguage {
        const NAME: &'static str = "RELAY_DEFAULT_TARGET_LANGUAGE";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("french".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Initial target language of a translation client";

        fn parse(value: &str) -> EnvResult<String> {
            let lang = value.trim();
            if lang.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Language cannot be empty".to_string(),
                });
            }
            Ok(lang.to_string())
        }
    }

    /// 客户端缓存容量
    pub struct ClientCacheSize;
    impl EnvVar<usize> for ClientCacheSize {
        const NAME: &'static str = "RELAY_CLIENT_CACHE_SIZE";
        const DEFAULT: Option<usize> = Some(256);
        const DESCRIPTION: &'static str = "Translation client cache entries (0 disables caching)";

        fn parse(value: &str) -> EnvResult<usize> {
            parse_usize_in_range(value, Self::NAME, 0, 100_000)
        }
    }
}

/// Web服务器相关环境变量
pub mod web {
    use super::*;

    /// 绑定地址
    pub struct BindAddress;
    impl EnvVar<String> for BindAddress {
        const NAME: &'static str = "RELAY_BIND_ADDRESS";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("0.0.0.0".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Relay server bind address";

        fn parse(value: &str) -> EnvResult<String> {
            let addr = value.trim();
            if addr.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Address cannot be empty".to_string(),
                });
            }
            Ok(addr.to_string())
        }
    }

    /// 端口
    pub struct Port;
    impl EnvVar<u16> for Port {
        const NAME: &'static str = "RELAY_PORT";
        const DEFAULT: Option<u16> = Some(3000);
        const DESCRIPTION: &'static str = "Relay server port";

        fn parse(value: &str) -> EnvResult<u16> {
            let port: u16 = value.trim().parse().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: "Must be a valid port number (1-65535)".to_string(),
            })?;

            if port == 0 {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Port cannot be 0".to_string(),
                });
            }

            Ok(port)
        }
    }
}

/// 消息存储相关环境变量
pub mod store {
    use super::*;

    /// 每个消息日志的容量上限
    pub struct Capacity;
    impl EnvVar<usize> for Capacity {
        const NAME: &'static str = "RELAY_STORE_CAPACITY";
        const DEFAULT: Option<usize> = None; // 未设置时不限制
        const DESCRIPTION: &'static str = "Maximum messages kept per log (unset: unbounded)";

        fn parse(value: &str) -> EnvResult<usize> {
            parse_usize_in_range(value, Self::NAME, 1, usize::MAX)
        }
    }
}

/// 可选变量：未设置时为 `None`，设置了但非法时报错
pub fn optional<T, V: EnvVar<T>>() -> EnvResult<Option<T>> {
    match env::var(V::NAME) {
        Ok(value) => V::parse(&value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_usize_in_range(value: &str, var_name: &str, min: usize, max: usize) -> EnvResult<usize> {
    let num: usize = value.trim().parse().map_err(|_| EnvError {
        variable: var_name.to_string(),
        message: "Must be a valid non-negative number".to_string(),
    })?;

    if num < min {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} is below minimum {}", num, min),
        });
    }

    if num > max {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} exceeds maximum {}", num, max),
        });
    }

    Ok(num)
}
