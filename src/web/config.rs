//! Web 服务器配置
//!
//! 使用类型安全的环境变量系统进行配置管理

use crate::env::{self, EnvError, EnvResult, EnvVar};
use crate::translation::engine::EngineConfig;

/// Web 服务器配置
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// 绑定地址
    pub bind_addr: String,
    /// 端口
    pub port: u16,
    /// 上游翻译引擎
    pub engine: EngineConfig,
    /// 每个消息日志的容量上限
    pub store_capacity: Option<usize>,
}

impl WebConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::{store, web};

        Ok(Self {
            bind_addr: web::BindAddress::get()?,
            port: web::Port::get()?,
            engine: EngineConfig::from_env()?,
            store_capacity: env::optional::<usize, store::Capacity>()?,
        })
    }

    /// 验证配置
    pub fn validate(&self) -> EnvResult<()> {
        if self.bind_addr.is_empty() {
            return Err(EnvError {
                variable: "RELAY_BIND_ADDRESS".to_string(),
                message: "Bind address cannot be empty".to_string(),
            });
        }

        if self.port == 0 {
            return Err(EnvError {
                variable: "RELAY_PORT".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        env::translation::EngineUrl::parse(&self.engine.endpoint)?;

        if self.store_capacity == Some(0) {
            return Err(EnvError {
                variable: "RELAY_STORE_CAPACITY".to_string(),
                message: "Capacity must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// 获取完整的监听地址
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!("Failed to load web config from environment: {}. Using defaults.", e);
            Self {
                bind_addr: "0.0.0.0".to_string(),
                port: 3000,
                engine: EngineConfig::default(),
                store_capacity: None,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WebConfig {
        WebConfig {
            bind_addr: "127.0.0.1".to_string(),
            port: 3000,
            engine: EngineConfig {
                endpoint: "http://localhost:8000/api/v1/translate".to_string(),
                timeout: None,
            },
            store_capacity: None,
        }
    }

    #[test]
    fn test_listen_address() {
        assert_eq!(config().listen_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_validate() {
        assert!(config().validate().is_ok());

        let mut bad_port = config();
        bad_port.port = 0;
        assert!(bad_port.validate().is_err());

        let mut bad_engine = config();
        bad_engine.engine.endpoint = "localhost:8000".to_string();
        assert!(bad_engine.validate().is_err());

        let mut bad_capacity = config();
        bad_capacity.store_capacity = Some(0);
        assert!(bad_capacity.validate().is_err());
    }
}
