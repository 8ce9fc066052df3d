//! Web 服务器模块
//!
//! 提供消息日志的存取接口和翻译代理

pub mod config;
pub mod handlers;
pub mod routes;
pub mod types;

pub use config::*;
pub use routes::*;
pub use types::*;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::core::{RelayError, RelayResult};
use crate::store::InMemoryMessageStore;
use crate::translation::engine::HttpTranslationEngine;

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig) -> Self {
        Self { config }
    }

    /// 按配置组装应用状态：进程内消息存储 + HTTP 翻译引擎
    pub fn build_state(&self) -> RelayResult<AppState> {
        let engine = HttpTranslationEngine::new(&self.config.engine)?;
        let store = InMemoryMessageStore::with_capacity(self.config.store_capacity);

        Ok(AppState::new(Arc::new(store), Arc::new(engine)))
    }

    /// 启动 Web 服务器
    pub async fn start(&self) -> RelayResult<()> {
        self.config.validate()?;

        let app_state = Arc::new(self.build_state()?);
        let app = create_router(app_state);

        let addr = self.config.listen_address();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| RelayError::Bind {
                addr: addr.clone(),
                source,
            })?;

        tracing::info!(
            engine = %self.config.engine.endpoint,
            "Relay server starting at http://{}",
            addr
        );

        axum::serve(listener, app).await.map_err(RelayError::Serve)?;

        Ok(())
    }
}

/// 创建路由器
pub fn create_router(app_state: Arc<AppState>) -> Router {
    create_routes()
        .with_state(app_state)
        // 添加CORS支持
        .layer(CorsLayer::permissive())
}
