//! Web 路由定义

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers::*, types::AppState};

/// 创建路由结构
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // 消息日志：conversation 或其他任意值（视为 broadcast）
        .route("/messages/:type", get(list_messages).post(post_message))
        // 翻译代理
        .route("/translate", post(translate_proxy))
}
