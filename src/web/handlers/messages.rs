//! 消息日志 API 处理器

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
};

use crate::store::{Message, MessageKind};
use crate::web::types::{AppState, PostMessageRequest, PostMessageResponse};

/// 获取某个日志的全部消息
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Json<Vec<Message>> {
    let kind = MessageKind::from_route(&kind);
    let messages = state.store.list(kind).await;

    tracing::debug!(?kind, count = messages.len(), "返回消息列表");
    Json(messages)
}

/// 追加一条消息
///
/// 不校验请求：缺少 Content-Type、空体或无法解析的体都按空对象保存。
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    body: Bytes,
) -> Json<PostMessageResponse> {
    let request = PostMessageRequest::from_body(&body);
    let kind = MessageKind::from_route(&kind);
    state
        .store
        .append(kind, Message::new(request.message, request.language))
        .await;

    tracing::debug!(?kind, "消息已保存");
    Json(PostMessageResponse { success: true })
}
