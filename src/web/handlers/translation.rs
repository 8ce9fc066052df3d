//! 翻译代理 API 处理器

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::Value;

use crate::translation::error::{helpers::report_failure, TranslationResult};
use crate::web::types::{AppState, ProxyTranslateRequest, TRANSLATE_FAILURE_MESSAGE};

/// 把翻译请求转发给翻译引擎，成功时原样返回引擎响应
///
/// 失败细节只写入服务端日志，调用方只会收到固定的错误信息。
pub async fn translate_proxy(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let request = ProxyTranslateRequest::from_body(&body);
    match forward(&state, &request).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            report_failure("relay.translate", &e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": TRANSLATE_FAILURE_MESSAGE })),
            ))
        }
    }
}

async fn forward(state: &AppState, request: &ProxyTranslateRequest) -> TranslationResult<Value> {
    let payload = serde_json::to_value(request)?;
    state.engine.post_json(&payload).await
}
