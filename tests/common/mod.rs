// 集成测试公共模块
//
// 提供一个可控的本地翻译引擎替身，以及常用的构造函数

#![allow(dead_code)]

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::sync::Mutex;

use message_relay::store::InMemoryMessageStore;
use message_relay::translation::HttpTranslationEngine;
use message_relay::web::{create_router, AppState};

pub const ENGINE_PATH: &str = "/api/v1/translate";

/// 替身引擎的响应方式
#[derive(Debug, Clone)]
pub enum EngineBehavior {
    /// 返回 `{"translation": <prefix><text>}`
    Prefix(&'static str),
    /// 总是返回同一个 JSON 响应体
    Fixed(Value),
    /// 返回指定的错误状态码
    Status(u16),
    /// 返回 200 但响应体不是 JSON
    Garbage,
}

#[derive(Clone)]
struct StubState {
    behavior: EngineBehavior,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// 运行中的替身引擎
pub struct StubEngine {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl StubEngine {
    /// 在随机端口上启动替身引擎
    pub async fn spawn(behavior: EngineBehavior) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            behavior,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route(ENGINE_PATH, post(stub_translate))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub engine");
        let addr = listener.local_addr().expect("stub engine address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub engine crashed");
        });

        Self {
            url: format!("http://{}{}", addr, ENGINE_PATH),
            requests,
        }
    }

    /// 替身引擎收到的全部请求体
    pub async fn requests(&self) -> Vec<Value> {
        self.requests.lock().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    pub fn engine(&self) -> Arc<HttpTranslationEngine> {
        Arc::new(HttpTranslationEngine::with_endpoint(self.url.clone()).expect("engine client"))
    }
}

async fn stub_translate(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    state.requests.lock().await.push(body.clone());

    match state.behavior {
        EngineBehavior::Prefix(prefix) => {
            let text = body.get("text").and_then(Value::as_str).unwrap_or_default();
            Json(json!({ "translation": format!("{}{}", prefix, text) })).into_response()
        }
        EngineBehavior::Fixed(value) => Json(value).into_response(),
        EngineBehavior::Status(code) => {
            let status = StatusCode::from_u16(code).expect("valid status");
            (status, Json(json!({ "detail": "engine failure" }))).into_response()
        }
        EngineBehavior::Garbage => "<html>not json</html>".into_response(),
    }
}

/// 一个没有任何服务监听的引擎地址
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}{}", addr, ENGINE_PATH)
}

/// 构造连接到指定引擎地址的中继路由
pub fn relay_router(engine_url: &str) -> Router {
    let engine = HttpTranslationEngine::with_endpoint(engine_url).expect("engine client");
    let state = AppState::new(Arc::new(InMemoryMessageStore::new()), Arc::new(engine));
    create_router(Arc::new(state))
}
