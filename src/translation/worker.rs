//! 后台翻译任务
//!
//! 在独立的 tokio 任务中执行翻译，调用方通过通道投递请求并接收结果。
//! 同一个任务一次只处理一条请求，处理完才会取下一条。

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::translation::engine::{TranslationEngine, TranslationRequest};
use crate::translation::error::{helpers::report_failure, TranslationError, TranslationResult};

/// 投递给后台任务的请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRequest {
    pub sentence: String,
    #[serde(rename = "targetLanguage")]
    pub target_language: String,
}

/// 后台任务的回复
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkerReply {
    Translation { translation: String },
    Error { error: String },
}

/// 后台翻译任务句柄
pub struct TranslationWorker {
    requests: mpsc::UnboundedSender<WorkerRequest>,
    replies: mpsc::UnboundedReceiver<WorkerReply>,
    task: JoinHandle<()>,
}

impl TranslationWorker {
    /// 启动后台任务，必须在 tokio 运行时内调用
    pub fn spawn(engine: Arc<dyn TranslationEngine>) -> Self {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(run(engine, request_rx, reply_tx));

        Self {
            requests: request_tx,
            replies: reply_rx,
            task,
        }
    }

    /// 投递一条翻译请求
    pub fn post_message(&self, request: WorkerRequest) -> TranslationResult<()> {
        self.requests
            .send(request)
            .map_err(|_| TranslationError::WorkerClosed)
    }

    /// 等待下一条回复，任务结束且没有剩余回复时返回 `None`
    pub async fn recv(&mut self) -> Option<WorkerReply> {
        self.replies.recv().await
    }

    /// 关闭请求通道并等待任务处理完已投递的请求后退出
    pub async fn terminate(self) {
        let Self {
            requests,
            replies,
            task,
        } = self;
        drop(requests);

        if let Err(e) = task.await {
            tracing::error!(error = %e, "后台翻译任务异常退出");
        }
        drop(replies);
    }
}

async fn run(
    engine: Arc<dyn TranslationEngine>,
    mut requests: mpsc::UnboundedReceiver<WorkerRequest>,
    replies: mpsc::UnboundedSender<WorkerReply>,
) {
    while let Some(request) = requests.recv().await {
        let reply = handle(engine.as_ref(), request).await;
        if replies.send(reply).is_err() {
            tracing::debug!("回复通道已关闭，后台翻译任务退出");
            break;
        }
    }
}

async fn handle(engine: &dyn TranslationEngine, request: WorkerRequest) -> WorkerReply {
    let request = TranslationRequest::new(request.sentence, request.target_language);

    match engine.translate(&request).await {
        Ok(translation) => WorkerReply::Translation { translation },
        Err(e) => {
            report_failure("worker.translate", &e);
            WorkerReply::Error {
                error: e.to_string(),
            }
        }
    }
}
