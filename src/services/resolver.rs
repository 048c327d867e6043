//! 答案解析客户端 - 业务能力层
//!
//! 把快照序列化成约定的请求体发给远端解析服务，拿回答案集合。
//! 这是流水线里唯一的挂起点；一次交换只有三种终局：成功、
//! 传输失败、响应格式错误。客户端内部不重试，重试策略归调用方。

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ResolveError;
use crate::models::{AnswerSet, QuizSnapshot};

/// 解析服务边界
///
/// 测试里用脚本化的实现替换真实 HTTP 调用。
#[allow(async_fn_in_trait)]
pub trait AnswerResolver {
    async fn resolve(&self, snapshot: &QuizSnapshot) -> Result<AnswerSet, ResolveError>;
}

// ---- 请求体（字段名是与服务端的线上约定，不能改） ----

#[derive(Serialize)]
struct ResolveRequest<'a> {
    questions_data: Vec<QuestionPayload<'a>>,
}

#[derive(Serialize)]
struct QuestionPayload<'a> {
    id: u32,
    #[serde(rename = "questionText")]
    question_text: &'a str,
    answers: Vec<OptionPayload<'a>>,
}

#[derive(Serialize)]
struct OptionPayload<'a> {
    index: u32,
    text: &'a str,
}

fn build_request(snapshot: &QuizSnapshot) -> ResolveRequest<'_> {
    ResolveRequest {
        questions_data: snapshot
            .questions()
            .iter()
            .map(|q| QuestionPayload {
                id: q.id,
                question_text: &q.text,
                answers: q
                    .options
                    .iter()
                    .map(|o| OptionPayload {
                        index: o.position,
                        text: &o.text,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// 解析响应体
///
/// 约定形状是 `[{"id": 1, "answer": "B"}, ...]`；其他任何形状
/// 都算格式错误，原样报给调用方。
pub fn parse_answer_set(body: &str) -> Result<AnswerSet, ResolveError> {
    serde_json::from_str(body).map_err(|e| ResolveError::Payload(e.to_string()))
}

/// HTTP 解析客户端
pub struct HttpResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpResolver {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.resolver_endpoint.clone(),
        }
    }
}

impl AnswerResolver for HttpResolver {
    async fn resolve(&self, snapshot: &QuizSnapshot) -> Result<AnswerSet, ResolveError> {
        info!("📤 正在向解析服务提交 {} 道题...", snapshot.len());
        let request = build_request(snapshot);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(ResolveError::Transport)?
            .error_for_status()
            .map_err(ResolveError::Transport)?;

        let body = response.text().await.map_err(ResolveError::Transport)?;
        debug!("解析服务响应 {} 字节", body.len());

        let answers = parse_answer_set(&body)?;
        info!("✓ 解析服务返回 {} 条答案", answers.len());
        Ok(answers)
    }
}
