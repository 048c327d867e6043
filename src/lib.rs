//! # Quiz Auto Answer
//!
//! 一个对 D2L 测验页面自动作答的 Rust 应用程序：
//! 从已登录浏览器的测验页面提取题目与选项，提交给远端答案解析
//! 服务，再把返回的答案逐条点回页面上的选项控件。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure / Browser）
//! - `browser/` - 连接调试端口、定位测验标签页
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露 eval() 能力
//!
//! ### ② 文档模型层（Dom）
//! - `dom/` - 把页面树抽象成区块 / 选项行 / 控件句柄
//! - `LivePageDom` - D2L 页面的一次性 DOM 快照实现
//! - `LiveActivator` - 凭标记属性把点击投递回控件
//!
//! ### ③ 业务能力层（Services）
//! - `extractor` - 快照提取与富文本解码
//! - `resolver` - 与答案解析服务的一次 HTTP 交换
//! - `applier` - 答案到控件的映射与逐条作答
//!
//! ### ④ 流程层（Workflow）
//! - `RunController` - 提取 → 解析 → 作答的一次性状态机
//!
//! ### ⑤ 编排层（App）
//! - `app` - 资源装配与最终报告输出

pub mod app;
pub mod browser;
pub mod config;
pub mod dom;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use browser::connect_to_quiz_page;
pub use config::Config;
pub use dom::{ControlActivator, LiveActivator, LivePageDom, QuizDom};
pub use error::ResolveError;
pub use infrastructure::JsExecutor;
pub use models::{AnswerEntry, AnswerSet, ApplyReport, ControlRef, Question, QuizSnapshot};
pub use services::{apply, extract, AnswerResolver, HttpResolver};
pub use workflow::{RunController, RunOutcome, RunState};
