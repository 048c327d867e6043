//! 运行控制器 - 流程层
//!
//! 编排一次完整的流水线：提取 → 解析 → 作答。
//! 一个页面上下文只允许跑一次；离开 Idle 之后的再次触发是空操作。
//! 解析交换是提取和作答之间唯一的挂起点，必须等它完成才能作答。

use anyhow::Result;
use tracing::{error, info, warn};

use crate::dom::{ControlActivator, QuizDom};
use crate::models::ApplyReport;
use crate::services::{apply, extract, AnswerResolver};

/// 流水线状态
///
/// 每次运行从 Idle 出发，恰好到达一个终态（Done 或 Failed）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Extracting,
    Resolving,
    Applying,
    Done,
    Failed,
}

/// 一次触发的结果
#[derive(Debug)]
pub enum RunOutcome {
    /// 页面上没有可提取的题目，静默结束，不调用解析服务
    NoQuestions,
    /// 本控制器已经跑过一次，这次触发被忽略
    AlreadyRan,
    /// 完整跑完了作答阶段
    Applied(ApplyReport),
}

/// 运行控制器
///
/// 每个页面上下文一个实例；"是否已经跑过"就是这里的状态字段，
/// 不放在任何全局可变量里。
pub struct RunController {
    state: RunState,
}

impl RunController {
    pub fn new() -> Self {
        Self {
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// 触发一次流水线运行
    ///
    /// 解析失败（传输或格式）把状态置为 Failed 并向上返回错误，
    /// 内部不重试。提取和作答在一次运行里各至多发生一次。
    pub async fn run(
        &mut self,
        dom: &impl QuizDom,
        resolver: &impl AnswerResolver,
        activator: &impl ControlActivator,
    ) -> Result<RunOutcome> {
        if self.state != RunState::Idle {
            warn!("流水线已经触发过（当前状态: {:?}），忽略本次触发", self.state);
            return Ok(RunOutcome::AlreadyRan);
        }

        self.state = RunState::Extracting;
        info!("🔍 正在提取页面题目...");
        let snapshot = extract(dom);

        if snapshot.is_empty() {
            info!("页面上没有可提取的题目，结束");
            self.state = RunState::Done;
            return Ok(RunOutcome::NoQuestions);
        }
        info!("✓ 提取到 {} 道题", snapshot.len());

        self.state = RunState::Resolving;
        let answers = match resolver.resolve(&snapshot).await {
            Ok(answers) => answers,
            Err(e) => {
                error!("❌ 解析服务调用失败: {}", e);
                self.state = RunState::Failed;
                return Err(e.into());
            }
        };

        self.state = RunState::Applying;
        info!("✏️ 正在作答...");
        let report = apply(&answers, &snapshot, activator).await;

        self.state = RunState::Done;
        Ok(RunOutcome::Applied(report))
    }
}

impl Default for RunController {
    fn default() -> Self {
        Self::new()
    }
}
