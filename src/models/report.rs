//! 作答结果报告
//!
//! 只用于观测（日志输出），不参与控制流。

/// 单条答案的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcomeKind {
    /// 已成功激活对应控件
    Applied,
    /// 快照中不存在该题号
    UnmatchedQuestion,
    /// 答案字母超出该题的选项范围
    UnmatchedOption,
    /// 选项存在但没有可用控件
    UnresolvedControl,
    /// 控件激活调用本身失败（页面侧错误）
    ActivationFailed,
}

/// 一条答案对应一条结果记录
#[derive(Debug, Clone)]
pub struct ApplyOutcome {
    pub question_id: u32,
    pub answer: String,
    pub kind: ApplyOutcomeKind,
}

/// 一次作答的聚合报告，每条输入答案恰好对应一条记录
#[derive(Debug, Clone, Default)]
pub struct ApplyReport {
    outcomes: Vec<ApplyOutcome>,
}

impl ApplyReport {
    pub fn record(&mut self, question_id: u32, answer: &str, kind: ApplyOutcomeKind) {
        self.outcomes.push(ApplyOutcome {
            question_id,
            answer: answer.to_string(),
            kind,
        });
    }

    pub fn outcomes(&self) -> &[ApplyOutcome] {
        &self.outcomes
    }

    pub fn applied_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.kind == ApplyOutcomeKind::Applied)
            .count()
    }

    pub fn mismatch_count(&self) -> usize {
        self.outcomes.len() - self.applied_count()
    }

    /// 所有答案都成功作答
    pub fn is_clean(&self) -> bool {
        self.mismatch_count() == 0
    }
}
