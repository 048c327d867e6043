//! 答案作答器 - 业务能力层
//!
//! 把答案集合映射回快照里的具体控件并逐条激活。
//! 条目之间互相独立：无论是映射不上还是激活失败，
//! 都只记一条结果，绝不中断后面的条目。

use tracing::{info, warn};

use crate::dom::ControlActivator;
use crate::models::{
    letter_to_position, AnswerSet, ApplyOutcomeKind, ApplyReport, QuizSnapshot,
};

/// 按答案集合的条目顺序逐条作答，返回聚合报告
pub async fn apply(
    answers: &AnswerSet,
    snapshot: &QuizSnapshot,
    activator: &impl ControlActivator,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for entry in answers {
        let question = match snapshot.question_by_id(entry.id) {
            Some(q) => q,
            None => {
                warn!("⚠️ 答案引用了不存在的题号 {}，跳过", entry.id);
                report.record(entry.id, &entry.answer, ApplyOutcomeKind::UnmatchedQuestion);
                continue;
            }
        };

        let option = match letter_to_position(&entry.answer)
            .and_then(|pos| question.option_at(pos))
        {
            Some(o) => o,
            None => {
                warn!(
                    "⚠️ 题 {} 的答案 '{}' 超出选项范围（共 {} 个选项），跳过",
                    entry.id,
                    entry.answer,
                    question.options.len()
                );
                report.record(entry.id, &entry.answer, ApplyOutcomeKind::UnmatchedOption);
                continue;
            }
        };

        let control = match &option.control {
            Some(c) => c,
            None => {
                warn!(
                    "⚠️ 题 {} 选项 {} 没有可用控件，无法自动作答",
                    entry.id, option.position
                );
                report.record(entry.id, &entry.answer, ApplyOutcomeKind::UnresolvedControl);
                continue;
            }
        };

        match activator.activate(control).await {
            Ok(()) => {
                info!("✓ 题 {} 已选择选项 {} ({})", entry.id, option.position, entry.answer);
                report.record(entry.id, &entry.answer, ApplyOutcomeKind::Applied);
            }
            Err(e) => {
                warn!("⚠️ 题 {} 控件激活失败: {}，继续后续条目", entry.id, e);
                report.record(entry.id, &entry.answer, ApplyOutcomeKind::ActivationFailed);
            }
        }
    }

    report
}
