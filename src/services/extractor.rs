//! 测验提取器 - 业务能力层
//!
//! 遍历文档模型适配器的输出，构建规范化的 [`QuizSnapshot`]。
//! 提取过程只会跳过残缺的部分，永远不会整体失败。

use regex::Regex;
use tracing::{debug, warn};

use crate::dom::QuizDom;
use crate::models::{AnswerOption, Question, QuizSnapshot};

/// 从适配器视图提取完整快照
///
/// 规则：
/// - 区块按文档顺序遍历；题干解码后为空的区块整个跳过，不占用题号
/// - 题号从 1 开始连续分配，选项序号在题内从 1 开始按行顺序分配
/// - 选项富文本为空时，退回该行 label 的文本（判断题只有 label）
/// - 控件句柄与文本解析结果无关，找不到控件不是错误，保留 None
/// - 不重排、不去重、不合并
pub fn extract(dom: &impl QuizDom) -> QuizSnapshot {
    let mut questions = Vec::new();
    let mut next_id: u32 = 1;

    for block in dom.question_blocks() {
        let text = decode_to_plain_text(&dom.question_text_of(block));
        if text.is_empty() {
            debug!("跳过空题干区块");
            continue;
        }

        let mut options = Vec::new();
        for (i, row) in dom.option_rows_of(block).into_iter().enumerate() {
            let mut option_text = decode_to_plain_text(&dom.option_text_of(row));
            if option_text.is_empty() {
                if let Some(label) = dom.option_label_of(row) {
                    option_text = label.trim().to_string();
                }
            }
            let control = dom.option_control_of(row);
            if control.is_none() {
                warn!("题 {} 的选项 {} 没有可用控件，后续无法自动作答", next_id, i + 1);
            }
            options.push(AnswerOption {
                position: (i + 1) as u32,
                text: option_text,
                control,
            });
        }

        questions.push(Question {
            id: next_id,
            text,
            options,
        });
        next_id += 1;
    }

    debug!("提取完成，共 {} 道题", questions.len());
    QuizSnapshot::new(questions)
}

/// 把转义过的富文本标记还原成纯文本
///
/// 先去掉标签再解码实体（顺序不能反：先解码会把正文里的 `&lt;`
/// 还原成 `<`，再去标签就会吃掉正文），最后压缩空白。
/// 对已经是纯文本的输入是幂等的。
pub fn decode_to_plain_text(raw: &str) -> String {
    let stripped = if let Ok(re) = Regex::new(r"<[^>]*>") {
        re.replace_all(raw, " ").into_owned()
    } else {
        raw.to_string()
    };
    let decoded = html_escape::decode_html_entities(&stripped);
    collapse_whitespace(&decoded)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
