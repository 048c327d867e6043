//! 测验数据模型
//!
//! 一次流水线运行中的所有实体都在这里定义，
//! 每次运行重新构建，运行结束后即丢弃，不做任何持久化。

use serde::{Deserialize, Serialize};

/// 选项控件的引用
///
/// 对真实页面来说，这是快照阶段打在 input 元素上的标记属性值；
/// 对核心逻辑来说它是完全不透明的，只负责原样带回给激活边界。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRef(String);

impl ControlRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 一个选项（对应页面上的一行）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    /// 选项序号，题内从 1 开始，A=1 / B=2 / ...
    pub position: u32,
    /// 解码后的纯文本，允许为空
    pub text: String,
    /// 对应的可选控件，找不到时为 None（表示无法自动作答）
    pub control: Option<ControlRef>,
}

/// 一道题目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// 题号，快照内从 1 开始按文档顺序递增
    pub id: u32,
    /// 解码后的题干纯文本，不会为空（空题干的区块不会进入快照）
    pub text: String,
    /// 选项列表，保持页面上的行顺序
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// 按 1-based 序号取选项
    pub fn option_at(&self, position: u32) -> Option<&AnswerOption> {
        if position == 0 {
            return None;
        }
        self.options.get((position - 1) as usize)
    }
}

/// 一次提取得到的完整测验快照
///
/// 构建完成后不再修改，每次流水线运行只产生一份。
#[derive(Debug, Clone)]
pub struct QuizSnapshot {
    questions: Vec<Question>,
}

impl QuizSnapshot {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 按题号精确查找
    pub fn question_by_id(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// 解析服务返回的单条答案
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerEntry {
    /// 题号，可能指向快照中不存在的题目（需容忍）
    pub id: u32,
    /// 答案字母，单个字母，大小写不敏感
    pub answer: String,
}

/// 解析服务返回的答案集合，顺序无保证
pub type AnswerSet = Vec<AnswerEntry>;

/// 答案字母到 1-based 选项序号的固定映射（A=1, B=2, ...）
///
/// 这是与解析服务之间的约定常量，不做动态协商。
/// 非单个 ASCII 字母的输入返回 None。
pub fn letter_to_position(answer: &str) -> Option<u32> {
    let mut chars = answer.trim().chars();
    let letter = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(upper as u32 - 'A' as u32 + 1)
    } else {
        None
    }
}
