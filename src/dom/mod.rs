//! 文档模型适配层
//!
//! 把渲染后的页面树抽象成"题目区块 / 选项行 / 控件"三种句柄，
//! 提取器和作答器只依赖这里的 trait，不接触具体的标记方言。
//! 任何渲染引擎实现了 [`QuizDom`] 和 [`ControlActivator`] 就能接入流水线。

pub mod live;

use anyhow::Result;

use crate::models::ControlRef;

pub use live::{LiveActivator, LivePageDom, RawOptionRow, RawQuestionBlock};

/// 题目区块句柄，文档顺序由适配器保证
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHandle(pub(crate) usize);

/// 选项行句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHandle {
    pub(crate) block: usize,
    pub(crate) row: usize,
}

/// 页面树的只读视图
///
/// 所有访问都是只读的；缺失的节点一律退化为空串 / None，
/// 不允许因为单个题目或选项的结构残缺让整个遍历失败。
pub trait QuizDom {
    /// 按文档顺序列出所有题目区块
    fn question_blocks(&self) -> Vec<BlockHandle>;

    /// 区块的题干原始标记，找不到时为空串
    fn question_text_of(&self, block: BlockHandle) -> String;

    /// 区块内的选项行，保持行顺序
    fn option_rows_of(&self, block: BlockHandle) -> Vec<RowHandle>;

    /// 选项行的富文本原始标记，可能为空串
    fn option_text_of(&self, row: RowHandle) -> String;

    /// 选项行内第一个 label 节点的文本（判断题等没有富文本体的选项的兜底来源）
    fn option_label_of(&self, row: RowHandle) -> Option<String>;

    /// 选项行对应的可选控件
    fn option_control_of(&self, row: RowHandle) -> Option<ControlRef>;
}

/// 控件激活边界
///
/// 唯一的原语："像用户点击一样激活这个控件"。对已选中的控件
/// 重复激活是幂等的。激活必须走控件的原生选中行为，不允许直接
/// 改 checked 标志，否则页面自身依赖的变更事件不会触发。
#[allow(async_fn_in_trait)]
pub trait ControlActivator {
    async fn activate(&self, control: &ControlRef) -> Result<()>;
}
