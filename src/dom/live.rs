//! D2L 测验页面的实时适配器
//!
//! 一次运行只做一次 DOM 快照：在页面里执行一段遍历脚本，把所有
//! 题目区块 / 选项行 / 控件标记一次性取回来，之后的提取在 Rust
//! 侧进行，不再反复往返页面。
//!
//! 页面结构（quiz attempt 页）：
//! - 每道题以 `div.dco` 区块为界，题目容器是它的下一个兄弟节点
//! - 题干在 `d2l-html-block` 的 `html` 属性里（转义过的富文本）
//! - 选项行是 `fieldset table tbody tr`，富文本体在
//!   `div.d2l-htmlblock-untrusted d2l-html-block`
//! - 可选控件是行内的 radio / checkbox input
//!
//! 快照脚本会给每个找到的 input 打上 `data-qaa-control` 标记属性，
//! 作答阶段凭这个标记把点击投递回同一个元素。

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use super::{BlockHandle, ControlActivator, QuizDom, RowHandle};
use crate::infrastructure::JsExecutor;
use crate::models::ControlRef;

/// 快照脚本取回的一个选项行
#[derive(Debug, Clone, Deserialize)]
pub struct RawOptionRow {
    /// `html` 属性的原始值，节点缺失时为空串
    #[serde(default)]
    pub option_html: String,
    /// 行内第一个 label 的 trim 后文本
    #[serde(default)]
    pub label_text: Option<String>,
    /// 打在 input 上的标记属性值，行内没有 input 时为 None
    #[serde(default)]
    pub control_key: Option<String>,
}

/// 快照脚本取回的一个题目区块
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestionBlock {
    /// 题干 `html` 属性的原始值，节点缺失时为空串
    #[serde(default)]
    pub question_html: String,
    #[serde(default)]
    pub rows: Vec<RawOptionRow>,
}

const SNAPSHOT_SCRIPT: &str = r#"
(() => {
    const blocks = [];
    const questionDivs = document.querySelectorAll('div.dco');
    let qi = 0;
    questionDivs.forEach((questionDiv) => {
        const container = questionDiv.nextElementSibling;
        if (!container) {
            blocks.push({ question_html: '', rows: [] });
            qi++;
            return;
        }
        const textBlock = container.querySelector('d2l-html-block[html]');
        const question_html = textBlock ? (textBlock.getAttribute('html') || '') : '';
        const rows = [];
        const answerRows = container.querySelectorAll('fieldset table tbody tr');
        let ri = 0;
        answerRows.forEach((row) => {
            const answerBlock = row.querySelector('div.d2l-htmlblock-untrusted d2l-html-block');
            const option_html = answerBlock ? (answerBlock.getAttribute('html') || '') : '';
            const label = row.querySelector('label');
            const label_text = label ? label.textContent.trim() : null;
            const control = row.querySelector('input[type="radio"], input[type="checkbox"]');
            let control_key = null;
            if (control) {
                control_key = 'qaa-' + qi + '-' + ri;
                control.setAttribute('data-qaa-control', control_key);
            }
            rows.push({ option_html, label_text, control_key });
            ri++;
        });
        blocks.push({ question_html, rows });
        qi++;
    });
    return blocks;
})()
"#;

/// 实时页面的文档模型适配器
///
/// 持有一份不可变的 DOM 快照数据，[`QuizDom`] 的所有访问都落在
/// 这份数据上；越界的句柄一律退化为空结果。
pub struct LivePageDom {
    blocks: Vec<RawQuestionBlock>,
}

impl LivePageDom {
    /// 在页面里执行快照脚本，取回完整的题目结构
    pub async fn capture(executor: &JsExecutor) -> Result<Self> {
        let blocks: Vec<RawQuestionBlock> = executor
            .eval_as(SNAPSHOT_SCRIPT)
            .await
            .context("页面快照脚本执行失败")?;
        debug!("页面快照完成，共 {} 个题目区块", blocks.len());
        Ok(Self::from_blocks(blocks))
    }

    /// 直接从原始区块数据构建（测试用，不经过浏览器）
    pub fn from_blocks(blocks: Vec<RawQuestionBlock>) -> Self {
        Self { blocks }
    }
}

impl QuizDom for LivePageDom {
    fn question_blocks(&self) -> Vec<BlockHandle> {
        (0..self.blocks.len()).map(BlockHandle).collect()
    }

    fn question_text_of(&self, block: BlockHandle) -> String {
        self.blocks
            .get(block.0)
            .map(|b| b.question_html.clone())
            .unwrap_or_default()
    }

    fn option_rows_of(&self, block: BlockHandle) -> Vec<RowHandle> {
        match self.blocks.get(block.0) {
            Some(b) => (0..b.rows.len())
                .map(|row| RowHandle {
                    block: block.0,
                    row,
                })
                .collect(),
            None => Vec::new(),
        }
    }

    fn option_text_of(&self, row: RowHandle) -> String {
        self.row(row)
            .map(|r| r.option_html.clone())
            .unwrap_or_default()
    }

    fn option_label_of(&self, row: RowHandle) -> Option<String> {
        self.row(row).and_then(|r| r.label_text.clone())
    }

    fn option_control_of(&self, row: RowHandle) -> Option<ControlRef> {
        self.row(row)
            .and_then(|r| r.control_key.as_deref())
            .map(ControlRef::new)
    }
}

impl LivePageDom {
    fn row(&self, handle: RowHandle) -> Option<&RawOptionRow> {
        self.blocks.get(handle.block)?.rows.get(handle.row)
    }
}

/// 实时页面的控件激活器
///
/// 凭快照阶段打上的标记属性找回 input 元素，调用原生 click()。
/// click() 对已选中的 radio 是幂等的，且会触发页面自身的变更事件。
pub struct LiveActivator<'a> {
    executor: &'a JsExecutor,
}

impl<'a> LiveActivator<'a> {
    pub fn new(executor: &'a JsExecutor) -> Self {
        Self { executor }
    }
}

impl ControlActivator for LiveActivator<'_> {
    async fn activate(&self, control: &ControlRef) -> Result<()> {
        // 标记值是快照阶段自己生成的，不含需要转义的字符
        let script = format!(
            r#"
            (() => {{
                const el = document.querySelector('[data-qaa-control="{}"]');
                if (!el) return false;
                el.click();
                return true;
            }})()
            "#,
            control.as_str()
        );
        let clicked: bool = self
            .executor
            .eval_as(script)
            .await
            .context("控件激活脚本执行失败")?;
        if !clicked {
            anyhow::bail!("页面上找不到标记为 {} 的控件", control.as_str());
        }
        Ok(())
    }
}
