//! JS 执行器 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露"在页面里执行 JS 并取回结构化
//! 结果"的能力。不认识 Question / Snapshot，也不处理业务流程：
//! 快照脚本和激活脚本长什么样由 dom 层决定。

use anyhow::{Context, Result};
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::trace;

/// JS 执行器
pub struct JsExecutor {
    page: Page,
}

impl JsExecutor {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 执行 JS 代码并把返回值反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> Result<T> {
        let js_code = js_code.into();
        trace!("执行页面脚本，{} 字节", js_code.len());
        let json_value: JsonValue = self
            .page
            .evaluate(js_code)
            .await
            .context("页面脚本执行失败")?
            .into_value()
            .context("页面脚本没有返回可序列化的值")?;
        serde_json::from_value(json_value).context("页面返回的 JSON 形状不符合预期")
    }
}
