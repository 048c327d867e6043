//! 应用程序错误类型
//!
//! 只有解析服务边界需要区分错误种类（传输失败 / 响应格式错误，
//! 两者都让本次运行终止在 Failed 态，且都不在内部重试）；
//! 其余路径沿用 anyhow 透传。结构残缺（ParseGap）不是错误，
//! 在提取阶段就地退化处理。

use thiserror::Error;

/// 解析服务调用错误
#[derive(Debug, Error)]
pub enum ResolveError {
    /// 网络不可达、超时或请求被中断
    #[error("解析服务请求失败: {0}")]
    Transport(#[source] reqwest::Error),

    /// 响应体不是约定的形状
    #[error("解析服务响应格式错误: {0}")]
    Payload(String),
}
