/// 日志工具模块
///
/// 提供日志初始化和结果输出的辅助函数
use anyhow::Result;
use std::fs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::models::{ApplyOutcomeKind, ApplyReport, QuizSnapshot};

/// 初始化 tracing 订阅者
///
/// RUST_LOG 未设置时默认 info 级别；verbose 时强制 debug。
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 初始化日志文件
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n测验作答日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(port: u16, url_fragment: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 测验自动作答");
    info!("🌐 浏览器调试端口: {}", port);
    info!("📄 测验页面片段: {}", url_fragment);
    info!("{}", "=".repeat(60));
}

/// 记录提取到的快照概要
pub fn log_snapshot_summary(snapshot: &QuizSnapshot) {
    info!("📋 快照: 共 {} 道题", snapshot.len());
    for q in snapshot.questions() {
        info!(
            "  [{}] {} （{} 个选项）",
            q.id,
            truncate_text(&q.text, 40),
            q.options.len()
        );
    }
}

/// 输出作答报告
pub fn log_apply_report(report: &ApplyReport) {
    info!("\n{}", "=".repeat(60));
    info!("📊 作答完成");
    info!("✅ 成功: {}/{}", report.applied_count(), report.outcomes().len());
    if !report.is_clean() {
        info!("❌ 未作答: {}", report.mismatch_count());
        for o in report.outcomes() {
            let reason = match o.kind {
                ApplyOutcomeKind::Applied => continue,
                ApplyOutcomeKind::UnmatchedQuestion => "题号不存在",
                ApplyOutcomeKind::UnmatchedOption => "答案超出选项范围",
                ApplyOutcomeKind::UnresolvedControl => "没有可用控件",
                ApplyOutcomeKind::ActivationFailed => "控件激活失败",
            };
            warn!("  题 {} (答案 {}): {}", o.question_id, o.answer, reason);
        }
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
