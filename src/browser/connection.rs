use anyhow::{bail, Result};
use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// 连接到已运行的浏览器并定位测验页面
///
/// 通过调试端口 attach 到用户已登录的浏览器，在已打开的标签页中
/// 查找 URL 包含 `url_fragment` 的那一个（即 quiz attempt 页面）。
/// 不会自己打开新页面：登录态和测验会话都在用户的标签页里。
pub async fn connect_to_quiz_page(port: u16, url_fragment: &str) -> Result<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("正在连接到浏览器: {}", browser_url);
    debug!("目标 URL 片段: {}", url_fragment);

    let (browser, mut handler) = Browser::connect(&browser_url).await.map_err(|e| {
        error!("连接浏览器失败: {}", e);
        e
    })?;
    debug!("浏览器连接成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let pages = browser.pages().await?;
    debug!("获取到 {} 个页面", pages.len());

    for p in pages.iter() {
        if let Ok(Some(url)) = p.url().await {
            debug!("检查页面: {}", url);
            if url.contains(url_fragment) {
                info!("✓ 找到测验页面: {}", url);
                return Ok((browser, p.clone()));
            }
        }
    }

    bail!(
        "没有找到 URL 包含 '{}' 的页面，请先在浏览器中打开测验页面",
        url_fragment
    )
}
