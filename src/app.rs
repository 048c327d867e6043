//! 应用编排层
//!
//! 连接浏览器、定位测验页面，把适配器 / 解析客户端 / 激活器
//! 接到运行控制器上跑一次完整流水线，最后输出报告。

use anyhow::Result;
use chromiumoxide::Browser;
use tracing::{info, warn};

use crate::browser::connect_to_quiz_page;
use crate::config::Config;
use crate::dom::{LiveActivator, LivePageDom};
use crate::infrastructure::JsExecutor;
use crate::services::HttpResolver;
use crate::utils::logging;
use crate::workflow::{RunController, RunOutcome};

/// 应用主结构
pub struct App {
    config: Config,
    // 连接必须存活到运行结束，否则 page 会失效
    _browser: Browser,
    executor: JsExecutor,
}

impl App {
    /// 初始化应用：建日志文件、连浏览器、定位测验页面
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::init_log_file(&config.output_log_file)?;
        logging::log_startup(config.browser_debug_port, &config.quiz_url_fragment);

        let (browser, page) =
            connect_to_quiz_page(config.browser_debug_port, &config.quiz_url_fragment).await?;

        Ok(Self {
            config,
            _browser: browser,
            executor: JsExecutor::new(page),
        })
    }

    /// 跑一次完整流水线：快照 → 提取 → 解析 → 作答
    pub async fn run(&self) -> Result<()> {
        let dom = LivePageDom::capture(&self.executor).await?;
        let resolver = HttpResolver::new(&self.config);
        let activator = LiveActivator::new(&self.executor);

        let mut controller = RunController::new();
        match controller.run(&dom, &resolver, &activator).await? {
            RunOutcome::NoQuestions => {
                info!("页面上没有题目，无事可做");
            }
            RunOutcome::AlreadyRan => {
                warn!("控制器已经跑过，忽略");
            }
            RunOutcome::Applied(report) => {
                logging::log_apply_report(&report);
            }
        }
        Ok(())
    }
}
