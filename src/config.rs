/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 浏览器调试端口
    pub browser_debug_port: u16,
    /// 用于在已打开的标签页中定位测验页面的 URL 片段
    pub quiz_url_fragment: String,
    /// 答案解析服务的接口地址
    pub resolver_endpoint: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser_debug_port: 2001,
            quiz_url_fragment: "/d2l/lms/quizzing/user/attempt".to_string(),
            resolver_endpoint: "http://127.0.0.1:8300/api/quiz/resolve".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.browser_debug_port),
            quiz_url_fragment: std::env::var("QUIZ_URL_FRAGMENT").unwrap_or(default.quiz_url_fragment),
            resolver_endpoint: std::env::var("RESOLVER_ENDPOINT").unwrap_or(default.resolver_endpoint),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
