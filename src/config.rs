use crate::error::ConfigError;

/// 备注最大字符数（超出部分截断，不报错）
pub const NOTES_CHAR_LIMIT: usize = 500;
/// 图片大小上限：5 MiB
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;
/// 操作反馈自动消失时间（毫秒）
pub const FEEDBACK_DISMISS_MS: u64 = 2200;
/// 导出文件名前缀
pub const EXPORT_FILE_PREFIX: &str = "Moments_Copy_";
/// 服务端额度不足时返回的错误码
pub const INSUFFICIENT_CREDITS_CODE: &str = "INSUFFICIENT_CREDITS";

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 后端服务地址
    pub api_base_url: String,
    /// 提示词模板的静态资源路径
    pub prompt_path: String,
    /// 每次请求携带的场景标识
    pub scenario: String,
    /// 登录凭证存放文件
    pub session_file: String,
    /// 导出图片的下载目录
    pub download_dir: String,
    /// 文案覆盖文件（TOML，可选）
    pub locale_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:3000".to_string(),
            prompt_path: "/prompts/MOMENT_SCENARIO.txt".to_string(),
            scenario: "moment".to_string(),
            session_file: ".moment_session.json".to_string(),
            download_dir: "downloads".to_string(),
            locale_file: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(default.api_base_url),
            prompt_path: std::env::var("PROMPT_PATH").unwrap_or(default.prompt_path),
            scenario: std::env::var("SCENARIO").unwrap_or(default.scenario),
            session_file: std::env::var("SESSION_FILE").unwrap_or(default.session_file),
            download_dir: std::env::var("DOWNLOAD_DIR").unwrap_or(default.download_dir),
            locale_file: std::env::var("LOCALE_FILE").ok().or(default.locale_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 校验配置是否可用
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                var_name: "API_BASE_URL".to_string(),
                value: self.api_base_url.clone(),
            });
        }
        if self.scenario.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var_name: "SCENARIO".to_string(),
                value: self.scenario.clone(),
            });
        }
        Ok(())
    }
}

/// 拼接 base url 与路径，避免出现双斜杠
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
