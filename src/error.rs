use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入校验错误
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 接口调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 导出错误
    #[error("导出错误: {0}")]
    Export(#[from] ExportError),
    /// 剪贴板错误
    #[error("剪贴板错误: {0}")]
    Clipboard(#[from] ClipboardError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件读写错误
    #[error("文件错误 ({path}): {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON解析失败: {0}")]
    Json(#[from] serde_json::Error),
}

/// 输入校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 图片超过大小限制
    #[error("文件过大: {size} 字节 (上限 {limit} 字节)")]
    FileTooLarge { size: u64, limit: u64 },
    /// 尚未选择图片
    #[error("尚未选择图片")]
    NoImageSelected,
}

/// API 调用错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 网络请求失败，或声明为 JSON 的响应体无法解析
    #[error("网络错误: {0}")]
    Network(String),
    /// 额度不足
    #[error("{message}")]
    InsufficientCredits { message: String },
    /// 成功状态码但响应结构不正确
    #[error("响应格式错误: {0}")]
    InvalidResponse(String),
    /// 其他非 2xx 响应
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        code: Option<String>,
    },
    /// 没有登录凭证或凭证失效
    #[error("未登录")]
    Unauthenticated,
    /// 注销账号失败
    #[error("注销失败: {0}")]
    DeleteFailed(String),
}

impl ApiError {
    /// 服务端返回的错误码（如果有）
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::InsufficientCredits { .. } => Some(crate::config::INSUFFICIENT_CREDITS_CODE),
            ApiError::Http { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// 展示给用户的错误信息
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(msg) | ApiError::InvalidResponse(msg) | ApiError::DeleteFailed(msg) => msg.clone(),
            ApiError::InsufficientCredits { message } | ApiError::Http { message, .. } => message.clone(),
            ApiError::Unauthenticated => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// 导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    /// 截图失败
    #[error("截图失败: {0}")]
    Capture(String),
    /// 下载（写入文件）失败
    #[error("保存文件失败 ({file_name}): {source}")]
    Download {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
    /// 截图结果不是合法的图片 data URL
    #[error("无效的图片数据: {0}")]
    InvalidImage(String),
}

/// 剪贴板错误
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("剪贴板不可用: {0}")]
    Unavailable(String),
    #[error("写入剪贴板失败: {0}")]
    WriteFailed(String),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置值不合法
    #[error("配置项 {var_name} 的值 '{value}' 不合法")]
    InvalidValue { var_name: String, value: String },
    /// 文案文件解析失败
    #[error("文案文件解析失败 ({path}): {message}")]
    LocaleParseFailed { path: String, message: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读写错误
    pub fn file(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File {
            path: path.into(),
            source,
        }
    }

    /// 是否为未登录错误（需要跳转登录）
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, AppError::Api(ApiError::Unauthenticated))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
