//! 文案查找
//!
//! 内置中文文案，可用 TOML 文件覆盖。TOML 中的嵌套表按 `.` 拼接成键，
//! 例如 `[parse] copySuccess = "..."` 对应 `parse.copySuccess`

use std::collections::HashMap;
use std::path::Path;

use phf::phf_map;

use crate::error::{AppError, AppResult, ConfigError};

/// 文案查找能力
pub trait Translator: Send + Sync {
    /// 查找文案并替换 `{name}` 占位符；找不到时返回键本身
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String;

    fn t(&self, key: &str) -> String {
        self.translate(key, &[])
    }
}

/// 文案键
pub mod keys {
    pub const STATUS_PENDING: &str = "parse.statusPending";
    pub const FILE_SELECTED: &str = "parse.fileSelected";
    pub const STATUS_GENERATING: &str = "parse.statusGenerating";
    pub const STATUS_GENERATED: &str = "parse.statusGenerated";
    pub const STATUS_FAILED: &str = "parse.statusFailed";
    pub const GENERATING: &str = "parse.generating";
    pub const CUSTOM_INPUT_PREFIX: &str = "parse.customInputPrefix";
    pub const NO_NOTES: &str = "parse.noNotes";
    pub const NO_ANALYSIS_CONTENT: &str = "parse.noAnalysisContent";
    pub const NO_RAW_TEXT: &str = "parse.noRawText";
    pub const IMAGE_POINTS_PREFIX: &str = "parse.imagePointsPrefix";
    pub const ALERT_NO_IMAGE: &str = "parse.alertNoImage";
    pub const ALERT_FILE_TOO_LARGE: &str = "parse.alertFileTooLarge";
    pub const ALERT_FILE_READ_FAIL: &str = "parse.alertFileReadFail";
    pub const ALERT_CREDITS: &str = "parse.alertCredits";
    pub const ALERT_NO_EXPORT: &str = "parse.alertNoExport";
    pub const ALERT_EXPORT_FAIL: &str = "parse.alertExportFail";
    pub const PREVIEW_READY: &str = "parse.previewReady";
    pub const COPY_NO_CONTENT: &str = "parse.copyNoContent";
    pub const COPY_SUCCESS: &str = "parse.copySuccess";
    pub const COPY_FAIL: &str = "parse.copyFail";
    pub const DELETE_CONFIRM_KEYWORD: &str = "profile.deleteConfirmKeyword";
    pub const DELETE_CONFIRM_PROMPT: &str = "profile.deleteConfirmPrompt";
    pub const DELETE_FAILED: &str = "profile.deleteFailed";
    pub const DELETE_SUCCESS: &str = "profile.deleteSuccess";
}

static DEFAULT_MESSAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "parse.statusPending" => "等待上传",
    "parse.fileSelected" => "已选择图片",
    "parse.statusGenerating" => "生成中",
    "parse.statusGenerated" => "已生成",
    "parse.statusFailed" => "生成失败",
    "parse.generating" => "正在生成...",
    "parse.customInputPrefix" => "用户补充说明：",
    "parse.noNotes" => "（无补充说明）",
    "parse.noAnalysisContent" => "暂无解析内容",
    "parse.noRawText" => "暂无原始文本",
    "parse.imagePointsPrefix" => "图片要点：",
    "parse.alertNoImage" => "请先选择一张图片",
    "parse.alertFileTooLarge" => "图片不能超过 5MB",
    "parse.alertFileReadFail" => "读取图片失败",
    "parse.alertCredits" => "额度不足，请联系管理员充值",
    "parse.alertNoExport" => "请先上传图片并生成文案",
    "parse.alertExportFail" => "导出失败",
    "parse.previewReady" => "已保存预览图",
    "parse.copyNoContent" => "没有可复制的内容",
    "parse.copySuccess" => "已复制到剪贴板",
    "parse.copyFail" => "复制失败，请手动复制",
    "profile.deleteConfirmKeyword" => "DELETE",
    "profile.deleteConfirmPrompt" => "此操作不可恢复，请输入 {keyword} 确认注销账号",
    "profile.deleteFailed" => "注销失败",
    "profile.deleteSuccess" => "账号已注销",
};

/// 内置文案 + 可选覆盖
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    overrides: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 TOML 字符串加载覆盖文案
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(content)?;
        let mut overrides = HashMap::new();
        flatten_table("", &table, &mut overrides);
        Ok(Self { overrides })
    }

    /// 从文件加载覆盖文案
    pub async fn load(path: &Path) -> AppResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file(path.display().to_string(), e))?;
        Self::from_toml_str(&content).map_err(|e| {
            ConfigError::LocaleParseFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .get(key)
            .map(String::as_str)
            .or_else(|| DEFAULT_MESSAGES.get(key).copied())
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut text = self.lookup(key).unwrap_or(key).to_string();
        for (name, value) in params {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

fn flatten_table(prefix: &str, table: &toml::Table, out: &mut HashMap<String, String>) {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            toml::Value::Table(inner) => flatten_table(&full_key, inner, out),
            toml::Value::String(s) => {
                out.insert(full_key, s.clone());
            }
            other => {
                out.insert(full_key, other.to_string());
            }
        }
    }
}
