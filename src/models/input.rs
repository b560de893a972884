//! 用户输入：选中的图片与备注

use std::path::Path;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tokio::fs;

use crate::config::{MAX_FILE_BYTES, NOTES_CHAR_LIMIT};
use crate::error::{AppError, AppResult, ValidationError};

/// 选中的图片文件（内容常驻内存，克隆开销很小）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    bytes: Arc<[u8]>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let name = name.into();
        let mime_type = mime_guess::from_path(&name)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();
        Self {
            name,
            mime_type,
            bytes: bytes.into(),
        }
    }

    /// 从磁盘读取图片
    pub async fn load(path: &Path) -> AppResult<Self> {
        let bytes = fs::read(path)
            .await
            .map_err(|e| AppError::file(path.display().to_string(), e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, bytes))
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// 编码为 `data:<mime>;base64,...`
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// 当前选中的输入
///
/// 不变量：`encoded_payload` 只可能对应当前的 `file`，任何文件变更都会清空它
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedInput {
    file: Option<ImageFile>,
    encoded_payload: Option<String>,
    notes: String,
}

impl SelectedInput {
    pub fn file(&self) -> Option<&ImageFile> {
        self.file.as_ref()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// 已缓存的编码结果
    pub fn cached_payload(&self) -> Option<&str> {
        self.encoded_payload.as_deref()
    }

    /// 选择新文件；超过大小上限时拒绝，原有选择保持不变
    pub fn select(&mut self, file: ImageFile) -> Result<(), ValidationError> {
        let size = file.size_bytes();
        if size > MAX_FILE_BYTES {
            return Err(ValidationError::FileTooLarge {
                size,
                limit: MAX_FILE_BYTES,
            });
        }
        self.file = Some(file);
        self.encoded_payload = None;
        Ok(())
    }

    /// 提交前检查：必须已选择图片
    pub fn require_file(&self) -> Result<&ImageFile, ValidationError> {
        self.file.as_ref().ok_or(ValidationError::NoImageSelected)
    }

    /// 更新备注，超出上限的部分直接截断
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = truncate_notes(notes);
    }

    /// 需要时编码并缓存，返回编码结果（没有文件时为 None）
    pub fn ensure_payload(&mut self) -> Option<&str> {
        if self.encoded_payload.is_none() {
            self.encoded_payload = self.file.as_ref().map(ImageFile::to_data_url);
        }
        self.encoded_payload.as_deref()
    }

    /// 不写缓存地取得编码结果
    pub fn payload(&self) -> String {
        match (&self.encoded_payload, &self.file) {
            (Some(payload), _) => payload.clone(),
            (None, Some(file)) => file.to_data_url(),
            (None, None) => String::new(),
        }
    }

    /// 字数统计 `n/500`
    pub fn char_count_label(&self) -> String {
        format!("{}/{}", self.notes.chars().count(), NOTES_CHAR_LIMIT)
    }
}

/// 按字符截断备注
pub fn truncate_notes(notes: &str) -> String {
    notes.chars().take(NOTES_CHAR_LIMIT).collect()
}
