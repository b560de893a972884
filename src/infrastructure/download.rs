//! 下载能力：把导出的图片交给用户

use std::path::PathBuf;
use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::future::BoxFuture;
use futures::FutureExt;
use regex::Regex;
use tracing::info;

use crate::error::ExportError;

/// 下载能力（对应页面上点击下载链接）
pub trait DownloadSink: Send + Sync {
    /// 保存图片，返回保存位置的描述
    fn offer<'a>(&'a self, file_name: &'a str, data_url: &'a str) -> BoxFuture<'a, Result<String, ExportError>>;
}

/// 解析 `data:<mime>;base64,<data>`，返回 (mime, 字节)
pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>), ExportError> {
    static DATA_URL: OnceLock<Option<Regex>> = OnceLock::new();
    let re = DATA_URL
        .get_or_init(|| Regex::new(r"^data:([^;,]+);base64,(.*)$").ok())
        .as_ref()
        .ok_or_else(|| ExportError::InvalidImage("data URL 正则初始化失败".to_string()))?;

    let caps = re
        .captures(data_url)
        .ok_or_else(|| ExportError::InvalidImage("不是 base64 data URL".to_string()))?;
    let mime = caps[1].to_string();
    let bytes = STANDARD
        .decode(&caps[2])
        .map_err(|e| ExportError::InvalidImage(e.to_string()))?;
    Ok((mime, bytes))
}

/// 图片 MIME 对应的扩展名
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/svg+xml" => "svg",
        _ => "bin",
    }
}

/// 保存到本地目录
pub struct DirectoryDownloads {
    dir: PathBuf,
}

impl DirectoryDownloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectoryDownloads {
    fn offer<'a>(&'a self, file_name: &'a str, data_url: &'a str) -> BoxFuture<'a, Result<String, ExportError>> {
        async move {
            let (_, bytes) = decode_data_url(data_url)?;
            let to_download_error = |source: std::io::Error| ExportError::Download {
                file_name: file_name.to_string(),
                source,
            };
            tokio::fs::create_dir_all(&self.dir).await.map_err(to_download_error)?;
            let path = self.dir.join(file_name);
            tokio::fs::write(&path, bytes).await.map_err(to_download_error)?;
            info!("💾 已保存: {}", path.display());
            Ok(path.display().to_string())
        }
        .boxed()
    }
}
