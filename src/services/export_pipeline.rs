//! 导出流程 - 业务能力层
//!
//! 截图 → 生成文件名 → 交给下载。是否允许导出由编排层判断

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use tracing::{debug, error};

use crate::config::EXPORT_FILE_PREFIX;
use crate::error::ExportError;
use crate::infrastructure::{extension_for_mime, CaptureOptions, DownloadSink, SnapshotCapture};
use crate::models::{ExportDocument, Snapshot};

/// 导出流程
pub struct ExportPipeline {
    capture: Arc<dyn SnapshotCapture>,
    downloads: Arc<dyn DownloadSink>,
    options: CaptureOptions,
    last_stamp: AtomicI64,
}

impl ExportPipeline {
    pub fn new(capture: Arc<dyn SnapshotCapture>, downloads: Arc<dyn DownloadSink>) -> Self {
        Self {
            capture,
            downloads,
            options: CaptureOptions::default(),
            last_stamp: AtomicI64::new(0),
        }
    }

    pub fn with_options(mut self, options: CaptureOptions) -> Self {
        self.options = options;
        self
    }

    /// 生成文件名：固定前缀 + 毫秒时间戳
    ///
    /// 同一毫秒内的多次导出时间戳顺延，保证进程内不重名
    pub fn next_file_name(&self, extension: &str) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let prev = self
            .last_stamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(now.max(last + 1)))
            .unwrap_or_else(|v| v);
        format!("{}{}.{}", EXPORT_FILE_PREFIX, now.max(prev + 1), extension)
    }

    /// 截图并命名
    pub async fn export_snapshot(&self, document: &ExportDocument) -> Result<Snapshot, ExportError> {
        let image_data_url = self
            .capture
            .capture(document, &self.options)
            .await
            .map_err(|e| {
                error!("截图失败: {}", e);
                match e {
                    ExportError::Capture(_) => e,
                    other => ExportError::Capture(other.to_string()),
                }
            })?;

        let mime = data_url_mime(&image_data_url)
            .ok_or_else(|| ExportError::InvalidImage("截图结果不是 data URL".to_string()))?;
        let file_name = self.next_file_name(extension_for_mime(mime));
        debug!("截图完成: {} ({})", file_name, mime);

        Ok(Snapshot {
            image_data_url,
            file_name,
        })
    }

    /// 触发下载
    pub async fn deliver(&self, snapshot: &Snapshot) -> Result<String, ExportError> {
        self.downloads
            .offer(&snapshot.file_name, &snapshot.image_data_url)
            .await
    }
}

fn data_url_mime(data_url: &str) -> Option<&str> {
    data_url
        .strip_prefix("data:")
        .and_then(|rest| rest.split([';', ',']).next())
        .filter(|mime| !mime.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{DirectoryDownloads, SvgCapture};

    fn pipeline(dir: &std::path::Path) -> ExportPipeline {
        ExportPipeline::new(Arc::new(SvgCapture::new()), Arc::new(DirectoryDownloads::new(dir)))
    }

    #[test]
    fn test_consecutive_file_names_are_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline(dir.path());
        let a = pipeline.next_file_name("png");
        let b = pipeline.next_file_name("png");
        assert_ne!(a, b);
        assert!(a.starts_with("Moments_Copy_"));
        assert!(a.ends_with(".png"));
    }

    #[test]
    fn test_data_url_mime() {
        assert_eq!(data_url_mime("data:image/png;base64,AA"), Some("image/png"));
        assert_eq!(data_url_mime("http://x"), None);
    }

    #[tokio::test]
    async fn test_export_and_deliver() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline(dir.path());
        let document = ExportDocument {
            notes: "周末".to_string(),
            markdown_html: "<p>ok</p>".to_string(),
            ..ExportDocument::default()
        };
        let snapshot = pipeline.export_snapshot(&document).await.unwrap();
        assert!(snapshot.file_name.ends_with(".svg"));
        let location = pipeline.deliver(&snapshot).await.unwrap();
        assert!(std::path::Path::new(&location).exists());
    }
}
