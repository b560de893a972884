//! 基础设施层（Infrastructure）
//!
//! 对外部协作方只暴露能力：截图、下载、剪贴板、凭证存储、文案查找

pub mod capture;
pub mod clipboard;
pub mod download;
pub mod i18n;
pub mod session_store;

pub use capture::{CaptureOptions, SnapshotCapture, SvgCapture};
pub use clipboard::{ClipboardBackend, Osc52Clipboard, SystemClipboard};
pub use download::{decode_data_url, extension_for_mime, DirectoryDownloads, DownloadSink};
pub use i18n::{keys, Catalog, Translator};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};
