//! 复制能力 - 业务能力层
//!
//! 先写系统剪贴板，不可用时改用兜底方式；失败只返回 false，不向上抛错

use tracing::{debug, error};

use crate::infrastructure::{ClipboardBackend, Osc52Clipboard, SystemClipboard};

/// 剪贴板写入器
pub struct ClipboardWriter {
    primary: Option<Box<dyn ClipboardBackend>>,
    fallback: Option<Box<dyn ClipboardBackend>>,
}

impl ClipboardWriter {
    pub fn new(
        primary: Option<Box<dyn ClipboardBackend>>,
        fallback: Option<Box<dyn ClipboardBackend>>,
    ) -> Self {
        Self { primary, fallback }
    }

    /// 系统剪贴板优先，终端 OSC 52 兜底
    pub fn system() -> Self {
        let primary = match SystemClipboard::open() {
            Ok(clipboard) => Some(Box::new(clipboard) as Box<dyn ClipboardBackend>),
            Err(e) => {
                debug!("系统剪贴板不可用，将使用终端兜底: {}", e);
                None
            }
        };
        Self::new(primary, Some(Box::new(Osc52Clipboard::stdout())))
    }

    /// 写入文本
    ///
    /// # 返回
    /// 是否写入成功；空文本直接返回 false
    pub fn write(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let backend = match (self.primary.as_mut(), self.fallback.as_mut()) {
            (Some(primary), _) => primary,
            (None, Some(fallback)) => fallback,
            (None, None) => {
                error!("没有可用的剪贴板");
                return false;
            }
        };
        match backend.write_text(text) {
            Ok(()) => {
                debug!("已通过 {} 写入剪贴板，{} 字符", backend.name(), text.chars().count());
                true
            }
            Err(e) => {
                error!("Clipboard write failed: {}", e);
                false
            }
        }
    }
}
