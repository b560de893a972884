//! 剪贴板后端

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ClipboardError;

/// 写剪贴板的能力
pub trait ClipboardBackend {
    fn name(&self) -> &'static str;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// 系统剪贴板
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// 打开系统剪贴板；无图形环境时返回错误，由调用方改用兜底方式
    pub fn open() -> Result<Self, ClipboardError> {
        arboard::Clipboard::new()
            .map(|inner| Self { inner })
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl ClipboardBackend for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// 通过 OSC 52 转义序列让终端写入剪贴板
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardBackend for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let sequence = format!("\x1b]52;c;{}\x07", STANDARD.encode(text));
        self.out
            .write_all(sequence.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        let mut backend = Osc52Clipboard::new(Vec::new());
        backend.write_text("hi").unwrap();
        let written = String::from_utf8(backend.into_inner()).unwrap();
        assert_eq!(written, "\x1b]52;c;aGk=\x07");
    }
}
