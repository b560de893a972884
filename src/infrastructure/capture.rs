//! 截图能力
//!
//! 把导出卡片（`ExportDocument`）截成图片，返回图片的 data URL

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::future::BoxFuture;
use futures::FutureExt;
use pulldown_cmark::escape::escape_html;

use crate::error::ExportError;
use crate::models::ExportDocument;

/// 截图参数
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOptions {
    /// 像素倍率
    pub scale: f32,
    /// 背景色
    pub background_color: String,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background_color: "#ffffff".to_string(),
        }
    }
}

/// 截图能力（对应页面上的 `captureNode`）
pub trait SnapshotCapture: Send + Sync {
    fn capture<'a>(
        &'a self,
        document: &'a ExportDocument,
        options: &'a CaptureOptions,
    ) -> BoxFuture<'a, Result<String, ExportError>>;
}

const CARD_WIDTH: u32 = 375;
const CARD_BASE_HEIGHT: u32 = 560;
const LINE_HEIGHT: u32 = 22;

/// 以 SVG foreignObject 包裹卡片 HTML 生成图片
#[derive(Debug, Default, Clone)]
pub struct SvgCapture;

impl SvgCapture {
    pub fn new() -> Self {
        Self
    }

    fn render(document: &ExportDocument, options: &CaptureOptions) -> Result<String, ExportError> {
        if options.scale <= 0.0 || !options.scale.is_finite() {
            return Err(ExportError::Capture(format!("非法的缩放倍率: {}", options.scale)));
        }

        let notes = escape(&document.notes)?;
        let date = escape(&document.date)?;
        let image = escape(&document.preview_image)?;

        let text_lines = document.notes.lines().count() as u32 + document.markdown_html.matches("</").count() as u32;
        let height = CARD_BASE_HEIGHT + text_lines * LINE_HEIGHT;
        let width_px = (CARD_WIDTH as f32 * options.scale).round() as u32;
        let height_px = (height as f32 * options.scale).round() as u32;

        let image_tag = if document.preview_image.is_empty() {
            String::new()
        } else {
            format!(r#"<img src="{}" style="width:100%;border-radius:12px" />"#, image)
        };

        Ok(format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {vw} {vh}">"#,
                r#"<rect width="100%" height="100%" fill="{bg}" />"#,
                r#"<foreignObject x="0" y="0" width="{vw}" height="{vh}">"#,
                r#"<div xmlns="http://www.w3.org/1999/xhtml" style="font-family:sans-serif;padding:16px">"#,
                r#"{img}<p style="color:#374151">{notes}</p><div>{md}</div>"#,
                r#"<p style="color:#9ca3af;font-size:12px">{date}</p>"#,
                r#"</div></foreignObject></svg>"#
            ),
            w = width_px,
            h = height_px,
            vw = CARD_WIDTH,
            vh = height,
            bg = options.background_color,
            img = image_tag,
            notes = notes,
            md = document.markdown_html,
            date = date,
        ))
    }
}

impl SnapshotCapture for SvgCapture {
    fn capture<'a>(
        &'a self,
        document: &'a ExportDocument,
        options: &'a CaptureOptions,
    ) -> BoxFuture<'a, Result<String, ExportError>> {
        async move {
            let svg = Self::render(document, options)?;
            Ok(format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg)))
        }
        .boxed()
    }
}

fn escape(text: &str) -> Result<String, ExportError> {
    let mut out = String::with_capacity(text.len());
    escape_html(&mut out, text).map_err(|e| ExportError::Capture(e.to_string()))?;
    Ok(out)
}
