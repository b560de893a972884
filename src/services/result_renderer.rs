//! 结果渲染 - 业务能力层
//!
//! 把 markdown 报告与图片分析转换为展示内容，不关心网络与状态

use pulldown_cmark::escape::escape_html;
use pulldown_cmark::{html, Event, Options, Parser, Tag};

use crate::infrastructure::{keys, Translator};
use crate::models::RenderedResult;

/// markdown 渲染能力（对应页面上的 `renderMarkdown`）
pub trait MarkdownRenderer: Send + Sync {
    fn to_html(&self, markdown: &str) -> String;
    /// 可嵌入 XML 的渲染结果，原始 HTML 片段按文本输出
    fn to_xhtml(&self, markdown: &str) -> String;
    /// 渲染后的可见文本
    fn to_plain_text(&self, markdown: &str) -> String;
}

/// 基于 pulldown-cmark 的渲染
#[derive(Debug, Default, Clone, Copy)]
pub struct CmarkRenderer;

impl CmarkRenderer {
    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::options());
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }

    fn to_xhtml(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::options()).map(|event| match event {
            Event::Html(raw) => Event::Text(raw),
            other => other,
        });
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }

    fn to_plain_text(&self, markdown: &str) -> String {
        let mut out = String::new();
        for event in Parser::new_ext(markdown, Self::options()) {
            match event {
                Event::Text(text) | Event::Code(text) => out.push_str(&text),
                Event::SoftBreak | Event::HardBreak => out.push('\n'),
                Event::End(tag)
                    if matches!(
                        tag,
                        Tag::Paragraph
                            | Tag::Heading(..)
                            | Tag::Item
                            | Tag::CodeBlock(_)
                            | Tag::BlockQuote
                            | Tag::TableRow
                            | Tag::TableHead
                    ) =>
                {
                    out.push('\n')
                }
                Event::End(Tag::TableCell) => out.push('\t'),
                _ => {}
            }
        }
        out.trim().to_string()
    }
}

/// 图片分析的展示文本：有内容且开关打开时才显示
pub fn analysis_display(analysis: Option<&str>, show_analysis: bool) -> String {
    match analysis {
        Some(text) if show_analysis && !text.is_empty() => text.to_string(),
        _ => String::new(),
    }
}

/// 结果渲染器
pub struct ResultRenderer {
    markdown: Box<dyn MarkdownRenderer>,
    empty_placeholder: String,
}

impl ResultRenderer {
    pub fn new(markdown: Box<dyn MarkdownRenderer>, translator: &dyn Translator) -> Self {
        Self::with_placeholder(markdown, translator.t(keys::NO_ANALYSIS_CONTENT))
    }

    pub fn with_placeholder(markdown: Box<dyn MarkdownRenderer>, empty_placeholder: impl Into<String>) -> Self {
        Self {
            markdown,
            empty_placeholder: empty_placeholder.into(),
        }
    }

    /// 渲染报告
    ///
    /// 空报告渲染为占位提示，而不是空内容
    pub fn render(&self, markdown: &str, analysis_text: Option<&str>, show_analysis: bool) -> RenderedResult {
        let (html, plain_text) = if markdown.is_empty() {
            let mut escaped = String::new();
            // 写入 String 不会失败
            let _ = escape_html(&mut escaped, &self.empty_placeholder);
            (
                format!(r#"<p class="text-sm text-gray-500">{}</p>"#, escaped),
                self.empty_placeholder.clone(),
            )
        } else {
            (self.markdown.to_html(markdown), self.markdown.to_plain_text(markdown))
        };

        RenderedResult {
            html,
            raw_text: markdown.to_string(),
            plain_text,
            analysis_display_text: analysis_display(analysis_text, show_analysis),
            show_analysis,
        }
    }

    /// 仅渲染 markdown（导出卡片使用，空报告不加占位）
    pub fn markdown_html(&self, markdown: &str) -> String {
        if markdown.is_empty() {
            String::new()
        } else {
            self.markdown.to_xhtml(markdown)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> ResultRenderer {
        ResultRenderer::with_placeholder(Box::new(CmarkRenderer), "暂无内容")
    }

    #[test]
    fn test_render_markdown() {
        let rendered = renderer().render("# 标题\n\n正文 **加粗**", None, true);
        assert!(rendered.html.contains("<h1>标题</h1>"));
        assert!(rendered.html.contains("<strong>加粗</strong>"));
        assert_eq!(rendered.plain_text, "标题\n正文 加粗");
        assert_eq!(rendered.raw_text, "# 标题\n\n正文 **加粗**");
    }

    #[test]
    fn test_empty_markdown_renders_placeholder() {
        let rendered = renderer().render("", None, false);
        assert!(rendered.html.contains("暂无内容"));
        assert_eq!(rendered.plain_text, "暂无内容");
        assert!(rendered.raw_text.is_empty());
        assert!(renderer().markdown_html("").is_empty());
    }

    #[test]
    fn test_card_html_escapes_raw_html() {
        let html = renderer().markdown_html("第一行<br>第二行\n\n<div class=\"x\">块</div>\n\n---");
        assert!(!html.contains("<br>"));
        assert!(!html.contains("<div"));
        assert!(html.contains("&lt;br&gt;"));
        assert!(html.contains("<hr />"));
        // 页面展示保留原始 HTML
        assert!(renderer().render("a<br>b", None, true).html.contains("<br>"));
    }

    #[test]
    fn test_analysis_display_requires_text_and_switch() {
        assert_eq!(renderer().render("ok", Some("猫"), true).analysis_display_text, "猫");
        assert_eq!(renderer().render("ok", Some("猫"), false).analysis_display_text, "");
        assert_eq!(renderer().render("ok", Some(""), true).analysis_display_text, "");
        assert_eq!(renderer().render("ok", None, true).analysis_display_text, "");
        assert!(!renderer().render("ok", Some("猫"), false).show_analysis);
    }
}
