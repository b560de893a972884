use serde::Serialize;
use serde_json::Value as JsonValue;

/// 单次提交构建的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// 图片编码（可能为空，为空时走纯文本接口）
    pub image_payload: String,
    /// 提示词模板 + 备注段落
    pub composed_text: String,
    pub scenario: String,
    /// 用户原始备注（已 trim）
    pub raw_user_notes: String,
}

impl AnalysisRequest {
    pub fn has_image(&self) -> bool {
        !self.image_payload.is_empty()
    }
}

/// 解析接口的成功结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    pub markdown: String,
    pub image_analysis: Option<String>,
    pub credits: Option<i64>,
    /// 服务端调试信息，是否展示由编排层决定
    pub debug_trace: Option<JsonValue>,
}

/// 渲染后的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedResult {
    pub html: String,
    /// 原始 markdown
    pub raw_text: String,
    /// 渲染内容的纯文本，供"复制优化文案"使用
    pub plain_text: String,
    /// 仅当有图片分析且开关打开时非空
    pub analysis_display_text: String,
    /// 渲染时使用的开关状态
    pub show_analysis: bool,
}

/// 导出卡片：截图的对象
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    /// 选中图片的 data URL
    pub preview_image: String,
    /// 备注或"无备注"占位
    pub notes: String,
    /// 报告 HTML（XHTML 片段，可直接嵌入 SVG）
    pub markdown_html: String,
    /// 本地日期
    pub date: String,
}

/// 一次成功导出的产物
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub image_data_url: String,
    pub file_name: String,
}
