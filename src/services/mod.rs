//! 业务能力层（Services）
//!
//! 每个模块只提供一种能力，不持有工作流状态：
//! 请求组装、结果渲染、导出、复制、临时提示

pub mod clipboard;
pub mod export_pipeline;
pub mod feedback;
pub mod request_composer;
pub mod result_renderer;

pub use clipboard::ClipboardWriter;
pub use export_pipeline::ExportPipeline;
pub use feedback::{FeedbackBanner, FeedbackMessage};
pub use request_composer::RequestComposer;
pub use result_renderer::{analysis_display, CmarkRenderer, MarkdownRenderer, ResultRenderer};
