//! 异步任务 - 编排层
//!
//! 状态转换产生的 `Analyze` / `Export` 副作用在这里执行，
//! 执行结果以 `Event` 的形式交回状态机

use std::sync::Arc;

use tracing::debug;

use crate::clients::{AnalyzeOptions, ApiClient, PromptLoader};
use crate::error::ApiError;
use crate::models::{ExportDocument, SelectedInput};
use crate::services::{ExportPipeline, RequestComposer, ResultRenderer};
use crate::utils::truncate_text;
use crate::workflow::{AnalysisTask, Event, ExportTask};

/// 一次分析需要的全部协作方：模板 → 组装 → 调用 → 渲染
pub struct AnalysisPipeline {
    prompts: PromptLoader,
    composer: RequestComposer,
    api: ApiClient,
    renderer: ResultRenderer,
}

impl AnalysisPipeline {
    pub fn new(prompts: PromptLoader, composer: RequestComposer, api: ApiClient, renderer: ResultRenderer) -> Self {
        Self {
            prompts,
            composer,
            api,
            renderer,
        }
    }

    /// 执行分析任务，成功失败都转换成事件
    pub async fn run(&self, task: AnalysisTask) -> Event {
        let ticket = task.ticket;
        let Some(token) = task.token.as_deref() else {
            return Event::AnalysisFailed {
                ticket,
                error: ApiError::Unauthenticated,
            };
        };

        let template = self.prompts.load().await;
        let request = self.composer.compose(&task.input, &template);
        debug!(
            "任务 {}: 正文 {} 字符，图片编码 {} 字节，备注: {}",
            ticket,
            request.composed_text.chars().count(),
            request.image_payload.len(),
            truncate_text(&request.raw_user_notes, 30)
        );

        let options = AnalyzeOptions {
            token,
            trace: task.trace,
        };
        match self.api.analyze(&request, &options).await {
            Ok(result) => {
                let rendered = self
                    .renderer
                    .render(&result.markdown, result.image_analysis.as_deref(), task.show_analysis);
                let export_document = self.export_document(&task.input, &result.markdown);
                Event::AnalysisSucceeded {
                    ticket,
                    result,
                    rendered,
                    export_document,
                }
            }
            Err(error) => Event::AnalysisFailed { ticket, error },
        }
    }

    /// 准备导出卡片：图片、备注（或占位）、报告与日期
    fn export_document(&self, input: &SelectedInput, markdown: &str) -> ExportDocument {
        let notes = input.notes().trim();
        ExportDocument {
            preview_image: input.payload(),
            notes: if notes.is_empty() {
                self.composer.no_notes_placeholder().to_string()
            } else {
                notes.to_string()
            },
            markdown_html: self.renderer.markdown_html(markdown),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

/// 待执行的异步任务
pub enum Job {
    Analysis {
        task: AnalysisTask,
        pipeline: Arc<AnalysisPipeline>,
    },
    Export {
        task: ExportTask,
        pipeline: Arc<ExportPipeline>,
    },
}

impl Job {
    /// 执行任务并返回完成事件
    pub async fn run(self) -> Event {
        match self {
            Job::Analysis { task, pipeline } => pipeline.run(task).await,
            Job::Export { task, pipeline } => {
                let ticket = task.ticket;
                let outcome = match pipeline.export_snapshot(&task.document).await {
                    Ok(snapshot) => match pipeline.deliver(&snapshot).await {
                        Ok(location) => {
                            debug!("导出任务 {} 完成: {}", ticket, location);
                            Ok(snapshot)
                        }
                        Err(e) => Err(e.to_string()),
                    },
                    Err(e) => Err(e.to_string()),
                };
                Event::ExportFinished { ticket, outcome }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Job::Analysis { .. } => "analysis",
            Job::Export { .. } => "export",
        }
    }
}
