//! 工作台 - 编排层
//!
//! ## 职责
//!
//! 持有 `OrchestratorState`，把事件交给纯状态转换，再执行产生的副作用：
//!
//! - 提示（模态提示 / 临时提示条）与剪贴板写入：同步执行
//! - 分析与导出：包装成 `Job` 返回，调用方 `run().await` 后把事件交回 `apply`
//!
//! `dispatch` 把这个循环跑到底，适合顺序执行的调用方（命令行、测试）

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::infrastructure::{keys, Translator};
use crate::models::Session;
use crate::orchestrator::jobs::{AnalysisPipeline, Job};
use crate::services::{ClipboardWriter, ExportPipeline, FeedbackBanner, FeedbackMessage};
use crate::workflow::{transition, Effect, Event, Notice, OrchestratorState};

/// 工作台
pub struct Workbench {
    state: OrchestratorState,
    analysis: Arc<AnalysisPipeline>,
    export: Arc<ExportPipeline>,
    clipboard: ClipboardWriter,
    translator: Arc<dyn Translator>,
    feedback: FeedbackBanner,
    alerts: Vec<String>,
}

impl Workbench {
    pub fn new(
        session: Session,
        analysis: Arc<AnalysisPipeline>,
        export: Arc<ExportPipeline>,
        clipboard: ClipboardWriter,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            state: OrchestratorState::new(session),
            analysis,
            export,
            clipboard,
            translator,
            feedback: FeedbackBanner::default(),
            alerts: Vec::new(),
        }
    }

    pub fn state(&self) -> &OrchestratorState {
        &self.state
    }

    /// 当前可见的临时提示
    pub fn feedback(&self) -> Option<&FeedbackMessage> {
        self.feedback.current()
    }

    /// 取出累积的模态提示
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// 处理一个事件
    ///
    /// # 返回
    /// 需要异步执行的任务；完成后把 `Job::run` 的结果再交给本方法
    pub fn apply(&mut self, event: Event) -> Vec<Job> {
        let before = self.state.workflow.name();
        let state = std::mem::take(&mut self.state);
        let (next, effects) = transition(state, event);
        self.state = next;
        if before != self.state.workflow.name() {
            debug!("状态变化: {} → {}", before, self.state.workflow.name());
        }

        let mut jobs = Vec::new();
        for effect in effects {
            match effect {
                Effect::Alert(notice) => {
                    let text = self.notice_text(&notice);
                    warn!("⚠️ {}", text);
                    self.alerts.push(text);
                }
                Effect::Feedback(notice) => {
                    let text = self.notice_text(&notice);
                    self.feedback.show(text, notice.is_error);
                }
                Effect::Copy { text, announce } => {
                    let copied = self.clipboard.write(&text);
                    if announce {
                        let notice = if copied {
                            Notice::info(keys::COPY_SUCCESS)
                        } else {
                            Notice::error(keys::COPY_FAIL)
                        };
                        let message = self.notice_text(&notice);
                        self.feedback.show(message, notice.is_error);
                    }
                }
                Effect::Analyze(task) => jobs.push(Job::Analysis {
                    task,
                    pipeline: Arc::clone(&self.analysis),
                }),
                Effect::Export(task) => jobs.push(Job::Export {
                    task,
                    pipeline: Arc::clone(&self.export),
                }),
            }
        }
        jobs
    }

    /// 处理事件并顺序执行所有后续任务，直到没有待执行的任务
    pub async fn dispatch(&mut self, event: Event) {
        let mut pending: VecDeque<Job> = self.apply(event).into();
        while let Some(job) = pending.pop_front() {
            info!("▶️ 执行任务: {}", job.name());
            let done = job.run().await;
            pending.extend(self.apply(done));
        }
    }

    /// 把提示翻译成用户可见文本
    pub fn notice_text(&self, notice: &Notice) -> String {
        let text = self.translator.t(notice.key);
        match &notice.detail {
            Some(detail) => format!("{}: {}", text, detail),
            None => text,
        }
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }
}
