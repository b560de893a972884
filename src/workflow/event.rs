//! 工作流的输入（事件）与输出（副作用）

use crate::error::ApiError;
use crate::models::{AnalysisResult, ExportDocument, ImageFile, RenderedResult, SelectedInput, Snapshot, UserProfile};
use crate::workflow::state::Ticket;

/// 用户操作或异步任务完成
#[derive(Debug, Clone)]
pub enum Event {
    FileSelected(ImageFile),
    /// 读取文件失败（读取在编排层完成）
    FileReadFailed(String),
    NotesEdited(String),
    SubmitRequested,
    AnalysisSucceeded {
        ticket: Ticket,
        result: AnalysisResult,
        rendered: RenderedResult,
        export_document: ExportDocument,
    },
    AnalysisFailed {
        ticket: Ticket,
        error: ApiError,
    },
    ExportRequested,
    ExportFinished {
        ticket: Ticket,
        outcome: Result<Snapshot, String>,
    },
    CopyRequested,
    CopyRawRequested,
    AnalysisToggled(bool),
    DebugToggled(bool),
    SessionLoaded(UserProfile),
    Reset,
}

/// 需要展示给用户的提示：文案键 + 可选的附加信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub key: &'static str,
    pub detail: Option<String>,
    pub is_error: bool,
}

impl Notice {
    pub fn info(key: &'static str) -> Self {
        Self {
            key,
            detail: None,
            is_error: false,
        }
    }

    pub fn error(key: &'static str) -> Self {
        Self {
            key,
            detail: None,
            is_error: true,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// 一次分析任务所需的全部输入（提交时的快照）
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisTask {
    pub ticket: Ticket,
    pub input: SelectedInput,
    pub token: Option<String>,
    /// 是否附带调试追踪请求头
    pub trace: bool,
    /// 提交时"显示图片分析"开关的状态
    pub show_analysis: bool,
}

/// 一次导出任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTask {
    pub ticket: Ticket,
    pub document: ExportDocument,
}

/// 状态转换产生的副作用，由编排层执行
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// 模态提示
    Alert(Notice),
    /// 临时提示条
    Feedback(Notice),
    Analyze(AnalysisTask),
    Export(ExportTask),
    /// 写剪贴板；`announce` 为 false 时成功失败都不提示
    Copy { text: String, announce: bool },
}
