//! 工作流状态
//!
//! 页面上"用户此刻在做什么"的全部信息都收拢在 `OrchestratorState` 里，
//! 由 `transition` 整体接收、整体返回

use std::fmt;

use serde_json::Value as JsonValue;

use crate::infrastructure::keys;
use crate::models::{ExportDocument, SelectedInput, Session, Snapshot};

/// 每次提交/导出的票据，用于识别过期的异步结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 状态徽标颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Blue,
    Gray,
    Green,
    Red,
}

impl StatusColor {
    /// 终端前景色（ANSI SGR 参数）
    pub fn ansi_code(&self) -> &'static str {
        match self {
            StatusColor::Blue => "34",
            StatusColor::Gray => "90",
            StatusColor::Green => "32",
            StatusColor::Red => "31",
        }
    }
}

/// 六个工作流状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WorkflowState {
    #[default]
    Idle,
    InputReady,
    Submitting {
        ticket: Ticket,
    },
    Rendered,
    Failed {
        message: String,
        code: Option<String>,
    },
    Exporting {
        ticket: Ticket,
    },
}

impl WorkflowState {
    /// 状态徽标的文案键
    pub fn status_key(&self) -> &'static str {
        match self {
            WorkflowState::Idle => keys::STATUS_PENDING,
            WorkflowState::InputReady => keys::FILE_SELECTED,
            WorkflowState::Submitting { .. } => keys::STATUS_GENERATING,
            WorkflowState::Rendered | WorkflowState::Exporting { .. } => keys::STATUS_GENERATED,
            WorkflowState::Failed { .. } => keys::STATUS_FAILED,
        }
    }

    pub fn status_color(&self) -> StatusColor {
        match self {
            WorkflowState::Idle | WorkflowState::InputReady => StatusColor::Blue,
            WorkflowState::Submitting { .. } => StatusColor::Gray,
            WorkflowState::Rendered | WorkflowState::Exporting { .. } => StatusColor::Green,
            WorkflowState::Failed { .. } => StatusColor::Red,
        }
    }

    /// 提交按钮是否可用
    pub fn can_submit(&self) -> bool {
        !matches!(self, WorkflowState::Submitting { .. } | WorkflowState::Exporting { .. })
    }

    /// 导出按钮是否可用
    pub fn can_export(&self) -> bool {
        matches!(self, WorkflowState::Rendered)
    }

    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "Idle",
            WorkflowState::InputReady => "InputReady",
            WorkflowState::Submitting { .. } => "Submitting",
            WorkflowState::Rendered => "Rendered",
            WorkflowState::Failed { .. } => "Failed",
            WorkflowState::Exporting { .. } => "Exporting",
        }
    }
}

/// 结果区域显示的内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultPanel {
    /// 初始占位（结果区隐藏）
    #[default]
    Placeholder,
    Report {
        html: String,
        plain_text: String,
    },
    /// 失败时的行内错误
    Error {
        message: String,
    },
}

/// 结果区域
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultView {
    pub panel: ResultPanel,
    /// 原始 markdown，为空时隐藏原文区并禁用"复制原文"
    pub raw_text: String,
    /// 最近一次成功结果的图片分析
    pub analysis_source: Option<String>,
    /// 当前应显示的图片分析（受开关过滤）
    pub analysis_display: String,
}

impl ResultView {
    /// 结果区当前可复制的渲染文本
    pub fn report_text(&self) -> Option<&str> {
        match &self.panel {
            ResultPanel::Report { plain_text, .. } => Some(plain_text.trim()).filter(|t| !t.is_empty()),
            _ => None,
        }
    }

    pub fn can_copy_raw(&self) -> bool {
        !self.raw_text.is_empty()
    }
}

/// 调试面板
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugPanel {
    /// 非超级管理员
    Hidden,
    /// 超级管理员但未开启追踪
    Disabled,
    /// 已开启追踪但没有调试数据
    Empty,
    /// 格式化后的调试 JSON
    Payload(String),
}

impl DebugPanel {
    /// 面板中显示的文本
    pub fn text(&self) -> &str {
        match self {
            DebugPanel::Hidden => "",
            DebugPanel::Disabled => "(debug disabled)",
            DebugPanel::Empty => "(no debug payload)",
            DebugPanel::Payload(json) => json,
        }
    }
}

/// 编排器持有的全部状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrchestratorState {
    pub workflow: WorkflowState,
    pub input: SelectedInput,
    pub session: Session,
    pub view: ResultView,
    /// "显示图片分析"开关
    pub show_image_analysis: bool,
    /// 最近一次结果带回的调试数据
    pub debug_trace: Option<JsonValue>,
    /// 最近一次成功分析生成的导出卡片
    pub export_document: Option<ExportDocument>,
    /// 最近一次成功导出的图片，重置后仍保留
    pub saved_preview: Option<Snapshot>,
    pub next_ticket: u64,
}

impl OrchestratorState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            show_image_analysis: true,
            ..Self::default()
        }
    }

    /// 取下一张票据
    pub(crate) fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    /// 调试面板的展示策略，与请求头共用 `Session::can_request_trace`
    pub fn debug_panel(&self) -> DebugPanel {
        if !self.session.is_super_admin() {
            return DebugPanel::Hidden;
        }
        if !self.session.can_request_trace() {
            return DebugPanel::Disabled;
        }
        match &self.debug_trace {
            Some(value) => DebugPanel::Payload(
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
            ),
            None => DebugPanel::Empty,
        }
    }

    /// 字数统计
    pub fn char_count_label(&self) -> String {
        self.input.char_count_label()
    }
}
