//! 流程层（Workflow）
//!
//! 选择 → 就绪 → 提交中 → 已生成/失败 → 导出中 的显式状态机。
//! 本层只描述状态如何变化，不执行任何异步操作

pub mod event;
pub mod state;
pub mod transition;

pub use event::{AnalysisTask, Effect, Event, ExportTask, Notice};
pub use state::{DebugPanel, OrchestratorState, ResultPanel, ResultView, StatusColor, Ticket, WorkflowState};
pub use transition::transition;
