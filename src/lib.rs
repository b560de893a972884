//! # Moment Workbench
//!
//! 选择一张图片、补充备注，提交给后端生成朋友圈文案，并可将结果导出为图片
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 外部协作方的能力抽象：截图、下载、剪贴板、凭证、文案
//!
//! ### ② 业务能力层（Clients / Services）
//! - `clients/` - `ApiClient`（解析、用户信息、注销）与 `PromptLoader`（提示词模板）
//! - `services/` - 请求组装、结果渲染、导出、复制、临时提示
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 六状态的显式状态机，`transition(state, event) -> (state, effects)`
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/workbench` - 执行副作用，把异步任务的结果交回状态机
//! - `orchestrator/account` - 会话启动、退出登录、注销账号
//! - `orchestrator/app` - 命令行入口
//!
//! ## 模块结构

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{AnalyzeOptions, ApiClient, PromptLoader};
pub use config::Config;
pub use error::{ApiError, AppError, AppResult};
pub use models::{AnalysisRequest, AnalysisResult, ImageFile, SelectedInput, Session};
pub use orchestrator::{App, Workbench};
pub use workflow::{transition, Effect, Event, OrchestratorState, WorkflowState};
