//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `workbench` - 工作台
//! - 持有 `OrchestratorState`，把事件交给状态机
//! - 同步执行提示与剪贴板副作用，把分析/导出包装成 `Job`
//!
//! ### `jobs` - 异步任务
//! - 分析：模板加载 → 请求组装 → API 调用 → 渲染
//! - 导出：截图 → 命名 → 下载
//!
//! ### `account` - 会话与账号
//! - 会话启动、退出登录、注销账号
//!
//! ### `app` - 应用入口
//! - 初始化配置与文案，执行命令行命令
//!
//! ## 层次关系
//!
//! ```text
//! app (命令)
//!     ↓
//! workbench (事件 → 副作用 / 任务)
//!     ↓
//! workflow::transition (纯状态转换)
//!     ↓
//! services / clients (能力层)
//!     ↓
//! infrastructure (截图、下载、剪贴板、凭证、文案)
//! ```

pub mod account;
pub mod app;
pub mod jobs;
pub mod workbench;

pub use account::{bootstrap, delete_account, logout, DeleteOutcome};
pub use app::App;
pub use jobs::{AnalysisPipeline, Job};
pub use workbench::Workbench;
