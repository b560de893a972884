//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：校验配置、加载文案、创建 API 客户端与凭证存储
//! 2. **会话启动**：拉取用户信息，未登录时直接结束
//! 3. **命令执行**：把命令行操作翻译成工作台事件，并输出结果

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::{info, warn};

use crate::cli::Command;
use crate::clients::{ApiClient, PromptLoader};
use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::{keys, Catalog, DirectoryDownloads, FileSessionStore, SvgCapture, Translator};
use crate::models::{ImageFile, Session};
use crate::orchestrator::account::{self, DeleteOutcome};
use crate::orchestrator::jobs::AnalysisPipeline;
use crate::orchestrator::workbench::Workbench;
use crate::services::{ClipboardWriter, CmarkRenderer, ExportPipeline, RequestComposer, ResultRenderer};
use crate::utils::{log_analysis_complete, log_startup};
use crate::workflow::{DebugPanel, Event, ResultPanel, WorkflowState};

/// 应用主结构
pub struct App {
    config: Config,
    api: ApiClient,
    store: FileSessionStore,
    translator: Arc<Catalog>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate()?;
        log_startup(&config);

        let translator = match &config.locale_file {
            Some(path) => Catalog::load(Path::new(path)).await?,
            None => Catalog::new(),
        };

        Ok(Self {
            api: ApiClient::new(&config),
            store: FileSessionStore::new(&config.session_file),
            translator: Arc::new(translator),
            config,
        })
    }

    /// 执行一条命令
    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Analyze {
                image,
                notes,
                show_analysis,
                trace,
                export,
                copy,
                raw,
            } => {
                let session = self.session().await?;
                let options = AnalyzeRun {
                    image: &image,
                    notes: &notes,
                    show_analysis,
                    trace,
                    export,
                    copy,
                    raw,
                };
                self.analyze(session, options).await
            }
            Command::Login { token } => {
                self.store.save_token(token.trim())?;
                let session = self.session().await?;
                info!("🔑 登录成功: {}", session.nickname.as_deref().unwrap_or("-"));
                print_profile(&session);
                Ok(())
            }
            Command::Whoami => {
                let session = self.session().await?;
                print_profile(&session);
                Ok(())
            }
            Command::Logout => {
                account::logout(&self.store);
                Ok(())
            }
            Command::DeleteAccount { confirm } => {
                match account::delete_account(&self.api, &self.store, self.translator.as_ref(), &confirm).await {
                    Ok(DeleteOutcome::Deleted) => {
                        println!("{}", self.translator.t(keys::DELETE_SUCCESS));
                        Ok(())
                    }
                    Ok(DeleteOutcome::Cancelled) => {
                        let keyword = self.translator.t(keys::DELETE_CONFIRM_KEYWORD);
                        println!(
                            "{}",
                            self.translator
                                .translate(keys::DELETE_CONFIRM_PROMPT, &[("keyword", keyword.as_str())])
                        );
                        Ok(())
                    }
                    Err(e) => bail!("{}: {}", self.translator.t(keys::DELETE_FAILED), e.user_message()),
                }
            }
        }
    }

    async fn session(&self) -> Result<Session> {
        match account::bootstrap(&self.api, &self.store).await.map_err(AppError::from) {
            Ok(session) => Ok(session),
            Err(e) if e.is_unauthenticated() => {
                bail!("{}，请先登录（凭证文件: {}）", e, self.config.session_file)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 组装工作台
    fn workbench(&self, session: Session) -> Workbench {
        let translator: Arc<dyn Translator> = self.translator.clone();
        let analysis = AnalysisPipeline::new(
            PromptLoader::new(&self.config),
            RequestComposer::new(&self.config.scenario, translator.as_ref()),
            self.api.clone(),
            ResultRenderer::new(Box::new(CmarkRenderer), translator.as_ref()),
        );
        let export = ExportPipeline::new(
            Arc::new(SvgCapture::new()),
            Arc::new(DirectoryDownloads::new(&self.config.download_dir)),
        );
        Workbench::new(
            session,
            Arc::new(analysis),
            Arc::new(export),
            ClipboardWriter::system(),
            translator,
        )
    }

    async fn analyze(&self, session: Session, run: AnalyzeRun<'_>) -> Result<()> {
        let mut bench = self.workbench(session);

        bench.dispatch(Event::AnalysisToggled(run.show_analysis)).await;
        if run.trace {
            bench.dispatch(Event::DebugToggled(true)).await;
            if !bench.state().session.debug_trace_enabled() {
                warn!("当前账号不是超级管理员，忽略 --trace");
            }
        }

        let selected = match ImageFile::load(run.image).await {
            Ok(file) => Event::FileSelected(file),
            Err(e) => Event::FileReadFailed(e.to_string()),
        };
        bench.dispatch(selected).await;
        bench.dispatch(Event::NotesEdited(run.notes.to_string())).await;
        self.print_status(&bench);
        if bench.state().input.has_file() {
            eprintln!("{}", self.translator.t(keys::GENERATING));
        }
        bench.dispatch(Event::SubmitRequested).await;
        self.print_alerts(&mut bench);
        self.print_status(&bench);

        match &bench.state().workflow {
            WorkflowState::Rendered => {
                let state = bench.state();
                log_analysis_complete(state.view.raw_text.len(), state.session.credits);
                self.print_report(&bench, run.raw);
            }
            WorkflowState::Failed { message, .. } => bail!("Error: {}", message),
            other => bail!("{}", bench.translator().t(other.status_key())),
        }

        if run.export {
            bench.dispatch(Event::ExportRequested).await;
            self.print_alerts(&mut bench);
            if let Some(snapshot) = &bench.state().saved_preview {
                info!("导出文件: {}", snapshot.file_name);
            }
        }
        if run.copy {
            bench.dispatch(Event::CopyRequested).await;
        }
        if let Some(feedback) = bench.feedback() {
            println!("{}", feedback.text);
        }
        Ok(())
    }

    fn print_report(&self, bench: &Workbench, raw: bool) {
        let state = bench.state();
        if let ResultPanel::Report { plain_text, .. } = &state.view.panel {
            println!("{}", plain_text);
        }
        if raw {
            println!();
            if state.view.can_copy_raw() {
                println!("{}", state.view.raw_text);
            } else {
                println!("{}", self.translator.t(keys::NO_RAW_TEXT));
            }
        }
        if !state.view.analysis_display.is_empty() {
            println!();
            println!("{}{}", self.translator.t(keys::IMAGE_POINTS_PREFIX), state.view.analysis_display);
        }
        println!();
        println!("credits: {}", state.session.credits_label());
        match state.debug_panel() {
            DebugPanel::Hidden => {}
            panel => {
                println!();
                println!("[debug]\n{}", panel.text());
            }
        }
    }

    /// 状态徽标与备注字数
    fn print_status(&self, bench: &Workbench) {
        let state = bench.state();
        eprintln!(
            "\x1b[{}m● {}\x1b[0m  {}",
            state.workflow.status_color().ansi_code(),
            self.translator.t(state.workflow.status_key()),
            state.char_count_label()
        );
    }

    fn print_alerts(&self, bench: &mut Workbench) {
        for alert in bench.take_alerts() {
            eprintln!("{}", alert);
        }
    }
}

fn print_profile(session: &Session) {
    println!(
        "[{}] {}",
        session.avatar_initial().unwrap_or_default(),
        session.nickname.as_deref().unwrap_or("-")
    );
    println!("role: {:?}", session.role);
    if session.shows_admin_link() {
        println!("admin console: enabled");
    }
    println!("credits: {}", session.credits_label());
}

/// 一次 `analyze` 命令的参数
struct AnalyzeRun<'a> {
    image: &'a Path,
    notes: &'a str,
    show_analysis: bool,
    trace: bool,
    export: bool,
    copy: bool,
    raw: bool,
}
