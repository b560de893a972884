//! 状态转换 - 流程层
//!
//! `transition(state, event) -> (state, effects)` 是纯函数：不等待、不做 IO，
//! 网络请求、截图、剪贴板都以 `Effect` 的形式交给编排层执行

use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::infrastructure::keys;
use crate::services::analysis_display;
use crate::workflow::event::{AnalysisTask, Effect, Event, ExportTask, Notice};
use crate::workflow::state::{OrchestratorState, ResultPanel, ResultView, Ticket, WorkflowState};

/// 执行一次状态转换
pub fn transition(mut state: OrchestratorState, event: Event) -> (OrchestratorState, Vec<Effect>) {
    let mut effects = Vec::new();

    match event {
        Event::FileSelected(file) => on_file_selected(&mut state, file, &mut effects),
        Event::FileReadFailed(message) => {
            warn!("读取文件失败: {}", message);
            effects.push(Effect::Alert(Notice::error(keys::ALERT_FILE_READ_FAIL)));
        }
        Event::NotesEdited(notes) => state.input.set_notes(&notes),
        Event::SubmitRequested => on_submit(&mut state, &mut effects),
        Event::AnalysisSucceeded {
            ticket,
            result,
            rendered,
            export_document,
        } => {
            if !is_current_submission(&state.workflow, ticket) {
                debug!("丢弃过期的分析结果 {}", ticket);
                return (state, effects);
            }
            if let Some(credits) = result.credits {
                state.session.credits = Some(credits);
            }
            let analysis_source = result.image_analysis.filter(|a| !a.is_empty());
            // 请求期间切换过开关时按当前开关重新过滤
            let analysis_display = if rendered.show_analysis == state.show_image_analysis {
                rendered.analysis_display_text
            } else {
                analysis_display(analysis_source.as_deref(), state.show_image_analysis)
            };
            state.view = ResultView {
                panel: ResultPanel::Report {
                    html: rendered.html,
                    plain_text: rendered.plain_text,
                },
                raw_text: rendered.raw_text,
                analysis_display,
                analysis_source,
            };
            state.debug_trace = result.debug_trace;
            state.export_document = Some(export_document);
            state.workflow = WorkflowState::Rendered;
            info!("✅ 分析完成 {}，剩余额度: {}", ticket, state.session.credits_label());
        }
        Event::AnalysisFailed { ticket, error } => {
            if !is_current_submission(&state.workflow, ticket) {
                debug!("丢弃过期的失败结果 {}: {}", ticket, error);
                return (state, effects);
            }
            on_analysis_failed(&mut state, ticket, error, &mut effects);
        }
        Event::ExportRequested => on_export_requested(&mut state, &mut effects),
        Event::ExportFinished { ticket, outcome } => {
            if state.workflow != (WorkflowState::Exporting { ticket }) {
                debug!("丢弃过期的导出结果 {}", ticket);
                return (state, effects);
            }
            state.workflow = WorkflowState::Rendered;
            match outcome {
                Ok(snapshot) => {
                    info!("🖼️ 导出完成: {}", snapshot.file_name);
                    state.saved_preview = Some(snapshot);
                    effects.push(Effect::Feedback(Notice::info(keys::PREVIEW_READY)));
                }
                Err(message) => {
                    warn!("导出失败 {}: {}", ticket, message);
                    effects.push(Effect::Feedback(Notice::error(keys::ALERT_EXPORT_FAIL)));
                    effects.push(Effect::Alert(
                        Notice::error(keys::ALERT_EXPORT_FAIL).with_detail(message),
                    ));
                }
            }
        }
        Event::CopyRequested => {
            let text = match state.workflow {
                WorkflowState::Rendered => state.view.report_text(),
                _ => None,
            };
            match text {
                Some(text) => effects.push(Effect::Copy {
                    text: text.to_string(),
                    announce: true,
                }),
                None => effects.push(Effect::Feedback(Notice::error(keys::COPY_NO_CONTENT))),
            }
        }
        Event::CopyRawRequested => {
            if state.view.can_copy_raw() {
                effects.push(Effect::Copy {
                    text: state.view.raw_text.clone(),
                    announce: false,
                });
            }
        }
        Event::AnalysisToggled(show) => {
            state.show_image_analysis = show;
            state.view.analysis_display = analysis_display(state.view.analysis_source.as_deref(), show);
        }
        Event::DebugToggled(checked) => {
            state.session.set_debug_trace(checked);
            state.debug_trace = None;
        }
        Event::SessionLoaded(profile) => {
            state.session.apply_profile(&profile);
            state.debug_trace = None;
        }
        Event::Reset => {
            if !matches!(state.workflow, WorkflowState::Idle) {
                info!("🔄 重置（原状态 {}）", state.workflow.name());
            }
            state.input = Default::default();
            state.view = ResultView::default();
            state.export_document = None;
            state.workflow = WorkflowState::Idle;
        }
    }

    (state, effects)
}

fn on_file_selected(state: &mut OrchestratorState, file: crate::models::ImageFile, effects: &mut Vec<Effect>) {
    let name = file.name.clone();
    if let Err(e) = state.input.select(file) {
        warn!("拒绝文件 {}: {}", name, e);
        effects.push(Effect::Alert(Notice::error(keys::ALERT_FILE_TOO_LARGE)));
        return;
    }
    debug!("已选择文件 {}", name);
    // 导出卡片使用当前预览的图片
    if let Some(document) = state.export_document.as_mut() {
        document.preview_image = state.input.payload();
    }
    // 进行中的提交/导出不受影响；已有报告时仍可导出、复制
    match state.workflow {
        WorkflowState::Submitting { .. } | WorkflowState::Exporting { .. } | WorkflowState::Rendered => {}
        _ => state.workflow = WorkflowState::InputReady,
    }
}

fn on_submit(state: &mut OrchestratorState, effects: &mut Vec<Effect>) {
    if !state.workflow.can_submit() {
        debug!("{} 状态下忽略提交", state.workflow.name());
        return;
    }
    if let Err(e) = state.input.require_file() {
        debug!("{}", e);
        effects.push(Effect::Alert(Notice::error(keys::ALERT_NO_IMAGE)));
        return;
    }

    state.input.ensure_payload();
    let ticket = state.issue_ticket();
    state.workflow = WorkflowState::Submitting { ticket };
    info!("🚀 提交分析 {}", ticket);

    effects.push(Effect::Analyze(AnalysisTask {
        ticket,
        input: state.input.clone(),
        token: state.session.token.clone(),
        trace: state.session.can_request_trace(),
        show_analysis: state.show_image_analysis,
    }));
}

fn on_analysis_failed(state: &mut OrchestratorState, ticket: Ticket, error: ApiError, effects: &mut Vec<Effect>) {
    warn!("❌ 分析失败 {}: {}", ticket, error);
    if matches!(error, ApiError::InsufficientCredits { .. }) {
        effects.push(Effect::Alert(Notice::error(keys::ALERT_CREDITS)));
    }
    let message = error.user_message();
    state.view = ResultView {
        panel: ResultPanel::Error {
            message: message.clone(),
        },
        ..ResultView::default()
    };
    state.export_document = None;
    state.workflow = WorkflowState::Failed {
        message,
        code: error.code().map(str::to_string),
    };
}

fn on_export_requested(state: &mut OrchestratorState, effects: &mut Vec<Effect>) {
    let document = match (state.workflow.can_export(), state.input.has_file(), &state.export_document) {
        (true, true, Some(document)) => document.clone(),
        _ => {
            effects.push(Effect::Alert(Notice::error(keys::ALERT_NO_EXPORT)));
            effects.push(Effect::Feedback(Notice::error(keys::ALERT_NO_EXPORT)));
            return;
        }
    };
    let ticket = state.issue_ticket();
    state.workflow = WorkflowState::Exporting { ticket };
    effects.push(Effect::Export(ExportTask { ticket, document }));
}

fn is_current_submission(workflow: &WorkflowState, ticket: Ticket) -> bool {
    *workflow == WorkflowState::Submitting { ticket }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisResult, ExportDocument, ImageFile, RenderedResult, Role, Session, Snapshot, UserProfile};
    use serde_json::json;

    fn image(name: &str, bytes: &[u8]) -> ImageFile {
        ImageFile::new(name, bytes.to_vec())
    }

    fn apply(state: OrchestratorState, events: Vec<Event>) -> (OrchestratorState, Vec<Effect>) {
        let mut state = state;
        let mut all = Vec::new();
        for event in events {
            let (next, effects) = transition(state, event);
            state = next;
            all.extend(effects);
        }
        (state, all)
    }

    fn fresh() -> OrchestratorState {
        OrchestratorState::new(Session::with_token("token"))
    }

    fn submitted() -> (OrchestratorState, AnalysisTask) {
        let (state, effects) = apply(
            fresh(),
            vec![Event::FileSelected(image("a.png", b"A")), Event::SubmitRequested],
        );
        let task = match effects.into_iter().next() {
            Some(Effect::Analyze(task)) => task,
            other => panic!("unexpected effect {:?}", other),
        };
        (state, task)
    }

    fn success(ticket: Ticket, markdown: &str, analysis: Option<&str>, credits: Option<i64>) -> Event {
        Event::AnalysisSucceeded {
            ticket,
            result: AnalysisResult {
                markdown: markdown.to_string(),
                image_analysis: analysis.map(str::to_string),
                credits,
                debug_trace: None,
            },
            rendered: RenderedResult {
                html: format!("<p>{}</p>", markdown),
                raw_text: markdown.to_string(),
                plain_text: markdown.to_string(),
                analysis_display_text: analysis_display(analysis, true),
                show_analysis: true,
            },
            export_document: ExportDocument {
                preview_image: "data:image/png;base64,QQ==".to_string(),
                ..ExportDocument::default()
            },
        }
    }

    fn rendered() -> OrchestratorState {
        let (state, task) = submitted();
        let (state, _) = transition(state, success(task.ticket, "ok", Some("猫"), Some(7)));
        state
    }

    fn super_admin_profile() -> UserProfile {
        UserProfile {
            nickname: Some("root".to_string()),
            role: Role::SuperAdmin,
            credits: Some(3),
        }
    }

    #[test]
    fn test_select_file_moves_to_input_ready() {
        let (state, effects) = transition(fresh(), Event::FileSelected(image("a.png", b"A")));
        assert_eq!(state.workflow, WorkflowState::InputReady);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_oversized_file_rejected_and_prior_selection_kept() {
        let (state, _) = transition(fresh(), Event::FileSelected(image("a.png", b"A")));
        let big = ImageFile::new("big.png", vec![0u8; 5 * 1024 * 1024 + 1]);
        let (state, effects) = transition(state, Event::FileSelected(big));
        assert_eq!(state.input.file().map(|f| f.name.as_str()), Some("a.png"));
        assert_eq!(
            effects,
            vec![Effect::Alert(Notice::error(keys::ALERT_FILE_TOO_LARGE))]
        );
    }

    #[test]
    fn test_long_notes_truncated() {
        let (state, effects) = transition(fresh(), Event::NotesEdited("字".repeat(600)));
        assert_eq!(state.input.notes().chars().count(), 500);
        assert_eq!(state.char_count_label(), "500/500");
        assert!(effects.is_empty());
    }

    #[test]
    fn test_submit_without_file_alerts() {
        let (state, effects) = transition(fresh(), Event::SubmitRequested);
        assert_eq!(state.workflow, WorkflowState::Idle);
        assert_eq!(effects, vec![Effect::Alert(Notice::error(keys::ALERT_NO_IMAGE))]);
    }

    #[test]
    fn test_submit_caches_payload_and_emits_task() {
        let (state, task) = submitted();
        assert_eq!(state.workflow, WorkflowState::Submitting { ticket: task.ticket });
        assert_eq!(state.input.cached_payload(), Some("data:image/png;base64,QQ=="));
        assert_eq!(task.input.cached_payload(), Some("data:image/png;base64,QQ=="));
        assert_eq!(task.token.as_deref(), Some("token"));
        assert!(!task.trace);
    }

    #[test]
    fn test_submit_ignored_while_submitting() {
        let (state, _) = submitted();
        let (next, effects) = transition(state.clone(), Event::SubmitRequested);
        assert_eq!(next.workflow, state.workflow);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_reselect_invalidates_payload() {
        let (state, _) = apply(
            fresh(),
            vec![
                Event::FileSelected(image("a.png", b"A")),
                Event::SubmitRequested,
            ],
        );
        let (state, _) = transition(state, Event::FileSelected(image("b.png", b"B")));
        assert!(state.input.cached_payload().is_none());
        assert_eq!(state.input.payload(), "data:image/png;base64,Qg==");
    }

    #[test]
    fn test_success_renders_and_updates_credits() {
        let state = rendered();
        assert_eq!(state.workflow, WorkflowState::Rendered);
        assert_eq!(state.session.credits, Some(7));
        assert_eq!(state.view.report_text(), Some("ok"));
        assert_eq!(state.view.analysis_display, "猫");
        assert!(state.export_document.is_some());
    }

    #[test]
    fn test_insufficient_credits_fails_with_quota_alert() {
        let (state, task) = submitted();
        let error = ApiError::InsufficientCredits {
            message: "额度不足".to_string(),
        };
        let (state, effects) = transition(
            state,
            Event::AnalysisFailed {
                ticket: task.ticket,
                error,
            },
        );
        assert_eq!(
            state.workflow,
            WorkflowState::Failed {
                message: "额度不足".to_string(),
                code: Some("INSUFFICIENT_CREDITS".to_string()),
            }
        );
        assert_eq!(effects, vec![Effect::Alert(Notice::error(keys::ALERT_CREDITS))]);
    }

    #[test]
    fn test_failure_replaces_prior_result() {
        let state = rendered();
        let (state, _) = transition(state, Event::SubmitRequested);
        let ticket = match state.workflow {
            WorkflowState::Submitting { ticket } => ticket,
            ref other => panic!("unexpected {:?}", other),
        };
        let (state, effects) = transition(
            state,
            Event::AnalysisFailed {
                ticket,
                error: ApiError::Network("boom".to_string()),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(
            state.view.panel,
            ResultPanel::Error {
                message: "boom".to_string()
            }
        );
        assert!(state.view.raw_text.is_empty());
        assert!(state.view.analysis_display.is_empty());
        assert!(state.view.analysis_source.is_none());
    }

    #[test]
    fn test_late_result_after_reset_discarded() {
        let (state, task) = submitted();
        let (state, _) = transition(state, Event::Reset);
        let (state, effects) = transition(state, success(task.ticket, "late", None, Some(1)));
        assert_eq!(state.workflow, WorkflowState::Idle);
        assert_eq!(state.view, ResultView::default());
        assert_eq!(state.session.credits, None);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_stale_ticket_discarded_after_resubmit() {
        let (state, first) = submitted();
        let (state, _) = transition(state, Event::Reset);
        let (state, second) = apply(
            state,
            vec![Event::FileSelected(image("b.png", b"B")), Event::SubmitRequested],
        );
        let second = match second.into_iter().next() {
            Some(Effect::Analyze(task)) => task,
            other => panic!("unexpected effect {:?}", other),
        };
        assert_ne!(first.ticket, second.ticket);
        let (state, _) = transition(state, success(first.ticket, "old", None, None));
        assert_eq!(state.workflow, WorkflowState::Submitting { ticket: second.ticket });
    }

    #[test]
    fn test_toggle_analysis_is_idempotent() {
        let state = rendered();
        let before = state.view.analysis_display.clone();
        let (state, effects) = apply(
            state,
            vec![Event::AnalysisToggled(false), Event::AnalysisToggled(true)],
        );
        assert!(effects.is_empty());
        assert_eq!(state.view.analysis_display, before);

        let (state, _) = transition(state, Event::AnalysisToggled(false));
        assert!(state.view.analysis_display.is_empty());
    }

    #[test]
    fn test_export_rejected_without_rendered_result() {
        let (state, _) = transition(fresh(), Event::FileSelected(image("a.png", b"A")));
        let (state, effects) = transition(state, Event::ExportRequested);
        assert_eq!(state.workflow, WorkflowState::InputReady);
        assert!(effects.iter().all(|e| !matches!(e, Effect::Export(_))));
        assert!(effects.contains(&Effect::Feedback(Notice::error(keys::ALERT_NO_EXPORT))));
    }

    #[test]
    fn test_export_success_returns_to_rendered() {
        let state = rendered();
        let (state, effects) = transition(state, Event::ExportRequested);
        let task = match effects.as_slice() {
            [Effect::Export(task)] => task.clone(),
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(state.workflow, WorkflowState::Exporting { ticket: task.ticket });

        let snapshot = Snapshot {
            image_data_url: "data:image/png;base64,AA".to_string(),
            file_name: "Moments_Copy_1.png".to_string(),
        };
        let (state, effects) = transition(
            state,
            Event::ExportFinished {
                ticket: task.ticket,
                outcome: Ok(snapshot.clone()),
            },
        );
        assert_eq!(state.workflow, WorkflowState::Rendered);
        assert_eq!(state.saved_preview, Some(snapshot.clone()));
        assert_eq!(effects, vec![Effect::Feedback(Notice::info(keys::PREVIEW_READY))]);

        // 重置后保留上次导出的预览
        let (state, _) = transition(state, Event::Reset);
        assert_eq!(state.saved_preview, Some(snapshot));
    }

    #[test]
    fn test_export_failure_keeps_previous_preview() {
        let mut state = rendered();
        let previous = Snapshot {
            image_data_url: "data:image/png;base64,AA".to_string(),
            file_name: "Moments_Copy_0.png".to_string(),
        };
        state.saved_preview = Some(previous.clone());
        let (state, _) = transition(state, Event::ExportRequested);
        let ticket = match state.workflow {
            WorkflowState::Exporting { ticket } => ticket,
            ref other => panic!("unexpected {:?}", other),
        };
        let (state, effects) = transition(
            state,
            Event::ExportFinished {
                ticket,
                outcome: Err("canvas tainted".to_string()),
            },
        );
        assert_eq!(state.workflow, WorkflowState::Rendered);
        assert_eq!(state.saved_preview, Some(previous));
        assert!(effects.contains(&Effect::Alert(
            Notice::error(keys::ALERT_EXPORT_FAIL).with_detail("canvas tainted")
        )));
    }

    #[test]
    fn test_copy_only_in_rendered() {
        let (_, effects) = transition(fresh(), Event::CopyRequested);
        assert_eq!(effects, vec![Effect::Feedback(Notice::error(keys::COPY_NO_CONTENT))]);

        let (_, effects) = transition(rendered(), Event::CopyRequested);
        assert_eq!(
            effects,
            vec![Effect::Copy {
                text: "ok".to_string(),
                announce: true
            }]
        );
    }

    #[test]
    fn test_reselect_after_render_keeps_export_and_copy() {
        let (state, effects) = transition(rendered(), Event::FileSelected(image("b.png", b"B")));
        assert!(effects.is_empty());
        assert_eq!(state.workflow, WorkflowState::Rendered);
        assert_eq!(state.view.report_text(), Some("ok"));

        let (state, effects) = transition(state, Event::CopyRequested);
        assert_eq!(
            effects,
            vec![Effect::Copy {
                text: "ok".to_string(),
                announce: true
            }]
        );

        let (state, effects) = transition(state, Event::ExportRequested);
        let task = match effects.as_slice() {
            [Effect::Export(task)] => task.clone(),
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(state.workflow, WorkflowState::Exporting { ticket: task.ticket });
        // 导出卡片换成新选择的图片
        assert_eq!(task.document.preview_image, "data:image/png;base64,Qg==");
    }

    #[test]
    fn test_reselect_after_failure_moves_to_input_ready() {
        let (state, task) = submitted();
        let (state, _) = transition(
            state,
            Event::AnalysisFailed {
                ticket: task.ticket,
                error: ApiError::Network("boom".to_string()),
            },
        );
        let (state, _) = transition(state, Event::FileSelected(image("b.png", b"B")));
        assert_eq!(state.workflow, WorkflowState::InputReady);
        let (_, effects) = transition(state, Event::ExportRequested);
        assert!(effects.iter().all(|e| !matches!(e, Effect::Export(_))));
    }

    #[test]
    fn test_retry_after_failure_renders() {
        let (state, first) = submitted();
        let (state, _) = transition(
            state,
            Event::AnalysisFailed {
                ticket: first.ticket,
                error: ApiError::Network("boom".to_string()),
            },
        );
        assert!(state.workflow.can_submit());

        let (state, effects) = transition(state, Event::SubmitRequested);
        let retry = match effects.as_slice() {
            [Effect::Analyze(task)] => task.clone(),
            other => panic!("unexpected {:?}", other),
        };
        assert_ne!(retry.ticket, first.ticket);
        assert_eq!(state.workflow, WorkflowState::Submitting { ticket: retry.ticket });

        let (state, _) = transition(state, success(retry.ticket, "second", None, Some(5)));
        assert_eq!(state.workflow, WorkflowState::Rendered);
        assert_eq!(state.view.report_text(), Some("second"));
        assert_eq!(state.session.credits, Some(5));
        assert!(state.export_document.is_some());
    }

    #[test]
    fn test_late_export_after_reset_discarded() {
        let (state, _) = transition(rendered(), Event::ExportRequested);
        let ticket = match state.workflow {
            WorkflowState::Exporting { ticket } => ticket,
            ref other => panic!("unexpected {:?}", other),
        };
        let (state, _) = transition(state, Event::Reset);
        let snapshot = Snapshot {
            image_data_url: "data:image/png;base64,AA".to_string(),
            file_name: "Moments_Copy_2.png".to_string(),
        };
        let (state, effects) = transition(
            state,
            Event::ExportFinished {
                ticket,
                outcome: Ok(snapshot),
            },
        );
        assert_eq!(state.workflow, WorkflowState::Idle);
        assert_eq!(state.saved_preview, None);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_toggle_during_submission_applies_to_result() {
        let (state, task) = submitted();
        assert!(task.show_analysis);
        let (state, _) = transition(state, Event::AnalysisToggled(false));
        let (state, _) = transition(state, success(task.ticket, "ok", Some("猫"), None));
        assert!(state.view.analysis_display.is_empty());

        let (state, _) = transition(state, Event::AnalysisToggled(true));
        assert_eq!(state.view.analysis_display, "猫");
    }

    #[test]
    fn test_copy_raw_is_silent_and_needs_raw_text() {
        let (_, effects) = transition(fresh(), Event::CopyRawRequested);
        assert!(effects.is_empty());
        let (_, effects) = transition(rendered(), Event::CopyRawRequested);
        assert_eq!(
            effects,
            vec![Effect::Copy {
                text: "ok".to_string(),
                announce: false
            }]
        );
    }

    #[test]
    fn test_reset_clears_input_and_view() {
        let (state, _) = transition(rendered(), Event::NotesEdited("周末".to_string()));
        let (state, _) = transition(state, Event::Reset);
        assert_eq!(state.workflow, WorkflowState::Idle);
        assert!(!state.input.has_file());
        assert_eq!(state.view.panel, ResultPanel::Placeholder);
        assert!(!state.view.can_copy_raw());
        assert_eq!(state.session.credits, Some(7));
    }

    #[test]
    fn test_non_super_admin_never_requests_trace() {
        let (state, effects) = apply(
            fresh(),
            vec![
                Event::DebugToggled(true),
                Event::FileSelected(image("a.png", b"A")),
                Event::SubmitRequested,
            ],
        );
        assert!(matches!(&effects[..], [Effect::Analyze(task)] if !task.trace));
        assert!(!state.session.debug_trace_enabled());
    }

    #[test]
    fn test_super_admin_trace_opt_in() {
        let (state, effects) = apply(
            fresh(),
            vec![
                Event::SessionLoaded(super_admin_profile()),
                Event::DebugToggled(true),
                Event::FileSelected(image("a.png", b"A")),
                Event::SubmitRequested,
            ],
        );
        let ticket = match &effects[..] {
            [Effect::Analyze(task)] if task.trace => task.ticket,
            other => panic!("unexpected {:?}", other),
        };
        let mut event = success(ticket, "ok", None, None);
        if let Event::AnalysisSucceeded { result, .. } = &mut event {
            result.debug_trace = Some(json!({"steps": 2}));
        }
        let (state, _) = transition(state, event);
        assert!(state.debug_panel().text().contains("\"steps\": 2"));

        // 重新拉取用户信息后追踪关闭
        let (state, _) = transition(state, Event::SessionLoaded(super_admin_profile()));
        assert_eq!(state.debug_panel().text(), "(debug disabled)");
    }
}
