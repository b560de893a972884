//! 请求组装 - 业务能力层
//!
//! 把提示词模板、用户备注和图片编码合并成一次请求，纯函数，不访问网络

use crate::infrastructure::{keys, Translator};
use crate::models::{AnalysisRequest, SelectedInput};

/// 请求组装器
#[derive(Debug, Clone)]
pub struct RequestComposer {
    scenario: String,
    notes_label: String,
    no_notes_placeholder: String,
}

impl RequestComposer {
    pub fn new(scenario: impl Into<String>, translator: &dyn Translator) -> Self {
        Self::with_labels(
            scenario,
            translator.t(keys::CUSTOM_INPUT_PREFIX),
            translator.t(keys::NO_NOTES),
        )
    }

    pub fn with_labels(
        scenario: impl Into<String>,
        notes_label: impl Into<String>,
        no_notes_placeholder: impl Into<String>,
    ) -> Self {
        Self {
            scenario: scenario.into(),
            notes_label: notes_label.into(),
            no_notes_placeholder: no_notes_placeholder.into(),
        }
    }

    pub fn no_notes_placeholder(&self) -> &str {
        &self.no_notes_placeholder
    }

    /// 组装请求
    ///
    /// - 有模板：`模板 + "\n\n" + 备注标签 + (备注或占位)`
    /// - 无模板：直接使用 trim 后的备注（可能为空）
    pub fn compose(&self, input: &SelectedInput, template: &str) -> AnalysisRequest {
        let notes = input.notes().trim();
        let composed_text = if template.is_empty() {
            notes.to_string()
        } else {
            let section = if notes.is_empty() {
                self.no_notes_placeholder.as_str()
            } else {
                notes
            };
            format!("{}\n\n{}{}", template, self.notes_label, section)
        };

        AnalysisRequest {
            image_payload: input.payload(),
            composed_text,
            scenario: self.scenario.clone(),
            raw_user_notes: notes.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageFile;

    fn composer() -> RequestComposer {
        RequestComposer::with_labels("moment", "备注：", "（无）")
    }

    #[test]
    fn test_compose_with_template() {
        let mut input = SelectedInput::default();
        input.set_notes("  N  ");
        let request = composer().compose(&input, "TEMPLATE");
        assert_eq!(request.composed_text, "TEMPLATE\n\n备注：N");
        assert_eq!(request.raw_user_notes, "N");
        assert_eq!(request.scenario, "moment");
        assert!(request.image_payload.is_empty());
    }

    #[test]
    fn test_compose_with_template_and_no_notes() {
        let request = composer().compose(&SelectedInput::default(), "T");
        assert_eq!(request.composed_text, "T\n\n备注：（无）");
    }

    #[test]
    fn test_compose_without_template_uses_trimmed_notes() {
        let mut input = SelectedInput::default();
        input.set_notes("  hello ");
        assert_eq!(composer().compose(&input, "").composed_text, "hello");
        assert_eq!(composer().compose(&SelectedInput::default(), "").composed_text, "");
    }

    #[test]
    fn test_payload_computed_just_in_time() {
        let mut input = SelectedInput::default();
        input.select(ImageFile::new("a.png", b"abc".to_vec())).unwrap();
        assert!(input.cached_payload().is_none());
        let request = composer().compose(&input, "");
        assert_eq!(request.image_payload, "data:image/png;base64,YWJj");
    }
}
