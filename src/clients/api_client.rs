//! 后端 API 客户端
//!
//! 封装解析接口、用户信息与账号注销的调用逻辑
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use crate::config::{join_url, Config, INSUFFICIENT_CREDITS_CODE};
use crate::error::ApiError;
use crate::models::session::credits_from_json;
use crate::models::{AnalysisRequest, AnalysisResult, UserProfile};
use crate::utils::body_preview;

pub const TEXT_ENDPOINT: &str = "/api/chat/text";
pub const IMAGE_ENDPOINT: &str = "/api/chat/image";
pub const ME_ENDPOINT: &str = "/auth/me";
pub const DELETE_ENDPOINT: &str = "/api/profile/delete";
pub const DEBUG_TRACE_HEADER: &str = "X-Debug-Trace";

/// 单次调用的附加参数
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeOptions<'a> {
    /// Bearer 凭证
    pub token: &'a str,
    /// 是否请求服务端追踪（只应由 `Session::can_request_trace` 决定）
    pub trace: bool,
}

#[derive(Serialize)]
struct TextChatBody<'a> {
    text: &'a str,
    scenario: &'a str,
}

#[derive(Serialize)]
struct ImageChatBody<'a> {
    text: &'a str,
    #[serde(rename = "imageBase64")]
    image_base64: &'a str,
    scenario: &'a str,
}

/// 读取后的响应
struct RawResponse {
    status: StatusCode,
    data: Option<JsonValue>,
    raw: String,
}

/// 后端 API 客户端
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// 创建新的 API 客户端
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(&config.api_base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// 按请求内容选择接口：带图片走图片接口，否则走纯文本接口
    pub fn endpoint_for(request: &AnalysisRequest) -> &'static str {
        if request.has_image() {
            IMAGE_ENDPOINT
        } else {
            TEXT_ENDPOINT
        }
    }

    /// 提交解析请求
    ///
    /// # 参数
    /// - `request`: 已组装好的请求
    /// - `options`: 凭证与追踪开关
    ///
    /// # 返回
    /// 成功时返回报告、图片分析、剩余额度与调试信息
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
        options: &AnalyzeOptions<'_>,
    ) -> Result<AnalysisResult, ApiError> {
        let endpoint = Self::endpoint_for(request);
        debug!(
            "调用解析接口 {}，文本 {} 字符，图片 {} 字节，追踪: {}",
            endpoint,
            request.composed_text.chars().count(),
            request.image_payload.len(),
            options.trace
        );

        let mut builder = self
            .http
            .post(join_url(&self.base_url, endpoint))
            .header(CONTENT_TYPE, "application/json");
        builder = authorize(builder, options.token);
        if options.trace {
            builder = builder.header(DEBUG_TRACE_HEADER, "1");
        }

        let builder = if request.has_image() {
            builder.json(&ImageChatBody {
                text: &request.composed_text,
                image_base64: &request.image_payload,
                scenario: &request.scenario,
            })
        } else {
            builder.json(&TextChatBody {
                text: &request.composed_text,
                scenario: &request.scenario,
            })
        };

        let response = read_response(builder).await?;
        if !response.status.is_success() {
            let err = failure_from(&response);
            warn!("解析接口返回失败 ({}): {}", response.status.as_u16(), err);
            return Err(err);
        }

        let result = parse_analysis(response.data)?;
        info!(
            "✓ 解析接口调用成功，报告 {} 字符",
            result.markdown.chars().count()
        );
        Ok(result)
    }

    /// 拉取当前用户信息
    pub async fn fetch_me(&self, token: &str) -> Result<UserProfile, ApiError> {
        let builder = authorize(self.http.get(join_url(&self.base_url, ME_ENDPOINT)), token);
        let response = read_response(builder).await?;
        if !response.status.is_success() {
            return Err(failure_from(&response));
        }
        match response.data {
            Some(data @ JsonValue::Object(_)) => serde_json::from_value(data)
                .map_err(|e| ApiError::InvalidResponse(e.to_string())),
            _ => Err(ApiError::InvalidResponse("Invalid response format".to_string())),
        }
    }

    /// 注销账号
    pub async fn delete_account(&self, token: &str) -> Result<(), ApiError> {
        let builder = authorize(self.http.post(join_url(&self.base_url, DELETE_ENDPOINT)), token);
        let response = read_response(builder).await?;
        if !response.status.is_success() {
            let err = failure_from(&response);
            return Err(ApiError::DeleteFailed(err.user_message()));
        }
        let success = response
            .data
            .as_ref()
            .and_then(|d| d.get("success"))
            .and_then(JsonValue::as_bool)
            .unwrap_or(false);
        if success {
            Ok(())
        } else {
            Err(ApiError::DeleteFailed(
                response.data.as_ref().and_then(error_message).unwrap_or_default(),
            ))
        }
    }
}

fn authorize(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header(AUTHORIZATION, format!("Bearer {}", token))
}

/// 发送请求并读取响应体（只读一次）
///
/// 只有声明为 JSON 的响应才尝试解析
async fn read_response(builder: RequestBuilder) -> Result<RawResponse, ApiError> {
    let response = builder.send().await?;
    let status = response.status();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false);
    let raw = response.text().await?;

    let data = if is_json && !raw.is_empty() {
        match serde_json::from_str::<JsonValue>(&raw) {
            Ok(data) => Some(data),
            Err(e) if status.is_success() => {
                return Err(ApiError::InvalidResponse(format!("Invalid JSON response: {}", e)))
            }
            Err(_) => return Err(ApiError::Network("Invalid JSON response".to_string())),
        }
    } else {
        None
    };

    Ok(RawResponse { status, data, raw })
}

/// 非 2xx 响应转换为错误：优先结构化的 error / message，其次响应体前 200 字符
fn failure_from(response: &RawResponse) -> ApiError {
    let message = response
        .data
        .as_ref()
        .and_then(error_message)
        .or_else(|| Some(body_preview(&response.raw)).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "Request failed".to_string());
    let code = response
        .data
        .as_ref()
        .and_then(|d| d.get("code"))
        .and_then(JsonValue::as_str)
        .map(str::to_string);

    if code.as_deref() == Some(INSUFFICIENT_CREDITS_CODE) {
        return ApiError::InsufficientCredits { message };
    }
    ApiError::Http {
        status: response.status.as_u16(),
        message,
        code,
    }
}

fn error_message(data: &JsonValue) -> Option<String> {
    non_empty_str(data.get("error")).or_else(|| non_empty_str(data.get("message")))
}

fn non_empty_str(value: Option<&JsonValue>) -> Option<String> {
    value
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// 解析成功响应；报告字段兼容 `text` 与 `markdown`
fn parse_analysis(data: Option<JsonValue>) -> Result<AnalysisResult, ApiError> {
    let data = match data {
        Some(data @ JsonValue::Object(_)) => data,
        _ => return Err(ApiError::InvalidResponse("Invalid response format".to_string())),
    };

    let markdown = non_empty_str(data.get("text"))
        .or_else(|| non_empty_str(data.get("markdown")))
        .unwrap_or_default();

    Ok(AnalysisResult {
        markdown,
        image_analysis: non_empty_str(data.get("imageAnalysis")),
        credits: data.get("credits").and_then(credits_from_json),
        debug_trace: data.get("debug").filter(|d| !d.is_null()).cloned(),
    })
}
