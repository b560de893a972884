//! 会话与账号操作 - 编排层
//!
//! 启动时拉取用户信息、退出登录、注销账号

use tracing::{info, warn};

use crate::clients::ApiClient;
use crate::error::ApiError;
use crate::infrastructure::{keys, SessionStore, Translator};
use crate::models::Session;

/// 注销账号的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// 确认词不匹配，未发出请求
    Cancelled,
    Deleted,
}

/// 会话启动
///
/// 没有凭证或 `/auth/me` 失败都返回 `ApiError::Unauthenticated`（调用方应跳转登录），
/// 后者同时清除本地凭证
pub async fn bootstrap(api: &ApiClient, store: &dyn SessionStore) -> Result<Session, ApiError> {
    let Some(token) = store.token() else {
        info!("未找到登录凭证");
        return Err(ApiError::Unauthenticated);
    };

    match api.fetch_me(&token).await {
        Ok(profile) => {
            let mut session = Session::with_token(token);
            session.apply_profile(&profile);
            info!(
                "👤 已登录: {} (角色 {:?}，额度 {})",
                profile.nickname.as_deref().unwrap_or("-"),
                session.role,
                session.credits_label()
            );
            Ok(session)
        }
        Err(e) => {
            warn!("拉取用户信息失败，清除登录状态: {}", e);
            store.clear();
            Err(ApiError::Unauthenticated)
        }
    }
}

/// 退出登录
pub fn logout(store: &dyn SessionStore) {
    store.clear();
    info!("👋 已退出登录");
}

/// 注销账号
///
/// # 参数
/// - `typed`: 用户输入的确认词，与文案中的确认词不一致时直接取消
///
/// # 返回
/// 成功注销后本地凭证同时清除
pub async fn delete_account(
    api: &ApiClient,
    store: &dyn SessionStore,
    translator: &dyn Translator,
    typed: &str,
) -> Result<DeleteOutcome, ApiError> {
    let keyword = translator.t(keys::DELETE_CONFIRM_KEYWORD);
    if typed.trim() != keyword {
        return Ok(DeleteOutcome::Cancelled);
    }
    let token = store.token().ok_or(ApiError::Unauthenticated)?;
    api.delete_account(&token).await?;
    store.clear();
    info!("🗑️ 账号已注销");
    Ok(DeleteOutcome::Deleted)
}
