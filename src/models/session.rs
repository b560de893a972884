//! 会话模型
//!
//! 登录凭证、角色、额度与调试追踪开关

use serde::{Deserialize, Serialize};

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    SuperAdmin,
    /// 未知角色一律按普通用户处理
    #[default]
    #[serde(other)]
    User,
}

/// `/auth/me` 返回的用户信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default, deserialize_with = "deserialize_credits")]
    pub credits: Option<i64>,
}

/// 进程级会话
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub nickname: Option<String>,
    pub role: Role,
    pub credits: Option<i64>,
    debug_trace_enabled: bool,
}

impl Session {
    /// 只带凭证的会话（尚未拉取用户信息）
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// 用 `/auth/me` 的结果填充会话，调试追踪一律重置为关闭
    pub fn apply_profile(&mut self, profile: &UserProfile) {
        self.nickname = profile.nickname.clone();
        self.role = profile.role;
        if profile.credits.is_some() {
            self.credits = profile.credits;
        }
        self.debug_trace_enabled = false;
    }

    pub fn is_super_admin(&self) -> bool {
        self.role == Role::SuperAdmin
    }

    /// 是否显示管理入口
    pub fn shows_admin_link(&self) -> bool {
        matches!(self.role, Role::Admin | Role::SuperAdmin)
    }

    /// 头像显示昵称首字母（大写）
    pub fn avatar_initial(&self) -> Option<String> {
        self.nickname
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().collect())
    }

    pub fn debug_trace_enabled(&self) -> bool {
        self.debug_trace_enabled
    }

    /// 切换调试追踪；非超级管理员的会话始终保持关闭
    pub fn set_debug_trace(&mut self, checked: bool) {
        self.debug_trace_enabled = self.is_super_admin() && checked;
    }

    /// 是否可以请求服务端追踪
    ///
    /// 请求头与调试面板的可见性都只看这一处
    pub fn can_request_trace(&self) -> bool {
        self.is_super_admin() && self.debug_trace_enabled
    }

    /// 额度展示文本
    pub fn credits_label(&self) -> String {
        match self.credits {
            Some(credits) => credits.to_string(),
            None => "--".to_string(),
        }
    }
}

/// 兼容整数与浮点数两种额度格式
pub(crate) fn credits_from_json(value: &serde_json::Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f as i64)
    })
}

fn deserialize_credits<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(credits_from_json))
}
