//! 临时提示条
//!
//! 复制、导出等操作的结果只以短暂提示呈现，到期自动消失

use std::time::Duration;

use tokio::time::Instant;

use crate::config::FEEDBACK_DISMISS_MS;

/// 一条提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub text: String,
    pub is_error: bool,
}

/// 提示条：同一时间只显示最新的一条
#[derive(Debug)]
pub struct FeedbackBanner {
    current: Option<(FeedbackMessage, Instant)>,
    ttl: Duration,
}

impl Default for FeedbackBanner {
    fn default() -> Self {
        Self::new(Duration::from_millis(FEEDBACK_DISMISS_MS))
    }
}

impl FeedbackBanner {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// 显示提示，覆盖上一条并重新计时
    pub fn show(&mut self, text: impl Into<String>, is_error: bool) {
        let message = FeedbackMessage {
            text: text.into(),
            is_error,
        };
        self.current = Some((message, Instant::now() + self.ttl));
    }

    /// 当前可见的提示（已过期则为 None）
    pub fn current(&self) -> Option<&FeedbackMessage> {
        match &self.current {
            Some((message, deadline)) if Instant::now() < *deadline => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_message_dismissed_after_ttl() {
        let mut banner = FeedbackBanner::default();
        assert!(banner.current().is_none());

        banner.show("已复制", false);
        assert_eq!(banner.current().map(|m| m.text.as_str()), Some("已复制"));

        tokio::time::advance(Duration::from_millis(2199)).await;
        assert!(banner.current().is_some());
        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(banner.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_message_restarts_timer() {
        let mut banner = FeedbackBanner::new(Duration::from_millis(100));
        banner.show("a", false);
        tokio::time::advance(Duration::from_millis(80)).await;
        banner.show("b", true);
        tokio::time::advance(Duration::from_millis(80)).await;
        let message = banner.current().unwrap();
        assert_eq!(message.text, "b");
        assert!(message.is_error);
    }
}
