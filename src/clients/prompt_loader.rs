//! 提示词模板加载
//!
//! 首次成功或失败后结果都会被缓存，进程内不再重试

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::config::{join_url, Config};
use crate::error::ApiError;

/// 提示词模板加载器
pub struct PromptLoader {
    http: reqwest::Client,
    url: String,
    cache: OnceCell<String>,
}

impl PromptLoader {
    pub fn new(config: &Config) -> Self {
        Self::with_url(join_url(&config.api_base_url, &config.prompt_path))
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            cache: OnceCell::new(),
        }
    }

    /// 返回缓存的模板；加载失败时缓存空字符串，不向调用方报错
    pub async fn load(&self) -> String {
        self.cache
            .get_or_init(|| async {
                match self.fetch().await {
                    Ok(text) => {
                        debug!("提示词模板已加载，{} 字符", text.chars().count());
                        text
                    }
                    Err(e) => {
                        warn!("加载提示词模板失败，改用空模板: {}", e);
                        String::new()
                    }
                }
            })
            .await
            .clone()
    }

    async fn fetch(&self) -> Result<String, ApiError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: format!("Load prompt failed: {}", status.as_u16()),
                code: None,
            });
        }
        let text = response.text().await?;
        Ok(text.trim().to_string())
    }
}
