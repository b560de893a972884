//! 登录凭证存储

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::AppResult;

/// 凭证存取能力（对应 `getToken` / `clearSession`）
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn clear(&self);
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    token: Option<String>,
}

/// 以 JSON 文件保存凭证
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 写入凭证（`login` 命令）
    pub fn save_token(&self, token: &str) -> AppResult<()> {
        let stored = StoredSession {
            token: Some(token.to_string()),
        };
        let content = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&self.path, content)?;
        debug!("凭证已写入 {}", self.path.display());
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<StoredSession>(&content) {
            Ok(stored) => stored.token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("凭证文件解析失败 {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("已清除凭证文件 {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("清除凭证文件失败 {}: {}", self.path.display(), e),
        }
    }
}

/// 内存中的凭证
#[derive(Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new(token: Option<&str>) -> Self {
        Self {
            token: Mutex::new(token.map(str::to_string)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn clear(&self) {
        if let Ok(mut token) = self.token.lock() {
            *token = None;
        }
    }
}
