//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// 默认级别为 `info`，可通过 `RUST_LOG` 覆盖；重复调用不会报错
pub fn init() {
    init_with_verbosity(false);
}

/// 根据配置初始化日志，`verbose` 时默认级别提升为 `debug`
pub fn init_with_verbosity(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
