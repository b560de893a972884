//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数
use tracing::info;

use crate::config::Config;

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 当前配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 图文解析工作台");
    info!("🌐 服务地址: {}", config.api_base_url);
    info!("🎬 场景标识: {}", config.scenario);
    info!("{}", "=".repeat(60));
}

/// 记录解析完成信息
///
/// # 参数
/// - `markdown_len`: 报告长度（字符数）
/// - `credits`: 剩余额度
pub fn log_analysis_complete(markdown_len: usize, credits: Option<i64>) {
    info!("\n{}", "─".repeat(60));
    info!("✓ 解析完成: 报告 {} 字符", markdown_len);
    match credits {
        Some(credits) => info!("💰 剩余额度: {}", credits),
        None => info!("💰 剩余额度: --"),
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

/// 取响应体前 200 个字符，作为错误信息的兜底
pub fn body_preview(text: &str) -> String {
    text.chars().take(200).collect()
}
