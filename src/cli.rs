//! 命令行参数

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "moment-workbench")]
#[command(about = "图片 + 备注 → 朋友圈文案")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// 显示详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 分析一张图片并生成文案
    Analyze {
        /// 图片路径（不超过 5 MiB）
        image: PathBuf,

        /// 备注（超过 500 字的部分会被截断）
        #[arg(short, long, default_value = "")]
        notes: String,

        /// 显示图片分析
        #[arg(long)]
        show_analysis: bool,

        /// 请求服务端调试追踪（仅超级管理员有效）
        #[arg(long)]
        trace: bool,

        /// 生成后导出图片
        #[arg(long)]
        export: bool,

        /// 生成后复制文案到剪贴板
        #[arg(long)]
        copy: bool,

        /// 同时输出原始 markdown
        #[arg(long)]
        raw: bool,
    },

    /// 保存登录凭证并校验
    Login {
        /// 登录后获得的凭证
        #[arg(long)]
        token: String,
    },

    /// 查看当前登录用户
    Whoami,

    /// 退出登录
    Logout,

    /// 注销账号
    DeleteAccount {
        /// 确认词
        #[arg(long)]
        confirm: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from(["moment-workbench", "analyze", "a.png", "-n", "周末", "--export"]);
        assert_eq!(
            cli.command,
            Command::Analyze {
                image: PathBuf::from("a.png"),
                notes: "周末".to_string(),
                show_analysis: false,
                trace: false,
                export: true,
                copy: false,
                raw: false,
            }
        );
    }

    #[test]
    fn test_parse_login() {
        let cli = Cli::parse_from(["moment-workbench", "login", "--token", "abc"]);
        assert_eq!(
            cli.command,
            Command::Login {
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_parse_delete_account() {
        let cli = Cli::parse_from(["moment-workbench", "-v", "delete-account", "--confirm", "DELETE"]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Command::DeleteAccount {
                confirm: "DELETE".to_string()
            }
        );
    }
}
