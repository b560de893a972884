use anyhow::Result;
use clap::Parser;

use moment_workbench::cli::Cli;
use moment_workbench::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logger::init_with_verbosity(cli.verbose || config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).await?.run(cli.command).await?;

    Ok(())
}
