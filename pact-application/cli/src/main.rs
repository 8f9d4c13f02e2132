//! Pact verifier CLI

use std::future::Future;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, Level};

mod commands;

#[derive(Parser)]
#[command(name = "pact-verifier")]
#[command(about = "Pact verifier - 通过 FFI 验证 Provider 契约", long_about = None)]
#[command(version)]
struct Cli {
    /// 日志级别
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 执行契约验证
    Verify {
        /// 选项文件路径 (.json/.yaml/.yml)
        #[arg(short, long)]
        options: String,

        /// 验证器配置文件路径 (TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// 动态库路径（覆盖配置）
        #[arg(long)]
        library: Option<String>,

        /// 超时（毫秒，覆盖选项文件）
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// 打印映射后的参数（不调用动态库）
    Args {
        /// 选项文件路径 (.json/.yaml/.yml)
        #[arg(short, long)]
        options: String,
    },

    /// 显示动态库版本
    Version {
        /// 验证器配置文件路径 (TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// 动态库路径（覆盖配置）
        #[arg(long)]
        library: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt().with_max_level(log_level).init();

    debug!("pact-verifier CLI 启动");

    block_on_detached(run(cli.command))
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Verify {
            options,
            config,
            library,
            timeout,
        } => commands::verify::handle(&options, config.as_deref(), library.as_deref(), timeout).await?,
        Commands::Args { options } => commands::args::handle(&options)?,
        Commands::Version { config, library } => {
            commands::version::handle(config.as_deref(), library.as_deref())?
        }
    }

    Ok(())
}

/// 在新建的运行时上执行，返回时不等待仍在阻塞线程池里的调用
///
/// 超时后动态库的 verify 可能仍在运行，`Runtime` 的 drop 会一直等它结束。
fn block_on_detached<F, T>(future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(future);
    runtime.shutdown_background();

    result
}
