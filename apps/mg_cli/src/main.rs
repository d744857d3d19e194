//! MarsGeo 命令行界面
//!
//! 对矢量要素数据集做坐标系批量转换（WGS84/GCJ02/BD09/Web Mercator）。

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// MarsGeo 坐标转换命令行工具
#[derive(Parser)]
#[command(name = "mg_cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Vector dataset datum conversion (WGS84/GCJ02/BD09/WebMercator)", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 批量转换数据集坐标
    Convert(commands::convert::ConvertArgs),
    /// 显示数据集信息
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 执行命令
    match cli.command {
        Commands::Convert(args) => commands::convert::execute(args),
        Commands::Info(args) => commands::info::execute(args),
    }
}
