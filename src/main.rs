//! rsdetectem 命令行入口

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rsdetectem::{ConfigManager, Detector, GlobalConfig, OutputRecord, PluginLoader, PluginOrigin, Session};

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// 格式化JSON
    Json,
    /// 每行一条结果
    Cmd,
}

#[derive(Debug, Parser)]
#[command(name = "rsdetectem", version, about = "检测浏览会话中使用的软件组件及版本")]
struct Cli {
    /// 会话JSON文件（requestedUrl / softwares / har / scripts）
    #[arg(short, long)]
    session: PathBuf,

    /// 本地插件JSON文件
    #[arg(short, long, conflicts_with = "plugins_url")]
    plugins: Option<PathBuf>,

    /// 远程插件JSON地址（带本地缓存）
    #[arg(long)]
    plugins_url: Option<String>,

    /// 输出 homepage / type / from_url 元数据
    #[arg(short, long)]
    metadata: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// 启用调试日志
    #[arg(short, long)]
    verbose: bool,
}

/// 未设置 RUST_LOG 时的默认日志级别
fn default_directive(config: &GlobalConfig) -> &'static str {
    if config.verbose {
        "rsdetectem=debug"
    } else {
        "rsdetectem=warn"
    }
}

fn init_tracing(config: &GlobalConfig) {
    let directive = default_directive(config);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)))
        .with_writer(std::io::stderr)
        .init();
}

fn render(records: &[OutputRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Cmd => Ok(records
            .iter()
            .map(|record| record.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 命令行参数优先于环境变量
    let mut builder = ConfigManager::custom().verbose(cli.verbose);
    let env_config = ConfigManager::from_env();
    builder = builder
        .plugin_origin(env_config.plugin_origin)
        .plugin_cache_path(env_config.plugin_cache_path)
        .http_timeout(env_config.http_timeout);
    if let Some(path) = cli.plugins {
        builder = builder.plugin_origin(PluginOrigin::LocalFile(path));
    } else if let Some(url) = cli.plugins_url {
        builder = builder.plugin_origin(PluginOrigin::Remote(url));
    }
    let config = builder.build();
    init_tracing(&config);
    debug!("运行配置：{:?}", config);

    let registry = PluginLoader::load(&config)
        .await
        .context("加载插件失败")?;
    info!("已加载插件{}个", registry.len());

    let data = tokio::fs::read(&cli.session)
        .await
        .with_context(|| format!("读取会话文件 {} 失败", cli.session.display()))?;
    let session = Session::from_json_slice(&data)?;

    let detector = Detector::new(Arc::new(registry));
    let records = detector.get_results(&session, cli.metadata);

    println!("{}", render(&records, cli.format)?);
    Ok(())
}
