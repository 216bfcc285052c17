//! 日志工具模块
//!
//! 提供日志初始化、状态行和最终统计的输出函数

use crate::config::Config;
use crate::models::{RenameMapping, RenameOutcome};
use crate::orchestrator::RenameStats;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const SEPARATOR_WIDTH: usize = 60;

/// 初始化日志输出
///
/// # 参数
/// - `verbose`: 为 true 时输出 debug 级别日志
///
/// 重复调用不会报错（测试中会多次初始化）。
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .without_time()
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 本次运行的配置
pub fn log_startup(config: &Config) {
    info!("Starting player image rename process...");
    info!("CSV File: {}", config.csv_file_path.display());
    info!("Images Directory: {}", config.images_dir.display());
}

/// 记录映射加载信息
///
/// # 参数
/// - `total`: 有效映射总数
pub fn log_mappings_loaded(total: usize) {
    info!("Total mappings found: {}", total);
    info!("Starting file rename process...");
}

/// 输出单条映射的状态行
///
/// # 参数
/// - `index`: 映射序号（从 1 开始）
/// - `mapping`: 当前映射
/// - `outcome`: 处理结果
pub fn log_outcome(index: usize, mapping: &RenameMapping, outcome: &RenameOutcome) {
    let tag = outcome.tag();
    match outcome {
        RenameOutcome::Renamed => info!(
            "[{}] ✅ {}: {} → {}",
            index,
            tag,
            mapping.old_name,
            mapping.new_name()
        ),
        RenameOutcome::NotFound => error!("[{}] ❌ {}: {}", index, tag, mapping.old_name),
        RenameOutcome::Skipped => warn!(
            "[{}] ⚠️  {}: {} already exists",
            index,
            tag,
            mapping.new_name()
        ),
        RenameOutcome::Error(msg) => {
            error!("[{}] ❌ {}: {} - {}", index, tag, mapping.old_name, msg)
        }
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `stats`: 本次运行累计的计数
pub fn print_final_stats(stats: &RenameStats) {
    info!("{}", "=".repeat(SEPARATOR_WIDTH));
    info!("SUMMARY");
    info!(
        "Finished at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(SEPARATOR_WIDTH));
    info!("Total files to process: {}", stats.total);
    info!("✅ Successfully renamed: {}", stats.renamed);
    info!("❌ Files not found: {}", stats.not_found);
    info!("❌ Errors: {}", stats.errors);
    info!("⚠️  Skipped (already exists): {}", stats.skipped);
    info!("{}", "=".repeat(SEPARATOR_WIDTH));
}
