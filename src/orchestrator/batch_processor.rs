//! 批量重命名处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整的批量重命名。
//!
//! ## 核心流程
//!
//! 1. **启动检查**：图片目录与 CSV 文件必须存在，否则直接失败
//! 2. **加载**：读取全部 CSV 记录（`Vec<SourceRow>`）
//! 3. **构建映射**：丢弃缺字段的行，得到 `Vec<RenameMapping>`
//! 4. **逐条执行**：严格按顺序一条一条处理，不并发
//! 5. **全局统计**：汇总四类结果并输出
//!
//! 加载或解析失败会中止整个运行；单条映射的失败只计数，不中止。

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{self, RenameMapping, RenameOutcome};
use crate::services::{build_mappings, RenameExecutor};
use crate::utils::logging;
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
    executor: RenameExecutor,
}

impl App {
    /// 初始化应用，检查输入路径
    pub fn initialize(config: Config) -> AppResult<Self> {
        logging::log_startup(&config);

        if !config.images_dir.exists() {
            return Err(AppError::ImagesDirNotFound {
                path: config.images_dir.clone(),
            });
        }

        if !config.csv_file_path.exists() {
            return Err(AppError::InputNotFound {
                path: config.csv_file_path.clone(),
            });
        }

        let executor = RenameExecutor::new(&config.images_dir);

        Ok(Self { config, executor })
    }

    /// 运行应用主逻辑
    pub fn run(&self) -> AppResult<RenameStats> {
        let mappings = self.load_mappings()?;
        logging::log_mappings_loaded(mappings.len());

        let stats = self.process_all(&mappings);

        logging::print_final_stats(&stats);

        Ok(stats)
    }

    /// 加载 CSV 并构建映射
    fn load_mappings(&self) -> AppResult<Vec<RenameMapping>> {
        let rows = models::load_source_rows(&self.config.csv_file_path)?;
        info!("Read {} rows from CSV", rows.len());
        Ok(build_mappings(&rows))
    }

    /// 逐条处理所有映射
    fn process_all(&self, mappings: &[RenameMapping]) -> RenameStats {
        let mut stats = RenameStats {
            total: mappings.len(),
            ..Default::default()
        };

        for (idx, mapping) in mappings.iter().enumerate() {
            let outcome = self.executor.execute(idx + 1, mapping);
            stats.record(&outcome);
        }

        stats
    }
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenameStats {
    pub total: usize,
    pub renamed: usize,
    pub not_found: usize,
    pub errors: usize,
    pub skipped: usize,
}

impl RenameStats {
    /// 按结果累加对应计数
    pub fn record(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed => self.renamed += 1,
            RenameOutcome::NotFound => self.not_found += 1,
            RenameOutcome::Skipped => self.skipped += 1,
            RenameOutcome::Error(_) => self.errors += 1,
        }
    }

    /// 四类计数之和
    pub fn processed(&self) -> usize {
        self.renamed + self.not_found + self.errors + self.skipped
    }
}
