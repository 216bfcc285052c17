//! # Player Image Rename
//!
//! 按 CSV 映射表（PlayerKey → PlayerImage）批量重命名球员图片
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `SourceRow`、`RenameMapping`、`RenameOutcome`
//! - `models/loaders` - CSV 加载
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 只处理单条映射
//! - `mapping_builder` - 行 → 映射，丢弃缺字段的行
//! - `rename_executor` - 检查并执行一次重命名
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 启动检查、顺序执行、汇总统计
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{RenameMapping, RenameOutcome, SourceRow};
pub use orchestrator::{App, RenameStats};
