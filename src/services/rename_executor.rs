//! 重命名执行服务 - 业务能力层
//!
//! 只负责"把一条映射落到文件系统上"，一次处理一条，不关心批量流程。

use crate::models::{RenameMapping, RenameOutcome};
use crate::utils::logging;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 重命名执行器
///
/// 职责：
/// - 检查源文件是否存在
/// - 目标文件已存在时跳过，绝不覆盖
/// - 执行重命名并把文件系统错误转成 `RenameOutcome::Error`
pub struct RenameExecutor {
    images_dir: PathBuf,
}

impl RenameExecutor {
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
        }
    }

    /// 处理第 `index` 条映射（从 1 开始）并输出状态行
    pub fn execute(&self, index: usize, mapping: &RenameMapping) -> RenameOutcome {
        let outcome = self.rename(mapping);
        logging::log_outcome(index, mapping, &outcome);
        outcome
    }

    /// 检查并执行重命名，不输出状态行
    ///
    /// 存在性检查紧挨着 rename 调用，前一条映射刚生成的文件会让后一条被跳过。
    pub fn rename(&self, mapping: &RenameMapping) -> RenameOutcome {
        let old_path = self.images_dir.join(&mapping.old_name);
        let new_path = self.images_dir.join(mapping.new_name());

        debug!("{} -> {}", old_path.display(), new_path.display());

        if !old_path.exists() {
            return RenameOutcome::NotFound;
        }

        if path_taken(&new_path) {
            return RenameOutcome::Skipped;
        }

        match fs::rename(&old_path, &new_path) {
            Ok(()) => RenameOutcome::Renamed,
            Err(e) => RenameOutcome::Error(e.to_string()),
        }
    }
}

/// 悬空的符号链接也算已占用
fn path_taken(path: &Path) -> bool {
    path.exists() || path.is_symlink()
}
