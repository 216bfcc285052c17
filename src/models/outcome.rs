//! 单条映射的处理结果

use std::fmt;

/// 重命名结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// 重命名成功
    Renamed,
    /// 源文件不存在
    NotFound,
    /// 目标文件已存在，跳过
    Skipped,
    /// 重命名时文件系统报错
    Error(String),
}

impl RenameOutcome {
    /// 状态标签
    pub fn tag(&self) -> &'static str {
        match self {
            RenameOutcome::Renamed => "RENAMED",
            RenameOutcome::NotFound => "NOT FOUND",
            RenameOutcome::Skipped => "SKIPPED",
            RenameOutcome::Error(_) => "ERROR",
        }
    }
}

impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameOutcome::Error(msg) => write!(f, "{}: {}", self.tag(), msg),
            _ => f.write_str(self.tag()),
        }
    }
}
