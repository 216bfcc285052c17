use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
///
/// 这里只放会中止整个运行的致命错误；单个文件的重命名失败
/// 记录在 `RenameOutcome::Error` 中，不会走到这里。
#[derive(Debug, Error)]
pub enum AppError {
    /// CSV 文件不存在
    #[error("CSV file does not exist: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// 图片目录不存在
    #[error("Images directory does not exist: {}", .path.display())]
    ImagesDirNotFound { path: PathBuf },

    /// 打开 / 解码 / 解析 CSV 失败
    #[error("Error reading CSV file {}: {source}", .path.display())]
    InputReadError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// 读取配置文件失败
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件 TOML 解析失败
    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建 CSV 读取错误
    pub fn input_read_failed(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        AppError::InputReadError {
            path: path.into(),
            source,
        }
    }

    /// 是否为启动阶段的路径检查错误
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            AppError::InputNotFound { .. } | AppError::ImagesDirNotFound { .. }
        )
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_classification() {
        let err = AppError::InputNotFound {
            path: PathBuf::from("players.csv"),
        };
        assert!(err.is_missing_input());
        assert_eq!(err.to_string(), "CSV file does not exist: players.csv");

        let err = AppError::ImagesDirNotFound {
            path: PathBuf::from("public/player_images"),
        };
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_config_error_is_not_missing_input() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::ConfigReadFailed {
            path: PathBuf::from("rename.toml"),
            source,
        };
        assert!(!err.is_missing_input());
        assert!(err.to_string().contains("rename.toml"));
    }
}
