use crate::error::{AppError, AppResult};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// 映射表 CSV 文件（PlayerKey, PlayerImage）
    pub csv_file_path: PathBuf,
    /// 待重命名的图片目录
    pub images_dir: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_file_path: PathBuf::from("playerNames.csv"),
            images_dir: PathBuf::from("public").join("player_images"),
            verbose_logging: false,
        }
    }
}

/// 命令行参数
#[derive(Debug, Default, Parser)]
#[command(
    name = "player_image_rename",
    version,
    about = "Rename player images according to a PlayerKey/PlayerImage CSV mapping"
)]
pub struct Cli {
    /// CSV file with PlayerKey and PlayerImage columns
    pub csv_file: Option<PathBuf>,

    /// Directory containing the images to rename
    pub images_dir: Option<PathBuf>,

    /// TOML config file (csv_file_path, images_dir, verbose_logging)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// 配置文件内容，所有字段都可省略
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    csv_file_path: Option<PathBuf>,
    images_dir: Option<PathBuf>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 解析进程命令行并生成配置
    pub fn load() -> AppResult<Self> {
        Self::from_cli(Cli::parse())
    }

    /// 按 默认值 → 配置文件 → 命令行 的顺序合并配置
    pub fn from_cli(cli: Cli) -> AppResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(csv_file) = cli.csv_file {
            config.csv_file_path = csv_file;
        }
        if let Some(images_dir) = cli.images_dir {
            config.images_dir = images_dir;
        }
        if cli.verbose {
            config.verbose_logging = true;
        }

        Ok(config)
    }

    /// 从 TOML 配置文件加载，未给出的字段使用默认值
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| AppError::ConfigParseFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: FileConfig = toml::from_str(content)?;
        let default = Self::default();

        Ok(Self {
            csv_file_path: file.csv_file_path.unwrap_or(default.csv_file_path),
            images_dir: file.images_dir.unwrap_or(default.images_dir),
            verbose_logging: file.verbose_logging.unwrap_or(default.verbose_logging),
        })
    }
}
