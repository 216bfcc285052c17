use anyhow::Result;
use player_image_rename::utils::logging;
use player_image_rename::{App, Config};

fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let _stats = App::initialize(config)?.run()?;

    Ok(())
}
