// ==========================================
// 工位排班基础数据 - 命令行主入口
// ==========================================

use clap::Parser;

use workplace_setup::app::{cli, AppState, Cli};
use workplace_setup::config::AppConfig;
use workplace_setup::{i18n, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let (mut config, config_warnings) = AppConfig::from_env();
    if let Some(db) = args.db {
        config.db_path = db;
    }
    if let Some(url) = args.scheduler_url {
        config.scheduler.endpoint = url;
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }

    logging::init(config.log_format);
    i18n::set_locale(&config.locale);
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!("{} v{}", workplace_setup::APP_NAME, workplace_setup::VERSION);
    tracing::info!("使用数据库: {}", config.db_path);

    let state = AppState::new(config).map_err(anyhow::Error::msg)?;
    state.restore()?;

    cli::run(args.command, &state).await
}
