use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use shopdesk::api::StoreClient;
use shopdesk::cli::Cli;
use shopdesk::config::{Config, ConfigStore};
use shopdesk::logging::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    let store = ConfigStore::new(config, path);
    if let Some(base_url) = cli.base_url {
        store.set_base_url(base_url);
    }

    let config = store.get();
    config.validate()?;
    info!(
        base_url = %config.api.base_url,
        config = %store.path().display(),
        "configuration loaded"
    );

    let client = StoreClient::new(&config)?;
    match cli.command {
        Some(command) => shopdesk::commands::run(command, &client, config.catalog.per_page).await,
        None => {
            shopdesk::ui::run(Arc::new(client), config.catalog.per_page).await?;
            Ok(())
        }
    }
}
