//! mend-bot server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite record store, syncs the slash-command set with the chat platform,
//! and serves the interactions endpoint. The bot token comes from the
//! `MEND_BOT_TOKEN` environment variable.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use mend_bot::{
  AppState, BotConfig,
  platform::{PlatformConfig, RestPlatform},
};
use mend_core::streak::SystemClock;
use mend_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "mend sobriety-tracker bot")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("MEND"))
    .build()
    .context("failed to read config file")?;

  let bot_cfg: BotConfig = settings
    .try_deserialize()
    .context("failed to deserialise BotConfig")?;

  // The one secret that never lives in config.toml.
  let token =
    std::env::var("MEND_BOT_TOKEN").context("MEND_BOT_TOKEN is not set")?;

  // Open the record store.
  let store_path = expand_tilde(&bot_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  // Build the platform client and register the command set before serving.
  let platform = RestPlatform::new(PlatformConfig {
    base_url:       bot_cfg.api_base_url.clone(),
    application_id: bot_cfg.application_id,
    token,
  })
  .context("failed to build platform client")?;

  platform
    .sync_commands()
    .await
    .context("failed to sync commands with the platform")?;
  tracing::info!("command set synced");

  // Build application state.
  let state = AppState {
    store:    Arc::new(store),
    platform: Arc::new(platform),
    clock:    Arc::new(SystemClock),
    config:   Arc::new(bot_cfg.clone()),
  };

  let app = mend_bot::router(state);
  let address = format!("{}:{}", bot_cfg.host, bot_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
