//! Canteen ordering shell
//!
//! Interactive stand-in for the ordering page: browse canteens, compose a
//! cart and check out against a canteen service.

use anyhow::Context;
use canteen_app::config::{ENV_BASE_URL, ENV_DATA_DIR, ENV_LANG};
use canteen_app::shell::{Command, Shell, parse_command};
use canteen_app::{AppConfig, FilePreferenceStore, OrderingSession, logging};
use canteen_client::HttpCanteenClient;
use clap::Parser;
use shared::DisplayLanguage;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "canteen", version, about = "Canteen ordering shell")]
struct Cli {
    /// Directory for config, preferences and logs
    #[arg(long, env = ENV_DATA_DIR, default_value = "./data")]
    data_dir: PathBuf,

    /// Canteen API base URL
    #[arg(long, env = ENV_BASE_URL)]
    base_url: Option<String>,

    /// Display language used when none is stored (zh | en)
    #[arg(long, env = ENV_LANG)]
    lang: Option<DisplayLanguage>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_init(&cli.data_dir)
        .context("Failed to load config")?
        .apply_env()
        .context("Invalid environment configuration")?;
    config.data_dir = cli.data_dir.clone();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(lang) = cli.lang {
        config.default_language = lang;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    let _log_guard = logging::init(&config.log_dir()).context("Failed to initialize logging")?;
    tracing::info!(base_url = %config.base_url, data_dir = %config.data_dir.display(), "Canteen shell starting");

    let client = HttpCanteenClient::new(&config.client_config()).context("Failed to build HTTP client")?;
    let store = Arc::new(FilePreferenceStore::new(config.preferences_path()));
    let session = OrderingSession::new(Arc::new(client), store, &config);
    let shell = Shell::new(session);

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(shell.session().render().await.to_string().as_bytes())
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let output = match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => match shell.execute(command).await {
                Ok(text) => text,
                Err(e) => format!("{}\n", shell.describe_error(&e).await),
            },
            Err(e) => format!("{}\n", shell.describe_error(&e).await),
        };
        stdout.write_all(output.as_bytes()).await?;
    }

    tracing::info!("Canteen shell exiting");
    Ok(())
}
