use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use pixseek::api::{ImageSource, PixabayClient};
use pixseek::config::{Config, API_KEY_ENV};
use pixseek::headless::run_headless;
use pixseek::logging::{init_file_tracing, init_stderr_tracing};
use pixseek::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "pixseek", version, about = "Search Pixabay images from the terminal")]
struct Cli {
    /// Query to search for on startup
    query: Option<String>,

    /// Path to the config file (default: ~/.config/pixseek/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pixabay API key (overrides config and PIXABAY_API_KEY)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Number of images per page
    #[arg(long, value_name = "N")]
    per_page: Option<u32>,

    /// Print results to stdout instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Pages to load in headless mode
    #[arg(long, value_name = "N", default_value_t = 1, requires = "headless")]
    pages: u32,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.headless {
        init_stderr_tracing();
    } else {
        init_file_tracing();
    }

    let config = load_config(&cli)?;
    tracing::debug!(per_page = config.gallery.per_page, "configuration loaded");

    let client = PixabayClient::new(config.api.clone()).context("failed to create API client")?;
    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    if cli.headless {
        let Some(query) = cli.query.as_deref() else {
            bail!("--headless needs a QUERY");
        };
        let mut stdout = std::io::stdout().lock();
        let mut stderr = std::io::stderr().lock();
        let summary = tokio_runtime.block_on(run_headless(
            client,
            query,
            config.gallery.per_page,
            cli.pages,
            &mut stdout,
            &mut stderr,
        ))?;
        tracing::info!(
            images = summary.images,
            total = summary.total,
            pages = summary.pages,
            "headless search finished"
        );
        return Ok(());
    }

    if !config.api.is_configured() {
        bail!(
            "no Pixabay API key configured; set api.api_key in {} or export {}",
            Config::config_path().display(),
            API_KEY_ENV
        );
    }

    let source: Arc<dyn ImageSource> = Arc::new(client);
    runtime::run(
        &config,
        source,
        tokio_runtime.handle().clone(),
        cli.query.as_deref(),
    )
    .context("terminal UI failed")?;
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from(path)?;
            config.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
            config
        }
        None => Config::load()?,
    };

    config.apply_api_key_override(cli.api_key.clone());
    if let Some(per_page) = cli.per_page {
        config.gallery.per_page = per_page;
    }
    config.validate()?;
    Ok(config)
}
