//! Newsroom CLI
//!
//! Local execution entry point. For serving over HTTP, use `newsroom-server`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use newsroom::{
    config,
    error::{AppError, Result},
    pipeline,
    services::ContentClient,
    storage::{LocalStorage, SiteStorage},
};

/// newsroom - site data for The Central Report
#[derive(Parser, Debug)]
#[command(
    name = "newsroom",
    version,
    about = "Content API client, sitemap and page data generator"
)]
struct Cli {
    /// Path to storage directory containing config.toml and generated documents
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate sitemap.xml from static routes and the content API
    Sitemap,

    /// Write robots.txt
    Robots,

    /// Resolve a page route and print its data as JSON
    Page {
        /// Path with optional query, e.g. "/category/world?page=2"
        path: String,
    },

    /// Rotate the homepage's breaking news headlines
    Ticker {
        /// Number of rotations before exiting
        #[arg(long, default_value_t = 3)]
        ticks: usize,
    },

    /// Validate configuration
    Validate,

    /// Show effective configuration and last build info
    Info,
}

/// Initialize env_logger.
///
/// Crate output passes the filter up to debug; the effective level is set on
/// the `log` facade once the configuration is known.
fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("newsroom=debug,info"))
        .format_timestamp_secs()
        .format_target(false)
        .init();
    newsroom::utils::log::init(if verbose { "debug" } else { "info" });
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // `info` and `validate` report on a broken config; everything else needs a valid one.
    let config = match cli.command {
        Command::Info | Command::Validate => config::load_config(&cli.storage_dir),
        _ => config::load_validated(&cli.storage_dir)?,
    };
    if !cli.verbose {
        newsroom::utils::log::init(&config.logging.level);
    }
    log::debug!("Loaded configuration from {}", cli.storage_dir.display());

    let storage = LocalStorage::new(&cli.storage_dir);
    let client = ContentClient::new(&config.api)?;

    match cli.command {
        Command::Sitemap => {
            pipeline::run_sitemap(&config, client, &storage).await?;
        }

        Command::Robots => {
            pipeline::run_robots(&config, &storage).await?;
        }

        Command::Page { path } => {
            let page = pipeline::run_page(&config, client, &path).await?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }

        Command::Ticker { ticks } => {
            pipeline::run_ticker(&config, client, ticks).await?;
        }

        Command::Validate => {
            pipeline::run_validate(&cli.storage_dir)?;
        }

        Command::Info => {
            log::info!("Storage directory: {}", cli.storage_dir.display());
            log::info!(
                "Config file: {}",
                if config::config_path(&cli.storage_dir).exists() {
                    "found"
                } else {
                    "not found (defaults)"
                }
            );
            log::info!(
                "Content API: {}{}",
                config.api.base_url(),
                if config.api.is_configured() {
                    ""
                } else {
                    " (default)"
                }
            );
            log::info!(
                "Site: {} ({:?})",
                config.site.base_url,
                config.site.environment
            );
            log::debug!(
                "Effective configuration:\n{}",
                toml::to_string_pretty(&config)?
            );

            match storage.load_build().await {
                Ok(Some(build)) => {
                    log::info!(
                        "Last sitemap: {} entries at {}",
                        build.total,
                        build.generated_at
                    );
                    for (feed, status, entries) in &build.feeds {
                        log::info!("  {feed}: {status} ({entries} entries)");
                    }
                }
                Ok(None) => log::info!("No sitemap built yet."),
                Err(e) => {
                    log::error!("Unreadable build record: {}", e);
                    return Err(AppError::config(format!("bad build record: {e}")));
                }
            }
        }
    }

    Ok(())
}
