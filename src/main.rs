//! scan-metadata - infer tables, lists and detected data from OCR page files

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scan_metadata::config::{self, AppConfig};
use scan_metadata::storage::{self, ConfigSource};
use scan_metadata::ScanSession;

/// scan-metadata - document structure inference for scanned pages
#[derive(Parser, Debug)]
#[command(name = "scan-metadata")]
#[command(about = "Infer tables, lists and detected data from recognized page files")]
struct Args {
    /// Recognized page files (JSON), in page order
    #[arg(required_unless_present = "write_default_config")]
    pages: Vec<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Requested recognition language, primary first (repeatable)
    #[arg(short, long = "language")]
    languages: Vec<String>,

    /// Disable table detection
    #[arg(long)]
    no_tables: bool,

    /// Disable list detection
    #[arg(long)]
    no_lists: bool,

    /// Disable email/phone/URL detection
    #[arg(long)]
    no_data: bool,

    /// Do not check that page images decode
    #[arg(long)]
    skip_image_check: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Write the response to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log filter (overrides the configured level, overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Write the default configuration file and exit
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.write_default_config {
        let config_path = match &args.config {
            Some(path) => path.clone(),
            None => storage::default_config_path()?,
        };
        config::save_config(&AppConfig::default(), &config_path)?;
        println!("Wrote default configuration to {}", config_path.display());
        return Ok(());
    }

    let (config, source) = resolve_config(&args)?;
    init_logging(args.log_level.as_deref().unwrap_or(&config.logging.level))?;
    source.log();
    config.recognition.validate()?;

    let session = ScanSession::from_config(&config);
    let response = session.process_pages(args.pages.clone()).await;
    let json = response.to_json(config.output.pretty)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write output to {:?}", path))?;
            info!("Wrote response to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Install the tracing subscriber, logging to stderr
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log filter: {}", level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Load the configuration named by `--config`, or the user configuration
///
/// Nothing is logged here; the subscriber is installed from the result.
fn resolve_config(args: &Args) -> Result<(AppConfig, ConfigSource)> {
    let (config, source) = match &args.config {
        Some(path) => storage::load_or_default(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?,
        None => storage::load_user_config(),
    };
    Ok((apply_overrides(config, args), source))
}

/// Apply command line flags on top of the loaded configuration
fn apply_overrides(mut config: AppConfig, args: &Args) -> AppConfig {
    if !args.languages.is_empty() {
        config.recognition.languages = args.languages.clone();
    }
    if args.no_tables {
        config.recognition.enable_table_detection = false;
    }
    if args.no_lists {
        config.recognition.enable_list_detection = false;
    }
    if args.no_data {
        config.recognition.enable_data_detection = false;
    }
    if args.skip_image_check {
        config.recognition.verify_images = false;
    }
    if args.pretty {
        config.output.pretty = true;
    }
    config
}
