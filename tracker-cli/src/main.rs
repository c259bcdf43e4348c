use anyhow::{Context, Result};
use clap::Parser;
use extractors::JobTextExtractor;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::prelude::*;

mod config;
mod keyword_client;

#[derive(Parser, Debug)]
#[command(
    name = "jobtrack",
    author,
    version,
    about = "Extract a job application record from pasted text"
)]
struct Args {
    /// File with the pasted text; reads stdin when omitted
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Config file to use instead of the one in the user config directory
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Job titles JSON file, overrides the config
    #[arg(long, value_name = "PATH")]
    keywords_file: Option<PathBuf>,

    /// Backend endpoint serving job title keywords, overrides the config
    #[arg(long)]
    keywords_url: Option<String>,

    #[arg(long)]
    log_file_path: Option<String>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file_path.as_deref());

    let tracker_config = match &args.config {
        Some(path) => config::TrackerConfig::load_from(path)
            .with_context(|| format!("Failed to load config at {:?}", path))?,
        None => {
            let (config, path) =
                config::TrackerConfig::load().context("Failed to load jobtrack config")?;
            tracing::debug!("Loaded config from {:?}", path);
            config
        }
    };

    let mut keywords_config = tracker_config.keywords();
    if let Some(file) = args.keywords_file {
        keywords_config.file = Some(file);
        keywords_config.url = None;
    }
    if let Some(url) = args.keywords_url {
        keywords_config.url = Some(url);
    }

    let keyword_source = keyword_client::build_keyword_source(&keywords_config)?;
    let extractor = JobTextExtractor::new(keyword_source);

    let text = read_input(args.input.as_deref())?;
    let result = extractor.extract(&text).await;

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input from {:?}", path)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read input from stdin")?;
            Ok(text)
        }
    }
}

/// Logs go to stderr so stdout only carries the JSON result.
fn init_tracing(log_file_path: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("jobtrack.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
