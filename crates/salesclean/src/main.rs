use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use salesclean_core::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use salesclean_core::{CleaningConfig, CriticalPolicy, Pipeline};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Clean a raw sales-transaction CSV file", long_about = None)]
struct Cli {
    /// Raw sales CSV to clean
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,
    /// Destination for the cleaned CSV (parent directories are created)
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
    /// TOML file overriding the designated columns and policies
    #[arg(long)]
    config: Option<PathBuf>,
    /// Drop rows when `all` or `any` of the critical columns are missing
    #[arg(long)]
    critical_policy: Option<CriticalPolicy>,
    /// Skip printing the re-loaded cleaned table
    #[arg(long)]
    no_preview: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();

    tracing::subscriber::with_default(subscriber, || run(cli))
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => CleaningConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CleaningConfig::default(),
    };
    if let Some(policy) = cli.critical_policy {
        config = config.with_critical_policy(policy);
    }

    let pipeline = Pipeline::new(config);
    pipeline
        .run(&cli.input, &cli.output)
        .context("sales cleaning pipeline failed")?;

    info!("Data cleaning process completed successfully");
    if !cli.no_preview {
        let preview = pipeline
            .load(&cli.output)
            .context("failed to re-load cleaned output")?;
        println!("Data cleaning process completed successfully. \nCleaned data preview:");
        println!("{preview}");
    }

    Ok(())
}
