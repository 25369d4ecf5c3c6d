//! climan: write reference pages for an installed command.
//!
//! `climan -r commands.json -t man/ tool` looks `tool` up in the registry and
//! writes `man/tool.1` plus one page per leaf command.

use anyhow::{Context, Result};
use clap::Parser;
use climan::{walker, Format, GenerateOptions, Registry};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "climan",
    version,
    about = "Generate man pages for the commands listed in a registry file"
)]
struct Cli {
    /// Name of the installed command to document
    name: String,

    /// Target location for the generated pages
    #[arg(short = 't', long, default_value = "man")]
    target: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Man)]
    format: Format,

    /// Generate asciidoc instead of man pages (same as --format asciidoc)
    #[arg(short = 'a', long)]
    asciidoc: bool,

    /// The section number in which the man page should be placed
    #[arg(short = 'm', long, default_value_t = walker::DEFAULT_SECTION)]
    mansect: u32,

    /// The source of the command
    #[arg(short = 's', long, default_value = walker::DEFAULT_SOURCE)]
    source: String,

    /// The title of the manual
    #[arg(short = 'T', long, default_value = walker::DEFAULT_MANUAL)]
    manual: String,

    /// Registry file describing the installed commands
    #[arg(short = 'r', long, default_value = "commands.json")]
    registry: PathBuf,

    /// Date printed on every page (default: SOURCE_DATE_EPOCH, else today)
    #[arg(long)]
    date: Option<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let registry = Registry::load(&cli.registry)?;
    let entry = registry.lookup(&cli.name)?;
    info!("Load entry point {}", cli.name);

    let format = if cli.asciidoc {
        Format::Asciidoc
    } else {
        cli.format
    };
    let options = GenerateOptions {
        target_dir: cli.target.clone(),
        format,
        section: cli.mansect,
        source: cli.source.clone(),
        manual: cli.manual.clone(),
        version: entry.version.clone(),
        date: resolve_date(cli.date.as_deref())?,
    };

    info!(
        "Generate {} pages for {} in {}",
        format.label(),
        cli.name,
        cli.target.display()
    );
    let written = climan::generate(&entry.command, &cli.name, &options)
        .with_context(|| format!("failed to generate pages for {}", cli.name))?;
    info!("Wrote {} pages", written.len());
    Ok(())
}

/// `--date` wins, then SOURCE_DATE_EPOCH for reproducible builds, then today.
fn resolve_date(explicit: Option<&str>) -> Result<String> {
    if let Some(date) = explicit {
        return Ok(date.to_string());
    }
    match std::env::var("SOURCE_DATE_EPOCH") {
        Ok(epoch) => date_from_epoch(&epoch),
        Err(_) => Ok(walker::today()),
    }
}

fn date_from_epoch(epoch: &str) -> Result<String> {
    let secs: i64 = epoch
        .trim()
        .parse()
        .with_context(|| format!("invalid SOURCE_DATE_EPOCH: {}", epoch))?;
    let date = chrono::DateTime::from_timestamp(secs, 0)
        .with_context(|| format!("SOURCE_DATE_EPOCH out of range: {}", epoch))?;
    Ok(date.format("%d-%b-%Y").to_string())
}
