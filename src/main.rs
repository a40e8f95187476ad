//! Hedgecalc CLI - prints every hedging demonstration

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use hedgecalc::{all_suites, ShowcaseConfig};

#[derive(Parser)]
#[command(name = "hedgecalc")]
#[command(author, version, about = "Horse racing hedge strategy calculator", long_about = None)]
struct Cli {
    /// Log calculation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging, stdout is reserved for the tables
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = ShowcaseConfig::default();
    debug!(?config, "Using demonstration parameters");

    let suites = all_suites(&config).context("Failed to compute hedge scenarios")?;
    for suite in &suites {
        suite
            .display()
            .with_context(|| format!("Failed to report {}", suite.banner))?;
    }

    Ok(())
}
