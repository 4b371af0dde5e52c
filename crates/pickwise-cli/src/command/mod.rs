use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use self::{evaluate::EvaluateArg, merge::MergeArg, metrics::MetricsArg};

mod evaluate;
mod merge;
mod metrics;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log debug output (overridden by `RUST_LOG`)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Merge per-segment statistics documents of one set into a single dataset
    Merge(#[clap(flatten)] MergeArg),
    /// Rank the cards of a pack for the current pick
    Evaluate(#[clap(flatten)] EvaluateArg),
    /// Show win-rate mean and spread per color context
    Metrics(#[clap(flatten)] MetricsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    match args.mode {
        Mode::Merge(arg) => merge::run(&arg)?,
        Mode::Evaluate(arg) => evaluate::run(&arg)?,
        Mode::Metrics(arg) => metrics::run(&arg)?,
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "pickwise=debug,warn"
    } else {
        "pickwise=info,warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
