use std::path::PathBuf;

use pickwise_dataset::{SetMetrics, fields};
use serde::Serialize;

use crate::util::{Output, read_dataset_file};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MetricsArg {
    /// Dataset file (a per-set or merged statistics document)
    #[arg(long)]
    dataset: PathBuf,
    /// Only report this color context (e.g. "All Decks", "WU")
    #[arg(long)]
    context: Option<String>,
    /// Only report this win-rate field
    #[arg(long, value_enum)]
    field: Option<WinRateField>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum WinRateField {
    Gihwr,
    Ohwr,
    Gpwr,
    Gnswr,
    Gdwr,
}

impl WinRateField {
    fn key(self) -> &'static str {
        match self {
            Self::Gihwr => fields::GIHWR,
            Self::Ohwr => fields::OHWR,
            Self::Gpwr => fields::GPWR,
            Self::Gnswr => fields::GNSWR,
            Self::Gdwr => fields::GDWR,
        }
    }
}

#[derive(Debug, Serialize)]
struct MetricsRow<'a> {
    field: &'a str,
    context: &'a str,
    mean: f64,
    std: f64,
}

pub(crate) fn run(arg: &MetricsArg) -> anyhow::Result<()> {
    let store = read_dataset_file(&arg.dataset)?;
    let metrics = SetMetrics::from_store(&store);

    let rows = metrics
        .iter()
        .filter(|(field, _, _)| arg.field.is_none_or(|f| f.key() == *field))
        .filter(|(_, context, _)| arg.context.as_deref().is_none_or(|c| c == *context))
        .map(|(field, context, _)| {
            let (mean, std) = metrics.metrics(context, field);
            MetricsRow {
                field,
                context,
                mean,
                std,
            }
        })
        .collect::<Vec<_>>();

    if rows.is_empty() {
        tracing::warn!("no metrics match the given context and field");
    }
    Output::save_json(&rows, arg.output.clone())?;
    Ok(())
}
