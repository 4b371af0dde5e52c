use std::{path::PathBuf, sync::Arc};

use pickwise_advisor::{PackScorer, PickTracker, Recommendation};
use pickwise_dataset::{CardStatStore, Color};
use serde::Serialize;

use crate::util::{Output, read_dataset_file};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    /// Dataset file (a per-set or merged statistics document)
    #[arg(long)]
    dataset: PathBuf,
    /// Current pick, 1-based across the whole draft [default: pool size + 1]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pick: Option<u32>,
    /// Card id already in the pool (repeatable)
    #[arg(long = "pool", value_name = "ID")]
    pool: Vec<String>,
    /// Card id in the current pack (repeatable)
    #[arg(long = "pack", value_name = "ID", required = true)]
    pack: Vec<String>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct EvaluationReport<'a> {
    pick: u32,
    active_colors: &'a [Color],
    recommendations: Vec<Recommendation>,
}

pub(crate) fn run(arg: &EvaluateArg) -> anyhow::Result<()> {
    let store = read_dataset_file(&arg.dataset)?;
    warn_unknown_ids(&store, "pool", &arg.pool);
    warn_unknown_ids(&store, "pack", &arg.pack);

    let pool = store
        .cards_by_ids(arg.pool.iter().map(String::as_str))
        .into_iter()
        .cloned()
        .collect();
    let tracker = PickTracker::new(pool);
    let pick = arg.pick.unwrap_or_else(|| tracker.current_pick());

    let scorer = PackScorer::new(Arc::new(store));
    let recommendations = scorer.evaluate_ids(
        tracker.summary(),
        tracker.active_colors(),
        arg.pack.iter().map(String::as_str),
        pick,
    );

    let report = EvaluationReport {
        pick,
        active_colors: tracker.active_colors(),
        recommendations,
    };
    Output::save_json(&report, arg.output.clone())?;
    Ok(())
}

fn warn_unknown_ids(store: &CardStatStore, kind: &str, ids: &[String]) {
    for id in ids.iter().filter(|id| store.card(id).is_none()) {
        tracing::warn!(id = %id, "unknown {kind} card id; skipped");
    }
}
