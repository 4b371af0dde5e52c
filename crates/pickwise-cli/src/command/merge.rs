use std::path::PathBuf;

use anyhow::Context as _;
use pickwise_dataset::{
    merge::DatasetMerger, naming::combined_output_path, stat_table::StatNatureTable,
};
use serde_json::Value;

use crate::util::{Output, read_json_file};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MergeArg {
    /// Statistics documents of one set, merged in the given order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Output file path [default: the first input with its `_Top_`, `_Middle_`, `_Bottom_` or `_All_` marker replaced by `_Combined_`]
    #[arg(long)]
    output: Option<PathBuf>,
    /// JSON table of statistic natures [default: built-in 17Lands table]
    #[arg(long)]
    stat_table: Option<PathBuf>,
    /// Write the merged dataset even if some sections could not be merged
    #[arg(long)]
    allow_partial: bool,
}

pub(crate) fn run(arg: &MergeArg) -> anyhow::Result<()> {
    let table = match &arg.stat_table {
        Some(path) => {
            let table: StatNatureTable = read_json_file("stat table", path)?;
            table
                .validate()
                .with_context(|| format!("Invalid stat table: {}", path.display()))?;
            table
        }
        None => StatNatureTable::default(),
    };

    let first_input = arg.inputs.first().context("No input files given")?;
    let output_path = match &arg.output {
        Some(path) => path.clone(),
        None => combined_output_path(first_input)?,
    };

    eprintln!("Reading {} statistics documents...", arg.inputs.len());
    let documents = arg
        .inputs
        .iter()
        .map(|path| read_json_file::<Value, _>("statistics", path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    eprintln!("Merging...");
    let outcome = DatasetMerger::new(&table)
        .merge(&documents)
        .context("Failed to merge statistics documents")?;

    if !outcome.is_complete() {
        for issue in &outcome.issues {
            eprintln!("  {issue}");
        }
        anyhow::ensure!(
            arg.allow_partial,
            "{} section(s) could not be merged; pass --allow-partial to write the partial dataset",
            outcome.issues.len()
        );
    }

    Output::save_json(&outcome.store, Some(output_path.clone()))?;
    eprintln!(
        "Merged {} cards ({} games) into {}",
        outcome.store.card_ratings.len(),
        outcome.store.meta.game_count,
        output_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use pickwise_dataset::CardStatStore;
    use serde_json::json;

    use super::*;

    fn write_document(dir: &Path, name: &str, document: &Value) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, serde_json::to_string(document).unwrap()).unwrap();
        path
    }

    fn document(game_count: u64, gihwr: f64) -> Value {
        json!({
            "meta": {"game_count": game_count},
            "color_ratings": {"WU": 55.0},
            "card_ratings": {
                "1": {"name": "Bear", "deck_colors": {"All Decks": {"gihwr": gihwr, "gih": 100.0}}}
            }
        })
    }

    fn merge_arg(inputs: Vec<PathBuf>) -> MergeArg {
        MergeArg {
            inputs,
            output: None,
            stat_table: None,
            allow_partial: false,
        }
    }

    #[test]
    fn test_writes_combined_file() {
        let dir = tempfile::tempdir().unwrap();
        let top = write_document(dir.path(), "OTJ_PremierDraft_Top_Data.json", &document(100, 60.0));
        let bottom = write_document(
            dir.path(),
            "OTJ_PremierDraft_Bottom_Data.json",
            &document(300, 50.0),
        );

        run(&merge_arg(vec![top, bottom])).unwrap();

        let merged: CardStatStore =
            read_json_file("dataset", dir.path().join("OTJ_PremierDraft_Combined_Data.json"))
                .unwrap();
        assert_eq!(merged.meta.game_count, 400);
        assert_eq!(merged.card_ratings["1"].stat("All Decks", "gihwr"), 55.0);
    }

    #[test]
    fn test_explicit_output_and_stat_table() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_document(dir.path(), "a.json", &document(100, 60.0));
        let b = write_document(dir.path(), "b.json", &document(100, 50.0));
        let table = write_document(
            dir.path(),
            "table.json",
            &json!({"gih": "count", "gihwr": "count"}),
        );
        let output = dir.path().join("out.json");

        let mut arg = merge_arg(vec![a, b]);
        arg.output = Some(output.clone());
        arg.stat_table = Some(table);
        run(&arg).unwrap();

        let merged: CardStatStore = read_json_file("dataset", &output).unwrap();
        assert_eq!(merged.card_ratings["1"].stat("All Decks", "gihwr"), 110.0);
    }

    #[test]
    fn test_input_without_marker_needs_output() {
        let dir = tempfile::tempdir().unwrap();
        let plain = write_document(dir.path(), "plain.json", &document(100, 60.0));
        assert!(run(&merge_arg(vec![plain])).is_err());
    }

    #[test]
    fn test_partial_merge_requires_flag() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_document(dir.path(), "S_Top_Data.json", &document(100, 60.0));
        let bad = write_document(
            dir.path(),
            "S_Bottom_Data.json",
            &json!({"meta": {}, "color_ratings": {"WU": 55.0}, "card_ratings": {"1": {"cmc": 2}}}),
        );
        let combined = dir.path().join("S_Combined_Data.json");

        let mut arg = merge_arg(vec![good, bad]);
        assert!(run(&arg).is_err());
        assert!(!combined.exists());

        arg.allow_partial = true;
        run(&arg).unwrap();
        let merged: CardStatStore = read_json_file("dataset", &combined).unwrap();
        assert!(merged.card_ratings.is_empty());
        assert_eq!(merged.color_ratings["WU"], 55.0);
    }

    #[test]
    fn test_invalid_stat_table_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_document(dir.path(), "a.json", &document(100, 60.0));
        let table = write_document(
            dir.path(),
            "table.json",
            &json!({"gihwr": {"rate": {"count": "missing"}}}),
        );
        let mut arg = merge_arg(vec![a]);
        arg.output = Some(dir.path().join("out.json"));
        arg.stat_table = Some(table);
        assert!(run(&arg).is_err());
    }
}
