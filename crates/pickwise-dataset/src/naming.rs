//! Output file names for merged datasets.
//!
//! Per-set exports carry a segment marker in their file name, e.g.
//! `OTJ_PremierDraft_Top_Data.json`. The merged file replaces that marker
//! with `_Combined_`.

use std::path::{Path, PathBuf};

/// Markers recognized in input file names, in the order they are tried.
pub const SEGMENT_MARKERS: [&str; 4] = ["_Top_", "_Middle_", "_Bottom_", "_All_"];

pub const COMBINED_MARKER: &str = "_Combined_";

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum NamingError {
    #[display("cannot derive a combined file name from '{}': no segment marker in the file name", path.display())]
    NoMarker { path: PathBuf },
}

/// Derives the merged output path from one input path.
///
/// Only the file name is rewritten; the directory is kept.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use pickwise_dataset::naming::combined_output_path;
///
/// let path = combined_output_path(Path::new("data/OTJ_PremierDraft_Top_Data.json")).unwrap();
/// assert_eq!(path, Path::new("data/OTJ_PremierDraft_Combined_Data.json"));
/// ```
pub fn combined_output_path(input: &Path) -> Result<PathBuf, NamingError> {
    let no_marker = || NamingError::NoMarker {
        path: input.to_owned(),
    };
    let file_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(no_marker)?;
    let marker = SEGMENT_MARKERS
        .iter()
        .find(|marker| file_name.contains(*marker))
        .ok_or_else(no_marker)?;
    Ok(input.with_file_name(file_name.replacen(marker, COMBINED_MARKER, 1)))
}
