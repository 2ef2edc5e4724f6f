use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use playlog_catalog::{JsonStyle, load_entries, write_games};
use playlog_merge::{PlatformBatch, merge_platforms};

use super::report_diagnostics;
use crate::error::CliError;

/// Run the `merge-platforms` command.
///
/// Inputs are folded in the order given. Nothing is written if any input
/// fails to load or violates an integrity check.
pub(crate) fn run_merge_platforms(
    inputs: &[PathBuf],
    output: &Path,
    style: JsonStyle,
) -> Result<(), CliError> {
    let mut batches = Vec::with_capacity(inputs.len());
    for path in inputs {
        let entries = load_entries(path)?;
        log::info!(
            "  {} {} records",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            entries.len(),
        );
        batches.push(PlatformBatch {
            input: path.display().to_string(),
            entries,
        });
    }

    let (catalog, diagnostics) = merge_platforms(batches)?;
    report_diagnostics(&diagnostics);

    write_games(output, &catalog, style)?;
    log::info!(
        "{} {} games from {} files -> {}",
        "Merged".if_supports_color(Stdout, |t| t.bold()),
        catalog.len(),
        inputs.len(),
        output.display(),
    );
    Ok(())
}
