use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use playlog_catalog::{AccumulatedGame, Annotation, GameEntry, GameMap, JsonStyle, load_entries, write_games};
use playlog_merge::{annotate_games, ensure_unique_titles};

use super::{load_unique, report_diagnostics};
use crate::error::CliError;

/// Paths used by the `annotate` command.
pub(crate) struct AnnotatePaths<'a> {
    pub platform_data: &'a Path,
    pub annotations: &'a Path,
    pub output: &'a Path,
    pub blank_annotations: &'a Path,
}

/// Run the `annotate` command.
///
/// The blank-annotation file is only written when some platform game has no
/// annotation. Both files are written after the whole merge has succeeded.
pub(crate) fn run_annotate<S: AsRef<str>>(
    paths: &AnnotatePaths<'_>,
    url_preference: &[S],
    style: JsonStyle,
) -> Result<(), CliError> {
    let platform_data: GameMap<AccumulatedGame> = load_unique(paths.platform_data)?;
    // Kept in file order: the earlier definition wins a contested alias.
    let annotations: Vec<GameEntry<Annotation>> = load_entries(paths.annotations)?;
    ensure_unique_titles(&annotations, &paths.annotations.display().to_string())?;
    log::info!(
        "Loaded {} platform games and {} annotations",
        platform_data.len(),
        annotations.len(),
    );

    let outcome = annotate_games(&platform_data, &annotations, url_preference)?;
    report_diagnostics(&outcome.diagnostics);

    let stubs = outcome.coverage.stub_annotations();
    if !stubs.is_empty() {
        write_games(paths.blank_annotations, &stubs, style)?;
        log::info!(
            "Wrote {} blank annotations to {}",
            stubs.len(),
            paths.blank_annotations.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    write_games(paths.output, &outcome.games, style)?;

    log::info!("");
    log::info!("{}", "Annotation complete".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Games written:            {:>6}", outcome.games.len());
    log::info!(
        "  Missing annotations:      {:>6}",
        outcome.coverage.missing_annotations.len()
    );
    log::info!(
        "  Missing platform data:    {:>6}",
        outcome.coverage.missing_platform_data.len()
    );
    if !outcome.coverage.is_complete() {
        log::info!(
            "{}",
            "Coverage incomplete: see messages above".if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    Ok(())
}
