use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use playlog_catalog::{GameMap, JsonStyle, PlatformRecord, PlaytimeAnnotation, load_entries, write_games};
use playlog_merge::{TitlePolicy, apply_playtime, normalize_platform};

use super::{load_unique, report_diagnostics};
use crate::error::CliError;

/// Run the `gog-annotate` command: overlay manual playtime onto GOG records.
///
/// Only games with a playtime annotation are written.
pub(crate) fn run_gog_annotate(
    gog_games: &Path,
    annotations: &Path,
    output: &Path,
    style: JsonStyle,
) -> Result<(), CliError> {
    let entries = load_entries::<PlatformRecord>(gog_games)?;
    let (records, mut diagnostics) = normalize_platform(
        entries,
        &gog_games.display().to_string(),
        TitlePolicy::Unique,
    )?;
    let playtime: GameMap<PlaytimeAnnotation> = load_unique(annotations)?;
    log::info!(
        "Loaded {} GOG games and {} playtime annotations",
        records.len(),
        playtime.len(),
    );

    let (annotated, overlay_diagnostics) = apply_playtime(&records, &playtime);
    diagnostics.extend(overlay_diagnostics);
    report_diagnostics(&diagnostics);

    write_games(output, &annotated, style)?;
    log::info!(
        "{} {} GOG games -> {}",
        "Annotated".if_supports_color(Stdout, |t| t.bold()),
        annotated.len(),
        output.display(),
    );
    Ok(())
}
