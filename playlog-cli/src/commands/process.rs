//! The `process` command: every stage over the standard data layout.
//!
//! ```text
//! DATA/games-raw/        platform snapshots
//! DATA/manual/           gog-annotations.json, annotations.json, blank-annotations.json
//! DATA/games-processed/  gog-games-annotated.json, merged-platforms.json, annotated-games.json
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::ValueEnum;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use playlog_catalog::JsonStyle;

use super::annotate::{AnnotatePaths, run_annotate};
use super::gog::run_gog_annotate;
use super::merge::run_merge_platforms;
use crate::error::CliError;
use crate::settings::Settings;

/// A pipeline stage that can be skipped with `--skip`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Step {
    GogAnnotations,
    PlatformMerge,
    AnnotateGames,
}

impl Step {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::GogAnnotations => "gog-annotations",
            Self::PlatformMerge => "platform-merge",
            Self::AnnotateGames => "annotate-games",
        }
    }
}

/// File locations under a data directory.
#[derive(Debug, Clone)]
pub(crate) struct DataLayout {
    pub raw: PathBuf,
    pub manual: PathBuf,
    pub processed: PathBuf,
}

impl DataLayout {
    pub(crate) fn new(data_dir: &Path) -> Self {
        Self {
            raw: data_dir.join("games-raw"),
            manual: data_dir.join("manual"),
            processed: data_dir.join("games-processed"),
        }
    }

    pub(crate) fn gog_annotations(&self) -> PathBuf {
        self.manual.join("gog-annotations.json")
    }

    pub(crate) fn annotations(&self) -> PathBuf {
        self.manual.join("annotations.json")
    }

    pub(crate) fn blank_annotations(&self) -> PathBuf {
        self.manual.join("blank-annotations.json")
    }

    pub(crate) fn gog_annotated(&self) -> PathBuf {
        self.processed.join("gog-games-annotated.json")
    }

    pub(crate) fn merged_platforms(&self) -> PathBuf {
        self.processed.join("merged-platforms.json")
    }

    pub(crate) fn annotated_games(&self) -> PathBuf {
        self.processed.join("annotated-games.json")
    }

    /// Raw snapshots the non-skipped steps read.
    pub(crate) fn expected_inputs(&self, settings: &Settings, skip: &[Step]) -> Vec<PathBuf> {
        let mut inputs = Vec::new();
        if !skip.contains(&Step::GogAnnotations) || !skip.contains(&Step::PlatformMerge) {
            inputs.push(self.raw.join(&settings.gog_file));
        }
        if !skip.contains(&Step::PlatformMerge) {
            inputs.extend(settings.platform_files.iter().map(|f| self.raw.join(f)));
        }
        inputs
    }
}

fn verify_inputs(paths: Vec<PathBuf>) -> Result<(), CliError> {
    let missing: Vec<PathBuf> = paths.into_iter().filter(|p| !p.exists()).collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CliError::MissingInputs(missing))
    }
}

/// Run the `process` command.
pub(crate) fn run_process(
    settings: &Settings,
    data_dir: &Path,
    skip: &[Step],
    style: JsonStyle,
) -> Result<(), CliError> {
    let start = Instant::now();
    let layout = DataLayout::new(data_dir);

    log::info!("Raw data directory: {}", layout.raw.display());
    log::info!("Manual data directory: {}", layout.manual.display());
    log::info!("Processed data directory: {}", layout.processed.display());
    if !skip.is_empty() {
        let names: Vec<&str> = skip.iter().map(|s| s.name()).collect();
        log::info!("Skipping steps: {}", names.join(", "));
    }

    std::fs::create_dir_all(&layout.processed)?;
    std::fs::create_dir_all(&layout.manual)?;
    verify_inputs(layout.expected_inputs(settings, skip))?;

    if !skip.contains(&Step::GogAnnotations) {
        log::info!(
            "\n{}",
            "GOG annotations".if_supports_color(Stdout, |t| t.bold())
        );
        run_gog_annotate(
            &layout.raw.join(&settings.gog_file),
            &layout.gog_annotations(),
            &layout.gog_annotated(),
            style,
        )?;
    }

    if !skip.contains(&Step::PlatformMerge) {
        log::info!(
            "\n{}",
            "Platform merge".if_supports_color(Stdout, |t| t.bold())
        );
        let mut inputs: Vec<PathBuf> = settings
            .platform_files
            .iter()
            .map(|f| layout.raw.join(f))
            .collect();
        let gog_annotated = layout.gog_annotated();
        if gog_annotated.exists() {
            log::info!("Using annotated GOG data");
            inputs.push(gog_annotated);
        } else {
            log::warn!("Using raw GOG data (no annotations found)");
            inputs.push(layout.raw.join(&settings.gog_file));
        }
        run_merge_platforms(&inputs, &layout.merged_platforms(), style)?;
    }

    if !skip.contains(&Step::AnnotateGames) {
        log::info!(
            "\n{}",
            "Manual annotations".if_supports_color(Stdout, |t| t.bold())
        );
        let merged = layout.merged_platforms();
        let annotations = layout.annotations();
        let output = layout.annotated_games();
        let blank = layout.blank_annotations();
        run_annotate(
            &AnnotatePaths {
                platform_data: &merged,
                annotations: &annotations,
                output: &output,
                blank_annotations: &blank,
            },
            &settings.url_preference,
            style,
        )?;
    }

    log::info!("");
    log::info!(
        "{}",
        "Processing complete".if_supports_color(Stdout, |t| t.green()),
    );
    log::info!("Final output available in: {}", layout.annotated_games().display());
    log::info!(
        "Total time elapsed: {:.1} seconds",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
#[path = "tests/process_tests.rs"]
mod tests;
