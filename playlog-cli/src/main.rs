//! playlog CLI
//!
//! Merges per-platform game library snapshots into one catalog keyed by
//! curated display names.

mod commands;
mod error;
mod logging;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use playlog_catalog::JsonStyle;

use commands::annotate::AnnotatePaths;
use commands::process::Step;
use error::CliError;
use settings::Settings;

#[derive(Parser)]
#[command(name = "playlog")]
#[command(about = "Merge game libraries from several platforms into one annotated catalog", long_about = None)]
struct Cli {
    /// Show debug output (repeat for trace output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Write indented JSON (overrides `pretty_json` in settings)
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Accumulate platform snapshots into one catalog keyed by reported title
    MergePlatforms {
        /// Output file for the accumulated catalog
        #[arg(short, long)]
        output: PathBuf,

        /// Platform snapshot files, merged in the order given
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Join the accumulated catalog with curated annotations
    Annotate {
        /// Accumulated catalog produced by merge-platforms
        #[arg(short, long)]
        platform_data: PathBuf,

        /// Curated annotations file
        #[arg(short, long)]
        annotations: PathBuf,

        /// Output file for the final catalog
        #[arg(short, long)]
        output: PathBuf,

        /// Where to write blank annotations for uncurated games
        #[arg(short, long)]
        blank_annotations: PathBuf,

        /// Platforms whose url is preferred as the display url (e.g., Steam,PS5)
        #[arg(long, value_delimiter = ',')]
        url_preference: Option<Vec<String>>,
    },

    /// Overlay manual playtime onto a GOG snapshot
    GogAnnotate {
        /// Raw GOG snapshot
        #[arg(short, long)]
        gog_games: PathBuf,

        /// Manual playtime annotations
        #[arg(short, long)]
        annotations: PathBuf,

        /// Output file for the annotated GOG snapshot
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Run every stage over the standard data directory layout
    Process {
        /// Steps to skip (e.g., gog-annotations,platform-merge)
        #[arg(short, long, value_delimiter = ',')]
        skip: Vec<Step>,

        /// Data directory (defaults to `data_dir` in settings)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Inspect playlog settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load()?;
    let style = if cli.pretty {
        JsonStyle::Pretty
    } else {
        settings.json_style()
    };

    match cli.command {
        Commands::MergePlatforms { output, inputs } => {
            commands::merge::run_merge_platforms(&inputs, &output, style)
        }
        Commands::Annotate {
            platform_data,
            annotations,
            output,
            blank_annotations,
            url_preference,
        } => {
            let url_preference = url_preference.unwrap_or_else(|| settings.url_preference.clone());
            commands::annotate::run_annotate(
                &AnnotatePaths {
                    platform_data: &platform_data,
                    annotations: &annotations,
                    output: &output,
                    blank_annotations: &blank_annotations,
                },
                &url_preference,
                style,
            )
        }
        Commands::GogAnnotate {
            gog_games,
            annotations,
            output,
        } => commands::gog::run_gog_annotate(&gog_games, &annotations, &output, style),
        Commands::Process { skip, data_dir } => {
            let data_dir = data_dir.unwrap_or_else(|| settings.data_dir.clone());
            commands::process::run_process(&settings, &data_dir, &skip, style)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    }
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
