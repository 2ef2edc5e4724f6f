use super::*;
use clap::CommandFactory;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_merge_platforms_keeps_input_order() {
    let cli = Cli::try_parse_from([
        "playlog",
        "merge-platforms",
        "-o",
        "out.json",
        "steam.json",
        "psn.json",
    ])
    .unwrap();
    match cli.command {
        Commands::MergePlatforms { output, inputs } => {
            assert_eq!(output, PathBuf::from("out.json"));
            assert_eq!(
                inputs,
                vec![PathBuf::from("steam.json"), PathBuf::from("psn.json")]
            );
        }
        _ => panic!("expected merge-platforms"),
    }
}

#[test]
fn test_merge_platforms_requires_inputs() {
    assert!(Cli::try_parse_from(["playlog", "merge-platforms", "-o", "out.json"]).is_err());
}

#[test]
fn test_process_skip_list() {
    let cli = Cli::try_parse_from([
        "playlog",
        "process",
        "--skip",
        "gog-annotations,annotate-games",
    ])
    .unwrap();
    match cli.command {
        Commands::Process { skip, data_dir } => {
            assert_eq!(skip, vec![Step::GogAnnotations, Step::AnnotateGames]);
            assert_eq!(data_dir, None);
        }
        _ => panic!("expected process"),
    }
}

#[test]
fn test_unknown_step_rejected() {
    assert!(Cli::try_parse_from(["playlog", "process", "--skip", "scrape"]).is_err());
}

#[test]
fn test_annotate_url_preference_override() {
    let cli = Cli::try_parse_from([
        "playlog",
        "-v",
        "annotate",
        "-p",
        "merged.json",
        "-a",
        "annotations.json",
        "-o",
        "out.json",
        "-b",
        "blank.json",
        "--url-preference",
        "PS5,Steam",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 1);
    match cli.command {
        Commands::Annotate { url_preference, .. } => {
            assert_eq!(
                url_preference,
                Some(vec!["PS5".to_string(), "Steam".to_string()])
            );
        }
        _ => panic!("expected annotate"),
    }
}
