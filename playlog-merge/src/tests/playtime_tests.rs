use super::*;
use crate::tests_support::{date, record};

#[test]
fn test_playtime_overrides_only_annotated_games() {
    let mut gog = GameMap::new();
    gog.insert("Witcher".to_string(), record("GOG", "10", "ug10", None, 0.0));
    gog.insert("Unplayed".to_string(), record("GOG", "11", "ug11", None, 0.0));

    let mut playtime = GameMap::new();
    playtime.insert(
        "Witcher".to_string(),
        PlaytimeAnnotation {
            last_played: Some(date("2021-03-04")),
            hours_played: 120.0,
        },
    );
    playtime.insert(
        "Ghost".to_string(),
        PlaytimeAnnotation {
            last_played: None,
            hours_played: 2.0,
        },
    );

    let (annotated, diagnostics) = apply_playtime(&gog, &playtime);

    assert_eq!(annotated.keys().collect::<Vec<_>>(), vec!["Witcher"]);
    let witcher = &annotated["Witcher"];
    assert_eq!(witcher.hours_played, 120.0);
    assert_eq!(witcher.last_played, Some(date("2021-03-04")));
    assert_eq!(witcher.id, "10");
    assert_eq!(witcher.url, "ug10");
    assert_eq!(witcher.platform, "GOG");

    assert_eq!(
        diagnostics.events(),
        &[Diagnostic::UnmatchedPlaytime {
            title: "Ghost".into()
        }]
    );
}
