use super::*;
use crate::tests_support::annotation;

fn platform_titles(titles: &[&str]) -> GameMap<()> {
    titles.iter().map(|t| (t.to_string(), ())).collect()
}

#[test]
fn test_uncovered_platform_games_get_stubs() {
    let platform = platform_titles(&["Foo", "Bar", "Baz (Remaster)"]);
    let mut baz = annotation(None, None, &[]);
    baz.aliases = vec!["Baz (Remaster)".into()];
    let annotations = vec![
        GameEntry::new("Foo", annotation(Some(4.0), Some("Completed"), &[])),
        GameEntry::new("Baz", baz),
    ];

    let (report, _) = report_coverage(&platform, &annotations);

    assert_eq!(report.missing_annotations.iter().collect::<Vec<_>>(), vec!["Bar"]);
    let stubs = report.stub_annotations();
    assert_eq!(stubs.len(), 1);
    assert_eq!(stubs["Bar"], Annotation::stub());
    assert_eq!(stubs["Bar"].rating, None);
    assert!(stubs["Bar"].tags.is_empty());
}

#[test]
fn test_annotation_covered_through_alias_is_not_missing() {
    let platform = platform_titles(&["Baz (Remaster)"]);
    let mut baz = annotation(Some(3.0), None, &[]);
    baz.aliases = vec!["Baz (Remaster)".into(), "BAZ".into()];
    let annotations = vec![
        GameEntry::new("Baz", baz),
        GameEntry::new("Qux", annotation(Some(2.0), None, &[])),
    ];

    let (report, diagnostics) = report_coverage(&platform, &annotations);

    assert!(report.missing_annotations.is_empty());
    // Only canonical names are reported, never their aliases.
    assert_eq!(
        report.missing_platform_data.iter().collect::<Vec<_>>(),
        vec!["Qux"]
    );
    assert_eq!(
        diagnostics.events(),
        &[Diagnostic::MissingPlatformData {
            title: "Qux".into()
        }]
    );
}

#[test]
fn test_unrated_annotations_still_count_as_coverage() {
    let platform = platform_titles(&["Foo"]);
    let annotations = vec![GameEntry::new("Foo", annotation(None, None, &[]))];

    let (report, _) = report_coverage(&platform, &annotations);
    assert!(report.is_complete());
}
