use super::*;
use crate::tests_support::{date, record};

fn batch(records: &[(&str, PlatformRecord)]) -> GameMap<PlatformRecord> {
    records
        .iter()
        .map(|(title, r)| (title.to_string(), r.clone()))
        .collect()
}

#[test]
fn test_most_recent() {
    let a = Some(date("2024-01-01"));
    let b = Some(date("2024-06-01"));
    assert_eq!(most_recent(a, b), b);
    assert_eq!(most_recent(b, a), b);
    assert_eq!(most_recent(a, a), a);
    assert_eq!(most_recent(None, a), a);
    assert_eq!(most_recent(a, None), a);
    assert_eq!(most_recent(None, None), None);
}

#[test]
fn test_two_platforms_accumulate_into_one_game() {
    let steam = batch(&[("Foo", record("Steam", "1", "u1", Some("2024-01-01"), 3.0))]);
    let ps5 = batch(&[("Foo", record("PS5", "2", "u2", Some("2024-06-01"), 7.0))]);

    let catalog = accumulate_all([&steam, &ps5]).unwrap();

    assert_eq!(catalog.len(), 1);
    let foo = &catalog["Foo"];
    assert_eq!(foo.platforms().collect::<Vec<_>>(), vec!["Steam", "PS5"]);
    assert_eq!(foo.hours_played_total, 10.0);
    assert_eq!(foo.last_played_total, Some(date("2024-06-01")));
    assert_eq!(foo.slots[0].id, "1");
    assert_eq!(foo.slots[1].url, "u2");
}

#[test]
fn test_same_batch_twice_doubles_hours_in_one_slot() {
    let psn = batch(&[
        ("Foo", record("PS5", "a", "ua", Some("2024-02-01"), 4.5)),
        ("Bar", record("PS5", "b", "ub", None, 1.0)),
    ]);

    let once = accumulate(GameMap::new(), &psn).unwrap();
    let twice = accumulate(once.clone(), &psn).unwrap();

    for (title, game) in &twice {
        assert_eq!(game.slots.len(), 1, "{title}");
        assert_eq!(game.hours_played_total, once[title].hours_played_total * 2.0);
        assert_eq!(game.slots[0].hours_played, once[title].slots[0].hours_played * 2.0);
        assert_eq!(game.last_played_total, once[title].last_played_total);
    }
}

#[test]
fn test_same_platform_keeps_latest_date() {
    let uk = batch(&[("Foo", record("PS5", "a", "ua", Some("2024-03-01"), 2.0))]);
    let us = batch(&[("Foo", record("PS5", "a", "ua", Some("2023-12-25"), 5.0))]);

    let catalog = accumulate_all([&uk, &us]).unwrap();
    let foo = &catalog["Foo"];
    assert_eq!(foo.slots.len(), 1);
    assert_eq!(foo.slots[0].hours_played, 7.0);
    assert_eq!(foo.slots[0].last_played, Some(date("2024-03-01")));
    assert_eq!(foo.last_played_total, Some(date("2024-03-01")));
}

#[test]
fn test_null_dates_do_not_erase_known_dates() {
    let a = batch(&[("Foo", record("Steam", "1", "u1", None, 1.0))]);
    let b = batch(&[("Foo", record("Xbox", "9", "u9", Some("2022-05-05"), 1.0))]);
    let c = batch(&[("Foo", record("PS5", "2", "u2", None, 1.0))]);

    let catalog = accumulate_all([&a, &b, &c]).unwrap();
    assert_eq!(catalog["Foo"].last_played_total, Some(date("2022-05-05")));
}

#[test]
fn test_conflicting_id_on_same_platform_is_fatal() {
    let uk = batch(&[("Foo", record("PS5", "a", "ua", None, 2.0))]);
    let us = batch(&[("Foo", record("PS5", "b", "ua", None, 5.0))]);

    let err = accumulate_all([&uk, &us]).unwrap_err();
    match err {
        MergeError::SlotIdentityMismatch {
            field,
            existing,
            incoming,
            ..
        } => {
            assert_eq!(field, "id");
            assert_eq!(existing, "a");
            assert_eq!(incoming, "b");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_conflicting_url_on_same_platform_is_fatal() {
    let uk = batch(&[("Foo", record("PS5", "a", "ua", None, 2.0))]);
    let us = batch(&[("Foo", record("PS5", "a", "ub", None, 5.0))]);

    assert!(matches!(
        accumulate_all([&uk, &us]),
        Err(MergeError::SlotIdentityMismatch { field: "url", .. })
    ));
}

#[test]
fn test_accumulation_order_only_changes_slot_order() {
    let steam = batch(&[
        ("Foo", record("Steam", "1", "u1", Some("2024-01-01"), 3.0)),
        ("Bar", record("Steam", "3", "u3", None, 1.0)),
    ]);
    let ps5 = batch(&[("Foo", record("PS5", "2", "u2", Some("2024-06-01"), 7.0))]);

    let forward = accumulate_all([&steam, &ps5]).unwrap();
    let backward = accumulate_all([&ps5, &steam]).unwrap();

    assert_eq!(forward.keys().collect::<Vec<_>>(), backward.keys().collect::<Vec<_>>());
    assert_eq!(forward["Foo"].hours_played_total, backward["Foo"].hours_played_total);
    assert_eq!(forward["Foo"].last_played_total, backward["Foo"].last_played_total);
    assert_eq!(
        backward["Foo"].platforms().collect::<Vec<_>>(),
        vec!["PS5", "Steam"]
    );
}
