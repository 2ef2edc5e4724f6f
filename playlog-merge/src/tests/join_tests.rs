use super::*;
use serde_json::json;
use std::collections::BTreeSet;

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

fn sample_maps() -> (GameMap<Map<String, Value>>, GameMap<Map<String, Value>>) {
    let mut a = GameMap::new();
    a.insert("Foo".into(), object(json!({"hours": 3, "platform": "Steam"})));
    a.insert("Bar".into(), object(json!({"hours": 1})));
    a.insert("OnlyLeft".into(), object(json!({"hours": 9})));

    let mut b = GameMap::new();
    b.insert("Foo".into(), object(json!({"platform": "GOG", "rating": 5})));
    b.insert("Bar".into(), object(json!({"rating": 2})));
    b.insert("OnlyRight".into(), object(json!({"rating": 1})));
    (a, b)
}

#[test]
fn test_join_keys_are_the_intersection() {
    let (a, b) = sample_maps();
    let joined = inner_join(&a, &b);

    let keys: BTreeSet<_> = joined.keys().cloned().collect();
    let expected: BTreeSet<_> = a.keys().filter(|k| b.contains_key(*k)).cloned().collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_join_right_hand_fields_win() {
    let (a, b) = sample_maps();
    let joined = inner_join(&a, &b);

    for (key, value) in &joined {
        for (field, rhs) in &b[key] {
            assert_eq!(&value[field], rhs, "{key}.{field}");
        }
        for (field, lhs) in &a[key] {
            if !b[key].contains_key(field) {
                assert_eq!(&value[field], lhs, "{key}.{field}");
            }
        }
        assert_eq!(
            value.len(),
            a[key].keys().chain(b[key].keys()).collect::<BTreeSet<_>>().len()
        );
    }
    assert_eq!(joined["Foo"]["platform"], json!("GOG"));
    assert_eq!(joined["Foo"]["hours"], json!(3));
}

#[test]
fn test_join_with_empty_side_is_empty() {
    let (a, _) = sample_maps();
    let empty: GameMap<Map<String, Value>> = GameMap::new();
    assert!(inner_join(&a, &empty).is_empty());
    assert!(inner_join(&empty, &a).is_empty());
}
