//! Key-intersection join between two title-keyed maps.

use playlog_catalog::GameMap;
use serde_json::{Map, Value};

/// Combine a left-hand value with the right-hand value stored under the
/// same key. Fields present on both sides take the right-hand value.
pub trait Overlay<Rhs> {
    type Output;

    fn overlay(&self, rhs: &Rhs) -> Self::Output;
}

/// Inner join: keep only keys present in both maps, combining each pair
/// with [`Overlay::overlay`].
pub fn inner_join<L, R>(left: &GameMap<L>, right: &GameMap<R>) -> GameMap<L::Output>
where
    L: Overlay<R>,
{
    log::debug!(
        "Inner-joining {} left keys with {} right keys",
        left.len(),
        right.len()
    );
    let joined: GameMap<L::Output> = left
        .iter()
        .filter_map(|(key, l)| right.get(key).map(|r| (key.clone(), l.overlay(r))))
        .collect();
    log::debug!("{} keys in joined map", joined.len());
    joined
}

/// Untyped records: shallow field union, right-hand fields win.
impl Overlay<Map<String, Value>> for Map<String, Value> {
    type Output = Map<String, Value>;

    fn overlay(&self, rhs: &Map<String, Value>) -> Self::Output {
        let mut combined = self.clone();
        for (field, value) in rhs {
            combined.insert(field.clone(), value.clone());
        }
        combined
    }
}

#[cfg(test)]
#[path = "tests/join_tests.rs"]
mod tests;
