//! Final presentation of collapsed games: display URL and slot order.

use playlog_catalog::{AccumulatedGame, GameMap, MergedGame};

use crate::collapse::CollapsedGame;

/// Platforms whose store page is preferred as a game's display URL, in order.
pub const DEFAULT_URL_PREFERENCE: &[&str] = &["Steam", "PS5"];

/// URL of the first preferred platform the game has, else of its first slot.
pub fn select_display_url<S: AsRef<str>>(game: &AccumulatedGame, preference: &[S]) -> String {
    preference
        .iter()
        .find_map(|platform| {
            game.slot_index(platform.as_ref())
                .map(|idx| game.slots[idx].url.clone())
        })
        .or_else(|| game.slots.first().map(|s| s.url.clone()))
        .unwrap_or_default()
}

/// Sort slots by hours played, most first. Equal hours keep their order.
pub fn order_slots(game: &mut AccumulatedGame) {
    game.slots
        .sort_by(|a, b| sort_hours(b.hours_played).total_cmp(&sort_hours(a.hours_played)));
}

/// `total_cmp` ranks `-0.0` below `0.0`; both count as zero hours here.
fn sort_hours(hours: f64) -> f64 {
    if hours == 0.0 { 0.0 } else { hours }
}

/// Finalize one collapsed game.
///
/// The display URL is chosen against the collapsed slot order, before the
/// slots are re-sorted by playtime.
pub fn present<S: AsRef<str>>(collapsed: CollapsedGame, preference: &[S]) -> MergedGame {
    let CollapsedGame {
        mut game,
        rating,
        status,
        tags,
        extra,
    } = collapsed;
    let display_url = select_display_url(&game, preference);
    order_slots(&mut game);
    MergedGame {
        game,
        rating,
        status,
        tags,
        extra,
        display_url,
    }
}

/// Finalize every collapsed game.
pub fn present_all<S: AsRef<str>>(
    collapsed: GameMap<CollapsedGame>,
    preference: &[S],
) -> GameMap<MergedGame> {
    collapsed
        .into_iter()
        .map(|(name, game)| (name, present(game, preference)))
        .collect()
}

#[cfg(test)]
#[path = "tests/present_tests.rs"]
mod tests;
