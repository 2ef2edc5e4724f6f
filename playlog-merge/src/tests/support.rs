//! Fixture builders shared by the unit tests.

use chrono::NaiveDate;
use playlog_catalog::{AccumulatedGame, Annotation, PlatformRecord, PlatformSlot};

use crate::accumulate::most_recent;

pub(crate) fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub(crate) fn record(
    platform: &str,
    id: &str,
    url: &str,
    last_played: Option<&str>,
    hours_played: f64,
) -> PlatformRecord {
    PlatformRecord {
        platform: platform.into(),
        id: id.into(),
        url: url.into(),
        last_played: last_played.map(date),
        hours_played,
    }
}

pub(crate) fn slot(
    platform: &str,
    id: &str,
    url: &str,
    last_played: Option<&str>,
    hours_played: f64,
) -> PlatformSlot {
    PlatformSlot::from_record(&record(platform, id, url, last_played, hours_played))
}

/// Game with the given slots and totals derived from them.
pub(crate) fn accumulated(slots: Vec<PlatformSlot>) -> AccumulatedGame {
    let hours_played_total = slots.iter().map(|s| s.hours_played).sum();
    let last_played_total = slots
        .iter()
        .fold(None, |acc, s| most_recent(acc, s.last_played));
    AccumulatedGame {
        slots,
        hours_played_total,
        last_played_total,
    }
}

pub(crate) fn annotation(rating: Option<f64>, status: Option<&str>, tags: &[&str]) -> Annotation {
    Annotation {
        rating,
        status: status.map(str::to_string),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Annotation::default()
    }
}
