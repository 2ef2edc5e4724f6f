//! Data model types for the game library.
//!
//! These types represent the snapshots passed between pipeline stages:
//! per-platform play records, the accumulated cross-platform catalog,
//! curated annotations, and the final merged catalog.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CatalogError;

/// Title-keyed collection. Keys are reported titles or display names.
///
/// Iteration order is lexical by key, which is also the order records are
/// written back to disk.
pub type GameMap<T> = BTreeMap<String, T>;

// ── Platform records ────────────────────────────────────────────────────────

/// One game on one platform, as delivered by a platform exporter.
///
/// The reported title is the key of the enclosing [`GameMap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformRecord {
    pub platform: String,
    /// Platform-specific identifier (app id, title id, product id).
    pub id: String,
    pub url: String,
    pub last_played: Option<NaiveDate>,
    pub hours_played: f64,
}

/// Manually recorded playtime for a platform that does not report any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaytimeAnnotation {
    pub last_played: Option<NaiveDate>,
    pub hours_played: f64,
}

// ── Accumulated catalog ─────────────────────────────────────────────────────

/// One (platform, id, url, hours, last played) tuple within a game.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformSlot {
    pub platform: String,
    pub id: String,
    pub url: String,
    pub hours_played: f64,
    pub last_played: Option<NaiveDate>,
}

impl PlatformSlot {
    pub fn from_record(record: &PlatformRecord) -> Self {
        Self {
            platform: record.platform.clone(),
            id: record.id.clone(),
            url: record.url.clone(),
            hours_played: record.hours_played,
            last_played: record.last_played,
        }
    }
}

/// A game's play history across every platform it was reported on.
///
/// On disk the slots are stored as parallel arrays (see [`PlatformColumns`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "PlatformColumns", try_from = "PlatformColumns")]
pub struct AccumulatedGame {
    /// At most one slot per platform name.
    pub slots: Vec<PlatformSlot>,
    pub hours_played_total: f64,
    pub last_played_total: Option<NaiveDate>,
}

impl AccumulatedGame {
    /// Single-slot game built from one platform record.
    pub fn from_record(record: &PlatformRecord) -> Self {
        Self {
            slots: vec![PlatformSlot::from_record(record)],
            hours_played_total: record.hours_played,
            last_played_total: record.last_played,
        }
    }

    /// Index of the slot for `platform`, if the game has one.
    pub fn slot_index(&self, platform: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.platform == platform)
    }

    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.platform.as_str())
    }
}

/// Parallel-array wire shape of [`AccumulatedGame`].
///
/// Index `i` across the five per-platform arrays describes one platform slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformColumns {
    pub platforms: Vec<String>,
    pub ids: Vec<String>,
    pub urls: Vec<String>,
    pub hours_played_single: Vec<f64>,
    pub last_played_single: Vec<Option<NaiveDate>>,
    pub hours_played_total: f64,
    pub last_played_total: Option<NaiveDate>,
}

impl From<AccumulatedGame> for PlatformColumns {
    fn from(game: AccumulatedGame) -> Self {
        let len = game.slots.len();
        let mut columns = PlatformColumns {
            platforms: Vec::with_capacity(len),
            ids: Vec::with_capacity(len),
            urls: Vec::with_capacity(len),
            hours_played_single: Vec::with_capacity(len),
            last_played_single: Vec::with_capacity(len),
            hours_played_total: game.hours_played_total,
            last_played_total: game.last_played_total,
        };
        for slot in game.slots {
            columns.platforms.push(slot.platform);
            columns.ids.push(slot.id);
            columns.urls.push(slot.url);
            columns.hours_played_single.push(slot.hours_played);
            columns.last_played_single.push(slot.last_played);
        }
        columns
    }
}

impl TryFrom<PlatformColumns> for AccumulatedGame {
    type Error = CatalogError;

    fn try_from(columns: PlatformColumns) -> Result<Self, Self::Error> {
        let len = columns.platforms.len();
        if len == 0 {
            return Err(CatalogError::malformed("game has no platform slots"));
        }
        let lengths = [
            columns.ids.len(),
            columns.urls.len(),
            columns.hours_played_single.len(),
            columns.last_played_single.len(),
        ];
        if lengths.iter().any(|&l| l != len) {
            return Err(CatalogError::malformed(format!(
                "per-platform arrays differ in length: platforms={}, ids={}, urls={}, \
                 hoursPlayedSingle={}, lastPlayedSingle={}",
                len, lengths[0], lengths[1], lengths[2], lengths[3]
            )));
        }
        let mut seen = BTreeSet::new();
        for platform in &columns.platforms {
            if !seen.insert(platform.as_str()) {
                return Err(CatalogError::malformed(format!(
                    "platform '{}' appears more than once",
                    platform
                )));
            }
        }

        let slots = columns
            .platforms
            .into_iter()
            .zip(columns.ids)
            .zip(columns.urls)
            .zip(columns.hours_played_single)
            .zip(columns.last_played_single)
            .map(|((((platform, id), url), hours_played), last_played)| PlatformSlot {
                platform,
                id,
                url,
                hours_played,
                last_played,
            })
            .collect();

        Ok(Self {
            slots,
            hours_played_total: columns.hours_played_total,
            last_played_total: columns.last_played_total,
        })
    }
}

// ── Annotations ─────────────────────────────────────────────────────────────

/// Manually curated metadata for one canonical game.
///
/// A `rating` of `None` marks a game that has not been curated yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Overrides the annotation key as the output name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Alternate reported titles that resolve to this annotation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Any other curated fields, carried through to the output untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Annotation {
    /// Blank template for a game that still needs curating.
    pub fn stub() -> Self {
        Self::default()
    }

    pub fn is_curated(&self) -> bool {
        self.rating.is_some()
    }
}

// ── Merged catalog ──────────────────────────────────────────────────────────

/// Final catalog entry, keyed by display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "MergedRecord", try_from = "MergedRecord")]
pub struct MergedGame {
    pub game: AccumulatedGame,
    pub rating: Option<f64>,
    pub status: Option<String>,
    pub tags: BTreeSet<String>,
    pub extra: Map<String, Value>,
    pub display_url: String,
}

/// Wire shape of [`MergedGame`]: the parallel arrays plus curated fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedRecord {
    #[serde(flatten)]
    pub columns: PlatformColumns,
    pub rating: Option<f64>,
    pub status: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub display_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<MergedGame> for MergedRecord {
    fn from(merged: MergedGame) -> Self {
        Self {
            columns: merged.game.into(),
            rating: merged.rating,
            status: merged.status,
            tags: merged.tags,
            display_url: merged.display_url,
            extra: merged.extra,
        }
    }
}

impl TryFrom<MergedRecord> for MergedGame {
    type Error = CatalogError;

    fn try_from(record: MergedRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            game: record.columns.try_into()?,
            rating: record.rating,
            status: record.status,
            tags: record.tags,
            extra: record.extra,
            display_url: record.display_url,
        })
    }
}
