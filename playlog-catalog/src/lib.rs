//! Game library data model and JSON snapshot I/O.
//!
//! This crate defines the records exchanged between the platform exporters,
//! the manual annotation store, and the merge engine, without any merge logic.
//! Every snapshot on disk is a list of flat objects carrying a `game` field;
//! in memory the same data is a [`GameMap`] keyed by that title.

pub mod error;
pub mod json;
pub mod types;

pub use error::CatalogError;
pub use json::{GameEntry, JsonStyle, entries_to_map, load_entries, parse_entries, write_games};
pub use types::*;
