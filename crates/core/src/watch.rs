//! Watched-state transition rules for media items.
//!
//! `date_watched` is only meaningful while an item is watched. These helpers
//! keep the two fields consistent whenever the watched flag is written.

use crate::types::Timestamp;

/// Compute the `date_watched` value after setting the watched flag.
///
/// - not watched -> watched: stamped with `now`
/// - watched -> watched: the original date is kept
/// - anything -> not watched: cleared
pub fn resolve_date_watched(
    previous: Option<Timestamp>,
    is_watched: bool,
    now: Timestamp,
) -> Option<Timestamp> {
    if !is_watched {
        return None;
    }
    Some(previous.unwrap_or(now))
}
