//! Content fingerprinting for comparison memoization.
//!
//! Every engine operation is a pure function of `(schedule set, selection)`,
//! so a host can cache results keyed on that tuple. The fingerprint gives
//! the host a stable cache key without the engine itself caching anything.

use crate::api::PersonId;
use crate::models::schedule::ScheduleSet;
use sha2::{Digest, Sha256};

/// Calculate a SHA-256 fingerprint of a `(schedule set, selection)` pair.
///
/// Canonical: independent of map iteration order, of block input order,
/// and of selection order or duplicates. Identical inputs always produce
/// the identical hexadecimal digest.
pub fn comparison_fingerprint(set: &ScheduleSet, selected: &[PersonId]) -> String {
    let mut hasher = Sha256::new();

    let mut selection: Vec<&PersonId> = selected.iter().collect();
    selection.sort();
    selection.dedup();
    for id in selection {
        hasher.update(id.value().as_bytes());
        hasher.update([0u8]);
    }
    hasher.update([0xffu8]);

    for id in set.person_ids() {
        hasher.update(id.value().as_bytes());
        hasher.update([0u8]);
        if let Some(schedule) = set.get(id) {
            for block in schedule.normalized_blocks() {
                hasher.update(block.label.as_bytes());
                hasher.update([0u8]);
                hasher.update(block.room.as_deref().unwrap_or("").as_bytes());
                hasher.update([0u8]);
                hasher.update([block.day_of_week.value()]);
                hasher.update(block.start_time.minutes().to_le_bytes());
                hasher.update(block.end_time.minutes().to_le_bytes());
            }
        }
        hasher.update([0xffu8]);
    }

    hex::encode(hasher.finalize())
}
