//! Multi-person occupancy classification.
//!
//! Each selected person is evaluated independently against their own
//! blocks and the results combined by counting, so classifying one
//! instant is O(people x blocks) with no cross-pairing.

use crate::api::PersonId;
use crate::models::{ClockTime, DayOfWeek, ScheduleSet};
use crate::services::occupancy::is_occupied;

/// Exact partition of the selected people at one instant.
///
/// Every selected id lands in exactly one of the two lists, in selection
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellOccupancy {
    pub free: Vec<PersonId>,
    pub occupied: Vec<PersonId>,
}

impl CellOccupancy {
    /// True when every selected person is free. An empty selection is
    /// never "free for all" - there is no "all" to satisfy.
    pub fn all_free(&self) -> bool {
        self.occupied.is_empty() && !self.free.is_empty()
    }

    /// True when every selected person is occupied; false for an empty
    /// selection for the same reason as [`CellOccupancy::all_free`].
    pub fn all_occupied(&self) -> bool {
        self.free.is_empty() && !self.occupied.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.free.len() + self.occupied.len()
    }
}

/// Partition the selected ids into free and occupied at `(day, instant)`.
///
/// Precondition: every selected id has an entry in `set` (an explicitly
/// empty block list is a valid entry). The engine never invents an empty
/// schedule for an unknown person.
pub fn classify(
    set: &ScheduleSet,
    selected: &[PersonId],
    day: DayOfWeek,
    instant: ClockTime,
) -> CellOccupancy {
    let mut cell = CellOccupancy::default();
    for person_id in selected {
        debug_assert!(
            set.contains(person_id),
            "selected person '{}' has no schedule entry",
            person_id
        );
        let busy = set
            .blocks_for(person_id)
            .is_some_and(|blocks| is_occupied(blocks, day, instant));
        if busy {
            cell.occupied.push(person_id.clone());
        } else {
            cell.free.push(person_id.clone());
        }
    }
    cell
}

/// True when every selected person is free at `(day, instant)`; false for
/// an empty selection. Allocation-free fast path for timeline sampling.
pub fn all_free(
    set: &ScheduleSet,
    selected: &[PersonId],
    day: DayOfWeek,
    instant: ClockTime,
) -> bool {
    !selected.is_empty()
        && selected.iter().all(|person_id| {
            !set.blocks_for(person_id)
                .is_some_and(|blocks| is_occupied(blocks, day, instant))
        })
}
