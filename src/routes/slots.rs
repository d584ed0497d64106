use serde::{Deserialize, Serialize};

use crate::api::PersonId;
use crate::config::ScanConfig;
use crate::models::{ClockTime, DayOfWeek, ScheduleSet};
use crate::services::slots::free_slots_for_day;

// =========================================================
// Free-slot listing types + adapter
// =========================================================

/// A maximal contiguous window during which every selected person is free.
///
/// Half-open: `start` is included, `end` is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeSlot {
    pub day_of_week: DayOfWeek,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl FreeSlot {
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

/// Response shape for a group "common free slots" listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeSlotsData {
    /// Slots ordered by day (Monday first), then chronologically within
    /// the day. Slots never merge across days.
    pub slots: Vec<FreeSlot>,
    pub selected_count: usize,
}

/// Flatten per-day free slots across the whole week into one ordered list.
pub fn week_free_slots(
    set: &ScheduleSet,
    selected: &[PersonId],
    config: &ScanConfig,
) -> FreeSlotsData {
    let slots = DayOfWeek::all()
        .flat_map(|day| free_slots_for_day(set, selected, day, config))
        .collect();
    FreeSlotsData {
        slots,
        selected_count: selected.len(),
    }
}
