use serde::{Deserialize, Serialize};

use crate::api::PersonId;
use crate::config::ScanConfig;
use crate::models::{ClockTime, DayOfWeek, ScheduleSet};
use crate::services::compare::classify;
use crate::services::occupancy::occupying_block;

// =========================================================
// Comparison grid types + adapter
// =========================================================

/// Aggregate colour of one grid cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    AllFree,
    Partial,
    AllOccupied,
}

/// One occupied person plus the label shown in the cell tooltip,
/// rendered as `"label (room)"` when the block names a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupiedEntry {
    pub person_id: PersonId,
    pub label: String,
}

/// One `(day, sample)` cell of the comparison grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub day_of_week: DayOfWeek,
    pub start: ClockTime,
    pub status: CellStatus,
    pub free: Vec<PersonId>,
    pub occupied: Vec<OccupiedEntry>,
}

/// Day x hour occupancy grid for the interactive comparison view.
///
/// Cells are ordered by day (Monday first), then chronologically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyGrid {
    pub cells: Vec<GridCell>,
    pub selected_count: usize,
}

/// Build the comparison grid over the configured scan window.
///
/// Pure mapping over [`classify`] and [`occupying_block`]; an empty
/// selection produces cells that are never `all_free`.
pub fn build_occupancy_grid(
    set: &ScheduleSet,
    selected: &[PersonId],
    config: &ScanConfig,
) -> OccupancyGrid {
    let step = config.granularity_minutes.max(1);
    let mut cells = Vec::new();

    for day in DayOfWeek::all() {
        let mut t = config.day_start.minutes();
        while t < config.day_end.minutes() {
            let instant = ClockTime(t);
            let partition = classify(set, selected, day, instant);
            let status = if partition.all_free() {
                CellStatus::AllFree
            } else if partition.all_occupied() {
                CellStatus::AllOccupied
            } else {
                CellStatus::Partial
            };
            let occupied = partition
                .occupied
                .iter()
                .map(|person_id| OccupiedEntry {
                    label: set
                        .blocks_for(person_id)
                        .and_then(|blocks| occupying_block(blocks, day, instant))
                        .map(|block| block.display_label())
                        .unwrap_or_default(),
                    person_id: person_id.clone(),
                })
                .collect();
            cells.push(GridCell {
                day_of_week: day,
                start: instant,
                status,
                free: partition.free,
                occupied,
            });
            t = t.saturating_add(step);
        }
    }

    OccupancyGrid {
        cells,
        selected_count: selected.len(),
    }
}
