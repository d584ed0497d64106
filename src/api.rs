//! Public API surface for the free-time engine.
//!
//! This file consolidates the DTO types the two output shapes use.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::grid::{
    build_occupancy_grid, CellStatus, GridCell, OccupancyGrid, OccupiedEntry,
};
pub use crate::routes::slots::{week_free_slots, FreeSlot, FreeSlotsData};

use serde::{Deserialize, Serialize};

/// Person identifier, as issued by the external schedule store.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn new(value: impl Into<String>) -> Self {
        PersonId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        PersonId::new(value)
    }
}

pub use crate::models::fingerprint::comparison_fingerprint;
pub use crate::models::schedule::{
    parse_schedule_set_json_str, InvalidBlockError, PersonSchedule, ScheduleSet, WeeklyTimeBlock,
};
pub use crate::models::time::{ClockTime, DayOfWeek};
