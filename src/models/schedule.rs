// ============================================================================
// Weekly schedule value types, validation, and JSON ingestion
// ============================================================================
//
// Schedules enter the engine as immutable snapshots. Validation happens
// eagerly here, at ingestion time; the query-time services assume their
// inputs already satisfy these invariants and never fail.

use crate::api::PersonId;
use crate::models::time::{ClockTime, DayOfWeek};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Validation failure for a candidate schedule block.
///
/// The only error the engine itself raises; query-time operations are
/// total over validated input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidBlockError {
    #[error("day of week must be between 1 (Monday) and 7 (Sunday), got {0}")]
    DayOutOfRange(u8),
    #[error("time must be a zero-padded 24-hour HH:MM string, got {0:?}")]
    BadTimeFormat(String),
    #[error("block must end strictly after it starts ({start}-{end})")]
    NonPositiveDuration { start: ClockTime, end: ClockTime },
    #[error("block label must not be empty")]
    EmptyLabel,
}

/// A recurring weekly commitment: same day and clock times every week.
///
/// Invariants (enforced by [`WeeklyTimeBlock::new`] / [`WeeklyTimeBlock::validate`]):
/// the day is in 1..=7, `start_time < end_time` within the same day (blocks
/// never span midnight), and the label is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTimeBlock {
    /// Discipline or activity name, shown on occupied cells
    pub label: String,
    /// Room, shown in parentheses after the label when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    /// ISO day number, 1 = Monday .. 7 = Sunday
    pub day_of_week: DayOfWeek,
    /// First occupied instant (inclusive)
    pub start_time: ClockTime,
    /// First free instant after the block (exclusive)
    pub end_time: ClockTime,
}

impl WeeklyTimeBlock {
    /// Build and validate a block from raw parts.
    pub fn new(
        label: impl Into<String>,
        room: Option<String>,
        day_of_week: u8,
        start_time: &str,
        end_time: &str,
    ) -> Result<Self, InvalidBlockError> {
        let block = Self {
            label: label.into(),
            room,
            day_of_week: DayOfWeek::new(day_of_week)?,
            start_time: ClockTime::parse(start_time)?,
            end_time: ClockTime::parse(end_time)?,
        };
        block.validate()?;
        Ok(block)
    }

    /// Check the cross-field invariants that typed deserialization cannot.
    pub fn validate(&self) -> Result<(), InvalidBlockError> {
        if self.label.trim().is_empty() {
            return Err(InvalidBlockError::EmptyLabel);
        }
        if self.end_time <= self.start_time {
            return Err(InvalidBlockError::NonPositiveDuration {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    /// Block duration in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.end_time.minutes() - self.start_time.minutes()
    }

    /// Human label for occupied cells: `"label (room)"` when a room is set.
    pub fn display_label(&self) -> String {
        match &self.room {
            Some(room) if !room.trim().is_empty() => format!("{} ({})", self.label, room),
            _ => self.label.clone(),
        }
    }
}

/// One person's weekly schedule. Block order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSchedule {
    pub person_id: PersonId,
    pub blocks: Vec<WeeklyTimeBlock>,
}

impl PersonSchedule {
    pub fn new(person_id: PersonId, blocks: Vec<WeeklyTimeBlock>) -> Self {
        Self { person_id, blocks }
    }

    /// Validate every block, failing on the first malformed one.
    pub fn validate(&self) -> Result<(), InvalidBlockError> {
        for block in &self.blocks {
            block.validate()?;
        }
        Ok(())
    }

    /// Blocks in canonical order (day, start, end, label), independent of
    /// input order. Used wherever output must not depend on how the host
    /// assembled the block list.
    pub fn normalized_blocks(&self) -> Vec<&WeeklyTimeBlock> {
        let mut blocks: Vec<&WeeklyTimeBlock> = self.blocks.iter().collect();
        blocks.sort_by(|a, b| {
            (a.day_of_week, a.start_time, a.end_time, &a.label).cmp(&(
                b.day_of_week,
                b.start_time,
                b.end_time,
                &b.label,
            ))
        });
        blocks
    }
}

/// Immutable snapshot of the schedules under comparison, keyed by person.
///
/// Fetched fresh per comparison request; the engine holds no state across
/// calls and never mutates the snapshot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduleSet {
    schedules: HashMap<PersonId, PersonSchedule>,
}

impl ScheduleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a schedule, replacing any previous one for the same person.
    pub fn insert(&mut self, schedule: PersonSchedule) {
        self.schedules.insert(schedule.person_id.clone(), schedule);
    }

    pub fn get(&self, person_id: &PersonId) -> Option<&PersonSchedule> {
        self.schedules.get(person_id)
    }

    /// The person's blocks, or `None` when no schedule was supplied for them.
    /// An explicitly supplied empty block list yields `Some(&[])`.
    pub fn blocks_for(&self, person_id: &PersonId) -> Option<&[WeeklyTimeBlock]> {
        self.schedules.get(person_id).map(|s| s.blocks.as_slice())
    }

    pub fn contains(&self, person_id: &PersonId) -> bool {
        self.schedules.contains_key(person_id)
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Person ids in sorted order, for deterministic iteration.
    pub fn person_ids(&self) -> Vec<&PersonId> {
        let mut ids: Vec<&PersonId> = self.schedules.keys().collect();
        ids.sort();
        ids
    }
}

impl FromIterator<PersonSchedule> for ScheduleSet {
    fn from_iter<T: IntoIterator<Item = PersonSchedule>>(iter: T) -> Self {
        let mut set = ScheduleSet::new();
        for schedule in iter {
            set.insert(schedule);
        }
        set
    }
}

/// Parse a schedule set from its bulk JSON shape.
///
/// The input is a map from person id to that person's block list, the
/// shape the external schedule store produces:
///
/// ```json
/// { "<personId>": [ { "label": "...", "room": "...",
///                     "dayOfWeek": 1, "startTime": "09:00", "endTime": "10:30" } ] }
/// ```
///
/// Every block is validated eagerly; a single malformed block fails the
/// whole ingestion with context naming the offending person.
pub fn parse_schedule_set_json_str(json: &str) -> Result<ScheduleSet> {
    let raw: HashMap<String, Vec<WeeklyTimeBlock>> =
        serde_json::from_str(json).context("Failed to deserialize schedule set JSON")?;

    let mut set = ScheduleSet::new();
    for (person, blocks) in raw {
        for block in &blocks {
            block
                .validate()
                .with_context(|| format!("Invalid block for person '{}'", person))?;
        }
        set.insert(PersonSchedule::new(PersonId::new(person), blocks));
    }
    Ok(set)
}

// ============================================================================
// Tests
// ============================================================================
