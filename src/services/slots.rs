//! Contiguous free-slot derivation.
//!
//! A day is discretized at the configured granularity and each sample
//! classified with the joint occupancy test; consecutive free samples
//! collapse into one maximal slot. The granularity only bounds resolution:
//! a truly contiguous free interval is never fragmented by it, whatever
//! step evenly divides the interval.

use crate::api::{FreeSlot, PersonId};
use crate::config::ScanConfig;
use crate::models::{ClockTime, DayOfWeek, ScheduleSet};
use crate::services::compare::all_free;
use log::debug;

/// Maximal contiguous all-free ranges for one day, in chronological order.
///
/// Samples run from `config.day_start` (inclusive) to `config.day_end`
/// (exclusive); a slot's end is the boundary after its last free sample,
/// clipped to `day_end`. An empty selection yields no slots rather than a
/// trivially free day. Deterministic: no clock reads, no randomness.
pub fn free_slots_for_day(
    set: &ScheduleSet,
    selected: &[PersonId],
    day: DayOfWeek,
    config: &ScanConfig,
) -> Vec<FreeSlot> {
    let mut slots = Vec::new();
    if selected.is_empty() {
        return slots;
    }

    // A hand-built config could hold zero; sampling must still terminate.
    let step = config.granularity_minutes.max(1);
    let day_end = config.day_end;

    let mut run_start: Option<ClockTime> = None;
    let mut t = config.day_start.minutes();
    while t < day_end.minutes() {
        let instant = ClockTime(t);
        if all_free(set, selected, day, instant) {
            run_start.get_or_insert(instant);
        } else if let Some(start) = run_start.take() {
            // The previous sample was free, so `t` is the boundary right
            // after the run's last free sample.
            slots.push(FreeSlot {
                day_of_week: day,
                start,
                end: instant,
            });
        }
        t = t.saturating_add(step);
    }
    if let Some(start) = run_start {
        // Run reached the end of the scan window.
        slots.push(FreeSlot {
            day_of_week: day,
            start,
            end: day_end,
        });
    }

    debug!(
        "day {}: {} common free slot(s) for {} selected",
        day,
        slots.len(),
        selected.len()
    );
    slots
}

#[cfg(test)]
mod tests {
    use super::free_slots_for_day;
    use crate::api::PersonId;
    use crate::config::ScanConfig;
    use crate::models::{DayOfWeek, PersonSchedule, ScheduleSet, WeeklyTimeBlock};

    fn create_test_block(day: u8, start: &str, end: &str) -> WeeklyTimeBlock {
        WeeklyTimeBlock::new("Algebra", None, day, start, end).unwrap()
    }

    fn day(value: u8) -> DayOfWeek {
        DayOfWeek::new(value).unwrap()
    }

    fn single_person_set(blocks: Vec<WeeklyTimeBlock>) -> ScheduleSet {
        vec![PersonSchedule::new(PersonId::new("alice"), blocks)]
            .into_iter()
            .collect()
    }

    fn slot_strings(slots: &[crate::api::FreeSlot]) -> Vec<String> {
        slots
            .iter()
            .map(|s| format!("{}-{}", s.start, s.end))
            .collect()
    }

    #[test]
    fn test_no_blocks_yields_whole_window() {
        let set = single_person_set(vec![]);
        let selected = vec![PersonId::new("alice")];
        let config = ScanConfig::default();

        let slots = free_slots_for_day(&set, &selected, day(1), &config);
        assert_eq!(slot_strings(&slots), vec!["08:00-22:00"]);
    }

    #[test]
    fn test_empty_selection_yields_no_slots() {
        let set = single_person_set(vec![]);
        let config = ScanConfig::default();

        let slots = free_slots_for_day(&set, &[], day(1), &config);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_block_splits_window_in_two() {
        let set = single_person_set(vec![create_test_block(1, "12:00", "14:00")]);
        let selected = vec![PersonId::new("alice")];
        let config = ScanConfig::default();

        let slots = free_slots_for_day(&set, &selected, day(1), &config);
        assert_eq!(slot_strings(&slots), vec!["08:00-12:00", "14:00-22:00"]);
    }

    #[test]
    fn test_block_on_other_day_does_not_interfere() {
        let set = single_person_set(vec![create_test_block(2, "08:00", "22:00")]);
        let selected = vec![PersonId::new("alice")];
        let config = ScanConfig::default();

        let slots = free_slots_for_day(&set, &selected, day(1), &config);
        assert_eq!(slot_strings(&slots), vec!["08:00-22:00"]);
    }

    #[test]
    fn test_fully_booked_day_yields_no_slots() {
        let set = single_person_set(vec![create_test_block(1, "08:00", "22:00")]);
        let selected = vec![PersonId::new("alice")];
        let config = ScanConfig::default();

        let slots = free_slots_for_day(&set, &selected, day(1), &config);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_contiguous_gap_is_not_fragmented() {
        // Two people whose combined blocks leave one 90-minute gap.
        let set: ScheduleSet = vec![
            PersonSchedule::new(
                PersonId::new("alice"),
                vec![
                    create_test_block(1, "08:00", "10:00"),
                    create_test_block(1, "11:30", "22:00"),
                ],
            ),
            PersonSchedule::new(PersonId::new("bob"), vec![]),
        ]
        .into_iter()
        .collect();
        let selected = vec![PersonId::new("alice"), PersonId::new("bob")];
        let config = ScanConfig::new(30, "08:00", "22:00").unwrap();

        let slots = free_slots_for_day(&set, &selected, day(1), &config);
        assert_eq!(slot_strings(&slots), vec!["10:00-11:30"]);
    }

    #[test]
    fn test_union_of_two_schedules_masks_partial_overlap() {
        // A has Mon 09:00-10:30, B has Mon 10:00-11:00; the union covers
        // 09:00-11:00 even though neither person spans all of it.
        let set: ScheduleSet = vec![
            PersonSchedule::new(
                PersonId::new("a"),
                vec![create_test_block(1, "09:00", "10:30")],
            ),
            PersonSchedule::new(
                PersonId::new("b"),
                vec![create_test_block(1, "10:00", "11:00")],
            ),
        ]
        .into_iter()
        .collect();
        let selected = vec![PersonId::new("a"), PersonId::new("b")];
        let config = ScanConfig::new(30, "08:00", "12:00").unwrap();

        let slots = free_slots_for_day(&set, &selected, day(1), &config);
        assert_eq!(slot_strings(&slots), vec!["08:00-09:00", "11:00-12:00"]);
    }

    #[test]
    fn test_free_run_reaching_day_end_is_clipped() {
        let set = single_person_set(vec![create_test_block(1, "08:00", "20:10")]);
        let selected = vec![PersonId::new("alice")];
        // 45-minute step does not evenly divide the window.
        let config = ScanConfig::new(45, "08:00", "22:00").unwrap();

        let slots = free_slots_for_day(&set, &selected, day(1), &config);
        // First free sample on the 45-minute lattice is 20:45; the run
        // ends at the window edge, not at the next lattice point (22:15).
        assert_eq!(slot_strings(&slots), vec!["20:45-22:00"]);
    }

    #[test]
    fn test_deterministic_output() {
        let set = single_person_set(vec![
            create_test_block(1, "09:00", "10:00"),
            create_test_block(1, "13:00", "15:00"),
        ]);
        let selected = vec![PersonId::new("alice")];
        let config = ScanConfig::default();

        let first = free_slots_for_day(&set, &selected, day(1), &config);
        let second = free_slots_for_day(&set, &selected, day(1), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_zero_length_slots() {
        let set = single_person_set(vec![create_test_block(1, "08:00", "21:00")]);
        let selected = vec![PersonId::new("alice")];
        let config = ScanConfig::default();

        let slots = free_slots_for_day(&set, &selected, day(1), &config);
        assert_eq!(slot_strings(&slots), vec!["21:00-22:00"]);
        for slot in &slots {
            assert!(slot.start < slot.end);
        }
    }
}
