//! Per-instant occupancy test over a person's weekly blocks.

use crate::models::{ClockTime, DayOfWeek, WeeklyTimeBlock};
use std::cmp::Reverse;

fn covers(block: &WeeklyTimeBlock, day: DayOfWeek, instant: ClockTime) -> bool {
    // Half-open: the end instant itself is free, so a block ending at
    // 10:00 hands over to one starting at 10:00 with no overlap.
    block.day_of_week == day && block.start_time <= instant && instant < block.end_time
}

/// True when some block covers the instant on the given day.
///
/// Total over well-formed blocks; an empty block list is simply free.
pub fn is_occupied(blocks: &[WeeklyTimeBlock], day: DayOfWeek, instant: ClockTime) -> bool {
    blocks.iter().any(|block| covers(block, day, instant))
}

/// The block responsible for occupancy at the instant, if any.
///
/// When overlapping blocks cover the same instant, the earliest start
/// wins; among equal starts the later end wins; blocks with identical
/// intervals fall back to label, then room. The choice is therefore
/// deterministic regardless of block input order.
pub fn occupying_block<'a>(
    blocks: &'a [WeeklyTimeBlock],
    day: DayOfWeek,
    instant: ClockTime,
) -> Option<&'a WeeklyTimeBlock> {
    blocks
        .iter()
        .filter(|block| covers(block, day, instant))
        .min_by_key(|block| {
            (
                block.start_time,
                Reverse(block.end_time),
                &block.label,
                &block.room,
            )
        })
}

#[cfg(test)]
mod tests {
    use super::{is_occupied, occupying_block};
    use crate::models::{ClockTime, DayOfWeek, WeeklyTimeBlock};

    fn create_test_block(label: &str, day: u8, start: &str, end: &str) -> WeeklyTimeBlock {
        WeeklyTimeBlock::new(label, None, day, start, end).unwrap()
    }

    fn day(value: u8) -> DayOfWeek {
        DayOfWeek::new(value).unwrap()
    }

    fn at(time: &str) -> ClockTime {
        ClockTime::parse(time).unwrap()
    }

    #[test]
    fn test_empty_blocks_are_free() {
        assert!(!is_occupied(&[], day(1), at("09:00")));
        assert!(occupying_block(&[], day(1), at("09:00")).is_none());
    }

    #[test]
    fn test_instant_inside_block_is_occupied() {
        let blocks = vec![create_test_block("Algebra", 1, "09:00", "10:30")];

        assert!(is_occupied(&blocks, day(1), at("09:00"))); // inclusive start
        assert!(is_occupied(&blocks, day(1), at("09:45")));
        assert!(is_occupied(&blocks, day(1), at("10:29")));
    }

    #[test]
    fn test_end_boundary_is_exclusive() {
        let blocks = vec![create_test_block("Algebra", 1, "09:00", "10:00")];

        assert!(is_occupied(&blocks, day(1), at("09:59")));
        assert!(!is_occupied(&blocks, day(1), at("10:00")));
    }

    #[test]
    fn test_back_to_back_blocks_tight_transition() {
        let blocks = vec![
            create_test_block("Algebra", 1, "09:00", "10:00"),
            create_test_block("Physics", 1, "10:00", "11:00"),
        ];

        // No gap and no double booking at the handover instant.
        assert!(is_occupied(&blocks, day(1), at("09:59")));
        assert!(is_occupied(&blocks, day(1), at("10:00")));
        assert_eq!(
            occupying_block(&blocks, day(1), at("10:00")).unwrap().label,
            "Physics"
        );
    }

    #[test]
    fn test_other_day_is_free() {
        let blocks = vec![create_test_block("Algebra", 1, "09:00", "10:00")];

        assert!(!is_occupied(&blocks, day(2), at("09:30")));
    }

    #[test]
    fn test_instant_outside_block_is_free() {
        let blocks = vec![create_test_block("Algebra", 1, "09:00", "10:00")];

        assert!(!is_occupied(&blocks, day(1), at("08:59")));
        assert!(!is_occupied(&blocks, day(1), at("20:00")));
    }

    #[test]
    fn test_occupying_block_returns_match() {
        let blocks = vec![
            create_test_block("Algebra", 1, "09:00", "10:00"),
            create_test_block("Physics", 2, "09:00", "10:00"),
        ];

        let hit = occupying_block(&blocks, day(2), at("09:30")).unwrap();
        assert_eq!(hit.label, "Physics");
    }

    #[test]
    fn test_overlap_tie_break_earliest_start_wins() {
        let blocks = vec![
            create_test_block("Lab", 1, "09:30", "11:00"),
            create_test_block("Lecture", 1, "09:00", "10:00"),
        ];

        let hit = occupying_block(&blocks, day(1), at("09:45")).unwrap();
        assert_eq!(hit.label, "Lecture");

        // After the lecture ends only the lab remains.
        let hit = occupying_block(&blocks, day(1), at("10:30")).unwrap();
        assert_eq!(hit.label, "Lab");
    }

    #[test]
    fn test_overlap_tie_break_equal_start_later_end_wins() {
        let blocks = vec![
            create_test_block("Short", 1, "09:00", "09:30"),
            create_test_block("Long", 1, "09:00", "11:00"),
        ];

        let hit = occupying_block(&blocks, day(1), at("09:15")).unwrap();
        assert_eq!(hit.label, "Long");

        // Input order must not matter.
        let mut reversed = blocks.clone();
        reversed.reverse();
        let hit = occupying_block(&reversed, day(1), at("09:15")).unwrap();
        assert_eq!(hit.label, "Long");
    }

    #[test]
    fn test_identical_intervals_pick_same_block_either_order() {
        let blocks = vec![
            create_test_block("Chemistry", 1, "09:00", "10:00"),
            create_test_block("Biology", 1, "09:00", "10:00"),
        ];
        let mut reversed = blocks.clone();
        reversed.reverse();

        let forward = occupying_block(&blocks, day(1), at("09:30")).unwrap();
        let backward = occupying_block(&reversed, day(1), at("09:30")).unwrap();
        assert_eq!(forward.label, "Biology");
        assert_eq!(forward, backward);
    }
}
