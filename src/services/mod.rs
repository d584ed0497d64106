//! Service layer: the pure computations behind the comparison features.
//!
//! Every function here is a deterministic function of its explicit inputs,
//! with no shared mutable state and no I/O, so calls may run from any
//! concurrency model without synchronization.

pub mod compare;
pub mod occupancy;
pub mod slots;

pub use compare::{all_free, classify, CellOccupancy};
pub use occupancy::{is_occupied, occupying_block};
pub use slots::free_slots_for_day;
