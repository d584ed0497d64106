//! # Free-Time Intersection Engine
//!
//! Given several people's weekly recurring commitments, compute which
//! weekly time windows are free for an arbitrary subset of those people
//! simultaneously.
//!
//! ## Features
//!
//! - **Schedule Model**: Validated weekly recurring time blocks (`HH:MM`
//!   wall-clock times, ISO day numbers, half-open intervals)
//! - **Occupancy**: Per-instant busy/free test with an exclusive end
//!   boundary, so back-to-back blocks hand over without idle instants
//! - **Intersection**: Joint classification of N people per instant into
//!   all-free / partial / all-occupied
//! - **Slot Merging**: Collapse a sampled day timeline into maximal
//!   contiguous free ranges
//! - **Presentation**: Flat free-slot listings and a day x hour comparison
//!   grid with per-person occupancy labels
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) consumed by hosts
//! - [`models`]: Validated value types and JSON ingestion
//! - [`services`]: Pure comparison computations
//! - [`routes`]: Output-shape adapters for the two consuming views
//! - [`config`]: Scan-window configuration
//!
//! ## Purity
//!
//! Every operation is a deterministic function of its explicit inputs:
//! no shared mutable state, no clock reads, no I/O. Hosts may invoke the
//! engine from any concurrency model without synchronization, and may
//! memoize results keyed on [`api::comparison_fingerprint`].

pub mod api;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
