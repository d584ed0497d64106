pub mod fingerprint;
pub mod schedule;
pub mod time;

pub use fingerprint::*;
pub use schedule::*;
pub use time::*;
