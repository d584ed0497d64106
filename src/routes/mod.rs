pub mod grid;
pub mod slots;
