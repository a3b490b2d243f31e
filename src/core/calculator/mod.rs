pub mod overlaps;
pub mod slots;
pub mod stats;
