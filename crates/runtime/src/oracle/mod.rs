//! Runtime implementations of the capabilities the core consumes.

mod sight;

pub use sight::ObstacleSight;
