//! Live adapters for real external interactions.

pub mod random;

pub use random::OsRandomSource;
