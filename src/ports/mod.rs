//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the generator and an external
//! system. Implementations live in `src/adapters/`.

pub mod random;

pub use random::{RandomSource, SourceError};
