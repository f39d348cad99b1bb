//! Recording adapters that capture interactions to cassettes.

pub mod random;

pub use random::RecordingRandomSource;
