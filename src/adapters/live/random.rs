//! Live adapter for the `RandomSource` port.

use uuid::Builder;

use crate::ports::random::{RandomSource, SourceError};

/// Live randomness source backed by the operating system CSPRNG.
pub struct OsRandomSource;

impl OsRandomSource {
    /// Creates a new OS randomness source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

fn fill(bytes: &mut [u8]) -> Result<(), SourceError> {
    getrandom::fill(bytes).map_err(|e| format!("OS randomness unavailable: {e}").into())
}

impl RandomSource for OsRandomSource {
    fn next_bytes(&self, len: usize) -> Result<Vec<u8>, SourceError> {
        let mut bytes = vec![0u8; len];
        fill(&mut bytes)?;
        Ok(bytes)
    }

    fn random_uuid(&self) -> Option<Result<[u8; 16], SourceError>> {
        let mut bytes = [0u8; 16];
        Some(fill(&mut bytes).map(|()| Builder::from_random_bytes(bytes).into_uuid().into_bytes()))
    }
}
