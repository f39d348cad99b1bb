//! Randomness port supplying entropy for identifier generation.

/// Error returned by a randomness source.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Supplies random bytes.
///
/// Abstracting the entropy source allows deterministic replay by substituting
/// recorded bytes during tests and cassette playback.
pub trait RandomSource: Send + Sync {
    /// Returns at least `len` random bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if no secure source is available.
    fn next_bytes(&self, len: usize) -> Result<Vec<u8>, SourceError>;

    /// Returns a ready-stamped version-4 identifier, if the source has a
    /// platform primitive for it.
    ///
    /// Sources without one return `None` and callers fall back to
    /// [`RandomSource::next_bytes`].
    fn random_uuid(&self) -> Option<Result<[u8; 16], SourceError>> {
        None
    }
}
