//! Recording adapter for the `RandomSource` port.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::cassette::recorder::CassetteRecorder;
use crate::ports::random::{RandomSource, SourceError};

/// Records drawn bytes while delegating to an inner implementation.
///
/// The inner source's identifier primitive is never used, so every draw
/// goes through `next_bytes` and ends up in the cassette.
pub struct RecordingRandomSource {
    inner: Box<dyn RandomSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingRandomSource {
    /// Creates a new recording source wrapping the given implementation.
    #[must_use]
    pub fn new(inner: Box<dyn RandomSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl RandomSource for RecordingRandomSource {
    fn next_bytes(&self, len: usize) -> Result<Vec<u8>, SourceError> {
        let result = self.inner.next_bytes(len);
        self.recorder.lock().expect("recorder lock poisoned").record_draw(len, &result);
        debug!(len, ok = result.is_ok(), "recorded random draw");
        result
    }
}
