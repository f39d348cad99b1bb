//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::live::OsRandomSource;
use crate::adapters::recording::RecordingRandomSource;
use crate::adapters::replaying::ReplayingRandomSource;
use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::generator::V4Generator;
use crate::metrics::GenerationObserver;
use crate::ports::random::RandomSource;

/// Bundles all port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live, replaying,
/// recording).
pub struct ServiceContext {
    /// Source of default entropy.
    pub random: Box<dyn RandomSource>,
}

impl ServiceContext {
    /// Creates a live context backed by the OS randomness source.
    #[must_use]
    pub fn live() -> Self {
        Self { random: Box::new(OsRandomSource::new()) }
    }

    /// Creates a recording context whose cassettes land in a timestamped
    /// directory under `root`.
    ///
    /// The returned session must be finished after the context (and any
    /// generator built from it) has been dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(root: PathBuf) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new_in(root)?;
        let random = RecordingRandomSource::new(
            Box::new(OsRandomSource::new()),
            Arc::clone(&session.random),
        );
        Ok((Self { random: Box::new(random) }, session))
    }

    /// Creates a replaying context from a cassette file or a recording
    /// session directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        Self::replaying_from(&CassetteConfig::from_path(path))
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette file use their live adapter.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            random: match replayers.random {
                Some(r) => Box::new(ReplayingRandomSource::new(r)),
                None => Box::new(OsRandomSource::new()),
            },
        })
    }

    /// Builds a generator drawing default entropy from this context.
    #[must_use]
    pub fn into_generator(self, observer: Option<Arc<dyn GenerationObserver>>) -> V4Generator {
        let generator = V4Generator::new(self.random);
        match observer {
            Some(observer) => generator.with_observer(observer),
            None => generator,
        }
    }
}
