//! Recording session managing per-port cassette recorders.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// File name of the randomness cassette inside a session directory.
pub const RANDOM_CASSETTE: &str = "random.cassette.yaml";

/// Manages per-port `CassetteRecorder` instances for a recording session.
///
/// Each port gets its own recorder writing to a separate cassette file.
/// All cassettes are stored in a timestamped directory.
pub struct RecordingSession {
    /// Recorder for randomness interactions.
    pub random: Arc<Mutex<CassetteRecorder>>,
    /// Output directory containing all cassette files.
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a new recording session under `<root>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cassette directory already exists
    /// - The directory cannot be created
    pub fn new_in(root: impl Into<PathBuf>) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let output_dir = root.into().join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }

        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let random = CassetteRecorder::new(
            output_dir.join(RANDOM_CASSETTE),
            format!("{timestamp}-random"),
            env!("CARGO_PKG_VERSION"),
        );

        Ok(Self { random: Arc::new(Mutex::new(random)), output_dir })
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// Consumes the session and writes each port's cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if any cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.random, "random")?;

        Ok(self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_creates_output_directory_and_finishes() {
        let root = std::env::temp_dir().join("randuuid_session_test");
        let session = RecordingSession::new_in(&root);
        assert!(session.is_ok(), "RecordingSession::new_in() should succeed");

        let dir = session.unwrap().finish().unwrap();
        assert_eq!(dir.parent(), Some(root.as_path()));
        assert!(dir.join("random.cassette.yaml").exists());

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn finish_fails_while_adapter_holds_recorder() {
        let root = std::env::temp_dir().join("randuuid_session_busy_test");
        let session = RecordingSession::new_in(&root).unwrap();
        let held = Arc::clone(&session.random);

        let err = session.finish().unwrap_err();
        assert!(err.contains("still has references"));

        drop(held);
        let _ = std::fs::remove_dir_all(&root);
    }
}
