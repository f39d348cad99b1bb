//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::session::RANDOM_CASSETTE;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Each port can optionally have its own
/// cassette file for replay. Ports without a cassette path fall back to
/// their live adapter.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the randomness port cassette file.
    pub random: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the randomness port.
    pub random: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Builds a config from a replay path.
    ///
    /// A directory is read as a recording session and its
    /// `random.cassette.yaml` serves the randomness port. Any other path is
    /// taken as the randomness cassette itself.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let random = if path.is_dir() {
            path.join(RANDOM_CASSETTE)
        } else {
            path.to_path_buf()
        };
        Self { random: Some(random) }
    }

    /// Load a monolithic cassette file and create a single replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_monolithic(path: &Path) -> Result<CassetteReplayer, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        Ok(CassetteReplayer::new(&cassette))
    }

    /// Load all configured per-port cassette files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            random: self.random.as_deref().map(Self::load_monolithic).transpose()?,
        })
    }
}
