//! Records interactions into a cassette file.

use std::fmt::Display;
use std::path::PathBuf;

use chrono::Utc;
use serde_json::json;

use super::format::{Cassette, Interaction, NEXT_BYTES, RANDOM_PORT};

/// Records random draws and writes them as a YAML cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    version: String,
    interactions: Vec<Interaction>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            version: version.into(),
            interactions: Vec::new(),
            next_seq: 0,
        }
    }

    /// Record one random draw of `len` bytes.
    ///
    /// Drawn bytes are stored as hex under `{"Ok": ...}` and failures as
    /// their message under `{"Err": ...}`, the shape
    /// `replaying::extract_result` reads back.
    pub fn record_draw<E: Display>(&mut self, len: usize, result: &Result<Vec<u8>, E>) {
        let output = match result {
            Ok(bytes) => json!({ "Ok": hex::encode(bytes) }),
            Err(e) => json!({ "Err": e.to_string() }),
        };
        self.interactions.push(Interaction {
            seq: self.next_seq,
            port: RANDOM_PORT.to_string(),
            method: NEXT_BYTES.to_string(),
            input: json!({ "len": len }),
            output,
        });
        self.next_seq += 1;
    }

    /// Finish recording and write the cassette YAML file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name,
            recorded_at: Utc::now(),
            version: self.version,
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}
