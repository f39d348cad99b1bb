//! Replaying adapter for the `RandomSource` port.

use std::sync::Mutex;

use tracing::debug;

use super::extract_result;
use crate::cassette::format::{NEXT_BYTES, RANDOM_PORT};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::random::{RandomSource, SourceError};

/// Replays recorded random draws from a cassette.
pub struct ReplayingRandomSource {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingRandomSource {
    /// Creates a new replaying source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl RandomSource for ReplayingRandomSource {
    fn next_bytes(&self, len: usize) -> Result<Vec<u8>, SourceError> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            replayer.try_next_interaction(RANDOM_PORT, NEXT_BYTES)?.output.clone()
        };
        let encoded: String = extract_result(&output, "random::next_bytes")?;
        let bytes = hex::decode(&encoded)
            .map_err(|e| format!("random::next_bytes: invalid hex in cassette: {e}"))?;
        debug!(requested = len, replayed = bytes.len(), "replayed random draw");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(outputs: Vec<serde_json::Value>) -> CassetteReplayer {
        let interactions = outputs
            .into_iter()
            .zip(0u64..)
            .map(|(output, seq)| Interaction {
                seq,
                port: "random".into(),
                method: "next_bytes".into(),
                input: json!({"len": 16}),
                output,
            })
            .collect();
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            version: "0.0.0".into(),
            interactions,
        };
        CassetteReplayer::new(&cassette)
    }

    #[test]
    fn replays_draws_in_order() {
        let source = ReplayingRandomSource::new(make_replayer(vec![
            json!({"Ok": "000102030405060708090a0b0c0d0e0f"}),
            json!({"Ok": "ffffffffffffffffffffffffffffffff"}),
        ]));

        assert_eq!(source.next_bytes(16).unwrap(), (0u8..16).collect::<Vec<_>>());
        assert_eq!(source.next_bytes(16).unwrap(), vec![0xff; 16]);
    }

    #[test]
    fn replays_recorded_error() {
        let source = ReplayingRandomSource::new(make_replayer(vec![json!({"Err": "device gone"})]));
        let err = source.next_bytes(16).unwrap_err();
        assert_eq!(err.to_string(), "device gone");
    }

    #[test]
    fn rejects_bad_hex() {
        let source = ReplayingRandomSource::new(make_replayer(vec![json!({"Ok": "zz"})]));
        let err = source.next_bytes(16).unwrap_err();
        assert!(err.to_string().contains("invalid hex"));
    }

    #[test]
    fn exhaustion_is_an_error() {
        let replayer = make_replayer(vec![json!({"Ok": "00000000000000000000000000000000"})]);
        let source = ReplayingRandomSource::new(replayer);
        assert!(source.next_bytes(16).is_ok());

        let err = source.next_bytes(16).unwrap_err();
        assert!(err.to_string().contains("Cassette exhausted"));
    }
}
