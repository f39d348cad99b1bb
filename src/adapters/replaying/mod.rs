//! Replaying adapters that replay recorded interactions.

pub mod random;

pub use random::ReplayingRandomSource;

use crate::ports::random::SourceError;

/// Extracts a Result from a cassette output JSON value.
///
/// Mirror of `CassetteRecorder::record_draw`.
pub(crate) fn extract_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, SourceError> {
    if let Some(err) = output.get("Err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("Ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
