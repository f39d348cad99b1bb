//! Tracing subscriber setup for the binary.
//!
//! Log lines go to stderr so stdout carries only identifiers.

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "RANDUUID_LOG";
/// Environment variable selecting the log line format (`text` or `json`).
pub const LOG_FORMAT_ENV: &str = "RANDUUID_LOG_FORMAT";

const DEFAULT_FILTER: &str = "warn";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name, defaulting to text for anything unrecognised.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Builds the filter from `directive`, falling back to `warn` when it is
/// missing or invalid.
#[must_use]
pub fn filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber using `RANDUUID_LOG` and
/// `RANDUUID_LOG_FORMAT`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<(), String> {
    let directive = std::env::var(LOG_ENV).ok();
    let format = std::env::var(LOG_FORMAT_ENV)
        .map(|v| LogFormat::parse(&v))
        .unwrap_or(LogFormat::Text);

    let layer = match format {
        LogFormat::Text => fmt::layer().with_writer(std::io::stderr).with_target(false).boxed(),
        LogFormat::Json => fmt::layer().with_writer(std::io::stderr).json().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter(directive.as_deref()))
        .with(layer)
        .try_init()
        .map_err(|e| format!("Failed to install log subscriber: {e}"))
}
