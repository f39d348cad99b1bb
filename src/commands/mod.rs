//! Command dispatch and handlers.

pub mod bytes;
pub mod generate;

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::context::ServiceContext;
use crate::generator::V4Generator;
use crate::metrics::{CallCounter, GenerationObserver};

/// Directory to record randomness cassettes into.
pub const RECORD_ENV: &str = "RANDUUID_RECORD";
/// Cassette file, or recording directory, to replay randomness from.
pub const REPLAY_ENV: &str = "RANDUUID_REPLAY";

/// Dispatch a parsed command to its handler.
///
/// When `RANDUUID_RECORD` is set to a directory path, every random draw is
/// recorded to a cassette in a timestamped directory beneath it. When
/// `RANDUUID_REPLAY` names a cassette file or one of those directories,
/// draws are served from it.
///
/// # Errors
///
/// Returns an error string if the context cannot be set up or the selected
/// command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let (ctx, session) = context_from_env(env::var(RECORD_ENV).ok(), env::var(REPLAY_ENV).ok())?;

    let counter = Arc::new(CallCounter::new());
    let generator =
        ctx.into_generator(Some(Arc::clone(&counter) as Arc<dyn GenerationObserver>));

    let result = dispatch_with_generator(command, &generator, &counter, &mut io::stdout().lock());

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop the generator first to release the recorder reference
        drop(generator);
        finish_recording(session)?;
    }

    result
}

fn context_from_env(
    record: Option<String>,
    replay: Option<String>,
) -> Result<(ServiceContext, Option<RecordingSession>), String> {
    match (record, replay) {
        (Some(_), Some(_)) => {
            Err(format!("{RECORD_ENV} and {REPLAY_ENV} cannot be set at the same time"))
        }
        (Some(dir), None) => {
            debug!(dir = %dir, "recording randomness");
            let (ctx, session) = ServiceContext::recording_at(PathBuf::from(dir))?;
            Ok((ctx, Some(session)))
        }
        (None, Some(path)) => {
            debug!(path = %path, "replaying randomness");
            Ok((ServiceContext::replaying(Path::new(&path))?, None))
        }
        (None, None) => Ok((ServiceContext::live(), None)),
    }
}

/// Dispatch a command with the given generator, writing results to `out`.
fn dispatch_with_generator(
    command: &Command,
    generator: &V4Generator,
    counter: &CallCounter,
    out: &mut impl Write,
) -> Result<(), String> {
    match command {
        Command::Generate { count, random, stats } => {
            let result = decode_random(random.as_deref())
                .and_then(|random| generate::run(generator, *count, random.as_deref(), out));
            // Reported on failure too, so failed calls show up.
            if *stats {
                let stats = serde_json::to_string(&counter.snapshot())
                    .map_err(|e| format!("Failed to serialize stats: {e}"))?;
                eprintln!("{stats}");
            }
            result
        }
        Command::Bytes { len, offset, random } => {
            let random = decode_random(random.as_deref())?;
            bytes::run(generator, *len, *offset, random.as_deref(), out)
        }
    }
}

/// Decode the hex given to `--random`.
fn decode_random(random: Option<&str>) -> Result<Option<Vec<u8>>, String> {
    random
        .map(|hex| hex::decode(hex.trim()).map_err(|e| format!("Invalid --random hex: {e}")))
        .transpose()
}

/// Finish a recording session and report the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    info!(dir = %output_dir.display(), "recording saved");
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
