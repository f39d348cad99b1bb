//! Record-replay round-trip integration test.
//!
//! Proves that randomness record/replay works end-to-end:
//! 1. Generate identifiers through a recording context.
//! 2. Replay the cassette through `ServiceContext::replaying()`.
//! 3. Assert identical identifiers, twice, for determinism.
//! 4. Do the same through the binary with `RANDUUID_RECORD`/`RANDUUID_REPLAY`,
//!    pointing `RANDUUID_REPLAY` at the cassette file and at its directory.

use std::path::{Path, PathBuf};
use std::process::Command;

use randuuid::context::ServiceContext;
use randuuid::V4Generator;

fn exercise(generator: &V4Generator) -> (String, String, [u8; 20]) {
    let first = generator.generate_string(None).unwrap();
    let second = generator.generate_string(None).unwrap();
    let mut buf = [0u8; 20];
    generator.generate_into(None, &mut buf, 2).unwrap();
    (first, second, buf)
}

fn only_subdir(root: &Path) -> PathBuf {
    let mut dirs: Vec<PathBuf> = std::fs::read_dir(root)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.is_dir())
        .collect();
    assert_eq!(dirs.len(), 1, "expected one recording directory in {}", root.display());
    dirs.remove(0)
}

#[test]
fn record_then_replay_produces_identical_outputs() {
    let root = std::env::temp_dir().join("randuuid_record_replay_test");
    let _ = std::fs::remove_dir_all(&root);

    // --- Phase 1: Record ---
    let (ctx, session) = ServiceContext::recording_at(root.clone()).unwrap();
    let recorded = {
        let generator = ctx.into_generator(None);
        exercise(&generator)
    };
    let dir = session.finish().expect("recording should succeed");
    let cassette = dir.join("random.cassette.yaml");
    assert!(cassette.exists());
    assert_ne!(recorded.0, recorded.1);

    // --- Phase 2: Replay and verify identical outputs ---
    let replayed = exercise(&ServiceContext::replaying(&cassette).unwrap().into_generator(None));
    assert_eq!(recorded, replayed, "replay mismatch");

    // --- Phase 3: Replay a second time for determinism ---
    let again = exercise(&ServiceContext::replaying(&cassette).unwrap().into_generator(None));
    assert_eq!(replayed, again, "determinism: outputs differ between replays");

    // --- Phase 4: A fourth draw has nothing left to replay ---
    let generator = ServiceContext::replaying(&cassette).unwrap().into_generator(None);
    let _ = exercise(&generator);
    let err = generator.generate_string(None).unwrap_err();
    assert!(err.to_string().contains("Cassette exhausted"));

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn binary_replays_recorded_session() {
    let root = std::env::temp_dir().join("randuuid_record_replay_bin_test");
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(&root).unwrap();
    let bin = env!("CARGO_BIN_EXE_randuuid");

    let recorded = Command::new(bin)
        .args(["generate", "-n", "3"])
        .env("RANDUUID_RECORD", &root)
        .env_remove("RANDUUID_REPLAY")
        .output()
        .expect("failed to run randuuid binary");
    assert!(recorded.status.success());
    assert!(String::from_utf8_lossy(&recorded.stderr).contains("Recording saved to"));

    let session_dir = only_subdir(&root);
    let cassette = session_dir.join("random.cassette.yaml");

    for replay_path in [&cassette, &session_dir] {
        let replayed = Command::new(bin)
            .args(["generate", "-n", "3"])
            .env("RANDUUID_REPLAY", replay_path)
            .env_remove("RANDUUID_RECORD")
            .output()
            .expect("failed to run randuuid binary");
        assert!(replayed.status.success(), "replay from {} failed", replay_path.display());
        assert_eq!(recorded.stdout, replayed.stdout);
    }

    let _ = std::fs::remove_dir_all(&root);
}
