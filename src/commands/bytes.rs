//! `randuuid bytes` command.

use std::io::Write;

use crate::generator::{V4Generator, V4Options};

/// Execute the `bytes` command: place one identifier in a zero-filled
/// buffer of `len` bytes at `offset` and write the buffer as hex.
///
/// # Errors
///
/// Returns an error string if the buffer cannot be allocated or is too
/// small, or if generation or writing fails.
pub fn run(
    generator: &V4Generator,
    len: usize,
    offset: usize,
    random: Option<&[u8]>,
    out: &mut impl Write,
) -> Result<(), String> {
    let options = random.map(V4Options::with_random);
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|e| format!("Cannot allocate a {len}-byte buffer: {e}"))?;
    buf.resize(len, 0);
    let written = generator
        .generate_into(options.as_ref(), &mut buf, offset)
        .map_err(|e| e.to_string())?;
    writeln!(out, "{}", hex::encode(written)).map_err(|e| format!("Failed to write output: {e}"))
}
