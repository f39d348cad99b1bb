//! `randuuid generate` command.

use std::io::Write;

use crate::generator::{V4Generator, V4Options};

/// Execute the `generate` command, writing `count` identifiers to `out`.
///
/// # Errors
///
/// Returns an error string if generation or writing fails.
pub fn run(
    generator: &V4Generator,
    count: usize,
    random: Option<&[u8]>,
    out: &mut impl Write,
) -> Result<(), String> {
    let options = random.map(V4Options::with_random);
    for _ in 0..count {
        let id = generator.generate_string(options.as_ref()).map_err(|e| e.to_string())?;
        writeln!(out, "{id}").map_err(|e| format!("Failed to write output: {e}"))?;
    }
    Ok(())
}
