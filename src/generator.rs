//! Version-4 identifier generation.
//!
//! Entropy is resolved once per call in a fixed order: explicit bytes, then
//! a caller supplier, then the generator's [`RandomSource`]. The first 16
//! bytes are stamped with the version and variant bits and either encoded
//! as the canonical string or copied into a caller buffer.

use std::fmt;
use std::sync::Arc;

use tracing::trace;
use uuid::Uuid;

use crate::adapters::live::random::OsRandomSource;
use crate::error::{GenerateError, Result};
use crate::metrics::{Entropy, GenerationObserver};
use crate::ports::random::RandomSource;

/// Length in bytes of an identifier.
pub const UUID_LEN: usize = 16;

/// Per-call overrides for the entropy used by a generator.
#[derive(Clone, Copy, Default)]
pub struct V4Options<'a> {
    /// Explicit entropy, at least 16 bytes. Takes precedence over `rng`.
    pub random: Option<&'a [u8]>,
    /// Capability returning at least 16 bytes when invoked.
    pub rng: Option<&'a dyn Fn() -> Vec<u8>>,
}

impl<'a> V4Options<'a> {
    /// Options that use `random` verbatim as entropy.
    #[must_use]
    pub fn with_random(random: &'a [u8]) -> Self {
        Self { random: Some(random), rng: None }
    }

    /// Options that draw entropy from `rng`.
    #[must_use]
    pub fn with_rng(rng: &'a dyn Fn() -> Vec<u8>) -> Self {
        Self { random: None, rng: Some(rng) }
    }
}

impl fmt::Debug for V4Options<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("V4Options")
            .field("random", &self.random.map(<[u8]>::len))
            .field("rng", &self.rng.is_some())
            .finish()
    }
}

/// Generates random version-4 identifiers.
pub struct V4Generator {
    source: Box<dyn RandomSource>,
    observer: Option<Arc<dyn GenerationObserver>>,
}

impl V4Generator {
    /// Creates a generator drawing default entropy from `source`.
    #[must_use]
    pub fn new(source: Box<dyn RandomSource>) -> Self {
        Self { source, observer: None }
    }

    /// Attaches an observer notified once per call.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn GenerationObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Generates an identifier in canonical string form.
    ///
    /// With no options, a source that offers a ready-made identifier is used
    /// directly.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidRandomness`] if fewer than 16 bytes of
    /// entropy are available, or [`GenerateError::Source`] if the source fails.
    pub fn generate_string(&self, options: Option<&V4Options<'_>>) -> Result<String> {
        let outcome = match options {
            None => self.fast_path().unwrap_or_else(|| self.stamped(None)),
            Some(_) => self.stamped(options),
        };
        self.observe(outcome).map(|bytes| encode(&bytes))
    }

    /// Writes an identifier into `buf[offset..offset + 16]` and returns `buf`.
    ///
    /// Bytes outside that range are left untouched. The bounds are checked
    /// before any entropy is drawn, so a failed call never writes.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::OutOfBounds`] if `buf` cannot hold 16 bytes at
    /// `offset`, plus the entropy errors of [`V4Generator::generate_string`].
    pub fn generate_into<'b>(
        &self,
        options: Option<&V4Options<'_>>,
        buf: &'b mut [u8],
        offset: usize,
    ) -> Result<&'b mut [u8]> {
        let len = buf.len();
        let end = offset.saturating_add(UUID_LEN);
        if end > len {
            return Err(self.observe_err(GenerateError::OutOfBounds { offset, end, len }));
        }

        let bytes = self.observe(self.stamped(options))?;
        buf[offset..end].copy_from_slice(&bytes);
        Ok(buf)
    }

    fn fast_path(&self) -> Option<Result<([u8; UUID_LEN], Entropy)>> {
        let primitive = self.source.random_uuid()?;
        trace!("using source identifier primitive");
        Some(primitive.map(|bytes| (bytes, Entropy::FastPath)).map_err(GenerateError::Source))
    }

    fn stamped(&self, options: Option<&V4Options<'_>>) -> Result<([u8; UUID_LEN], Entropy)> {
        let options = options.copied().unwrap_or_default();
        let (mut bytes, entropy) = if let Some(random) = options.random {
            (first_block(random)?, Entropy::Explicit)
        } else if let Some(rng) = options.rng {
            (first_block(&rng())?, Entropy::Supplier)
        } else {
            let drawn = self.source.next_bytes(UUID_LEN).map_err(GenerateError::Source)?;
            (first_block(&drawn)?, Entropy::Source)
        };
        trace!(?entropy, "stamping version 4 identifier");
        stamp(&mut bytes);
        Ok((bytes, entropy))
    }

    fn observe(&self, outcome: Result<([u8; UUID_LEN], Entropy)>) -> Result<[u8; UUID_LEN]> {
        match outcome {
            Ok((bytes, entropy)) => {
                if let Some(observer) = &self.observer {
                    observer.on_generated(entropy);
                }
                Ok(bytes)
            }
            Err(e) => Err(self.observe_err(e)),
        }
    }

    fn observe_err(&self, error: GenerateError) -> GenerateError {
        if let Some(observer) = &self.observer {
            observer.on_failed(&error);
        }
        error
    }
}

impl Default for V4Generator {
    fn default() -> Self {
        Self::new(Box::new(OsRandomSource::new()))
    }
}

/// Copies the first 16 bytes of `entropy`, ignoring any excess.
fn first_block(entropy: &[u8]) -> Result<[u8; UUID_LEN]> {
    let head = entropy
        .get(..UUID_LEN)
        .ok_or(GenerateError::InvalidRandomness { len: entropy.len() })?;
    let mut block = [0u8; UUID_LEN];
    block.copy_from_slice(head);
    Ok(block)
}

/// Sets the version nibble to 4 and the variant bits to `10`.
pub fn stamp(bytes: &mut [u8; UUID_LEN]) {
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
}

/// Encodes `bytes` as a lowercase hyphenated string.
#[must_use]
pub fn encode(bytes: &[u8; UUID_LEN]) -> String {
    Uuid::from_bytes(*bytes).hyphenated().to_string()
}

/// Generates an identifier string from the OS randomness source.
///
/// # Errors
///
/// Returns [`GenerateError::Source`] if the OS source is unavailable.
pub fn v4() -> Result<String> {
    V4Generator::default().generate_string(None)
}

/// Generates an identifier string using `options` for entropy.
///
/// # Errors
///
/// See [`V4Generator::generate_string`].
pub fn v4_with(options: &V4Options<'_>) -> Result<String> {
    V4Generator::default().generate_string(Some(options))
}

/// Writes an identifier from the OS randomness source into `buf` at `offset`.
///
/// # Errors
///
/// See [`V4Generator::generate_into`].
pub fn v4_into(buf: &mut [u8], offset: usize) -> Result<&mut [u8]> {
    V4Generator::default().generate_into(None, buf, offset)
}
