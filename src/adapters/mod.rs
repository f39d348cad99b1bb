//! Adapter implementations of the port traits.
//!
//! `live` talks to the real system, `recording` captures interactions to a
//! cassette while delegating, and `replaying` serves them back.

pub mod live;
pub mod recording;
pub mod replaying;
