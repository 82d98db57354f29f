//! Common types shared across Voicehelm crates.
//!
//! This crate provides the canonical action vocabulary, the normalized
//! payload type, and the error taxonomy that the resolver pipeline and
//! the API boundary both depend on.

pub mod action;
pub mod error;
pub mod payload;

pub use action::{resolve_alias, Action};
pub use error::{Result, VoicehelmError};
pub use payload::{ActionPayload, Resolution};
