//! Transcript-to-intent resolution pipeline.
//!
//! The pipeline turns a speech transcript plus a list of known channel names
//! into a strictly-typed [`voicehelm_common::ActionPayload`]:
//!
//! ```text
//! transcript ──► Resolver ──► AgentInvoker (subprocess) ──► raw text
//!                   │
//!                   ▼
//!            sanitize (strip ANSI)
//!                   │
//!                   ▼
//!            extract (JSON parse, embedded-object scan, regex fallback)
//!                   │
//!                   ▼
//!            normalize (closed vocabulary, field invariants)
//! ```
//!
//! Parsing and normalization never fail; they degrade to a valid no-action
//! payload. Only invocation-layer failures (timeout, missing executable)
//! propagate as errors, and the caller pairs each with a safe fallback.

pub mod config;
pub mod extract;
pub mod invoker;
pub mod normalize;
pub mod prompt;
pub mod resolver;
pub mod sanitize;

pub use config::{AgentConfig, ResolverConfig};
pub use invoker::{AgentInvocation, AgentInvoker, StaticInvoker, SubprocessInvoker};
pub use resolver::Resolver;
