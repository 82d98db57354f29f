//! Normalized action payloads produced by the resolution pipeline.

use crate::Action;
use serde::{Deserialize, Serialize};

/// The fully-normalized result of resolving a transcript.
///
/// Invariants (enforced by the normalizer, assumed by consumers):
/// - `channel` is non-empty only when `action` is open-channel.
/// - `query` is non-empty only when `action` is search.
/// - `delay_seconds` is present only when it parsed as a finite number.
/// - `execute_at` is present only when it parsed as an integer epoch-millis.
/// - `reason` is an opaque diagnostic string, never validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPayload {
    pub action: Action,

    #[serde(default)]
    pub channel: String,

    #[serde(default)]
    pub query: String,

    #[serde(default)]
    pub reply: String,

    #[serde(default)]
    pub reason: String,

    /// Seconds until the client should execute the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<f64>,

    /// Absolute execution timestamp, Unix millis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execute_at: Option<i64>,
}

impl ActionPayload {
    /// A safe no-action payload carrying a diagnostic reason. Used for every
    /// degraded path so callers can always render something actionable.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            action: Action::NoAction,
            channel: String::new(),
            query: String::new(),
            reply: String::new(),
            reason: reason.into(),
            delay_seconds: None,
            execute_at: None,
        }
    }
}

impl Default for ActionPayload {
    fn default() -> Self {
        Self::fallback("")
    }
}

/// A resolved command together with the sanitized agent output it came from.
///
/// `raw_text` is retained for observability even when structured extraction
/// succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    pub action: ActionPayload,
    pub raw_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_safe_no_action() {
        let payload = ActionPayload::fallback("timeout");
        assert_eq!(payload.action, Action::NoAction);
        assert!(payload.channel.is_empty());
        assert!(payload.query.is_empty());
        assert_eq!(payload.reason, "timeout");
        assert!(payload.delay_seconds.is_none());
        assert!(payload.execute_at.is_none());
    }

    #[test]
    fn test_serialization_field_names() {
        let payload = ActionPayload {
            action: Action::OpenChannel,
            channel: "BBC One".into(),
            delay_seconds: Some(30.0),
            execute_at: Some(1_700_000_000_000),
            ..ActionPayload::fallback("")
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["action"], "open-channel");
        assert_eq!(json["channel"], "BBC One");
        assert_eq!(json["delay_seconds"], 30.0);
        assert_eq!(json["execute_at"], 1_700_000_000_000_i64);
    }

    #[test]
    fn test_absent_scheduling_fields_not_serialized() {
        let json = serde_json::to_string(&ActionPayload::fallback("x")).unwrap();
        assert!(!json.contains("delay_seconds"));
        assert!(!json.contains("execute_at"));
    }
}
