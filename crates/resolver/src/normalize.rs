//! Normalization of candidate payloads into invariant-satisfying results.
//!
//! The candidate map comes from untrusted, partially-shaped agent output, so
//! every field is coerced explicitly. This stage is total: it never fails,
//! it only degrades to no-action.

use serde_json::{Map, Value};
use voicehelm_common::{resolve_alias, Action, ActionPayload};

/// Reason set when the candidate payload is absent or malformed.
pub const INVALID_PAYLOAD_REASON: &str = "invalid_payload";

/// Produce a fully-populated payload from a candidate map, or the safe
/// default when no candidate was recovered.
pub fn normalize_payload(candidate: Option<&Map<String, Value>>) -> ActionPayload {
    let Some(map) = candidate else {
        return ActionPayload::fallback(INVALID_PAYLOAD_REASON);
    };

    let action_raw = map
        .get("action")
        .and_then(Value::as_str)
        .unwrap_or(Action::NoAction.as_str())
        .trim()
        .to_lowercase();
    let action = resolve_alias(&action_raw).unwrap_or(Action::NoAction);

    let mut channel = text_field(map, "channel");
    let mut query = text_field(map, "query");
    let reply = text_field(map, "reply");
    let reason = text_field(map, "reason");

    // Field-presence invariants: channel only accompanies open-channel,
    // query only accompanies search.
    if action != Action::OpenChannel {
        channel.clear();
    }
    if action != Action::Search {
        query.clear();
    }

    ActionPayload {
        action,
        channel,
        query,
        reply,
        reason,
        delay_seconds: float_field(map, &["delay_seconds", "delaySeconds"]),
        execute_at: integer_field(map, &["execute_at", "executeAt"]),
    }
}

/// Read a string field, defaulting to empty when absent or non-string.
fn text_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// Read a finite float from the first key present, tolerating quoted
/// numbers. Unparsable values are dropped, never defaulted.
fn float_field(map: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    let value = keys.iter().find_map(|key| map.get(*key))?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Read an integer from the first key present, tolerating quoted integers.
fn integer_field(map: &Map<String, Value>, keys: &[&str]) -> Option<i64> {
    let value = keys.iter().find_map(|key| map.get(*key))?;
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
