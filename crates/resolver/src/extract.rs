//! Best-effort recovery of a candidate payload from sanitized agent output.
//!
//! The agent is asked for a bare JSON object but routinely wraps it in
//! explanatory prose, truncates it, or emits no JSON at all. Three
//! strategies run in order; the first success wins.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Reason marker set on payloads recovered via the regex fallback.
pub const REGEX_FALLBACK_REASON: &str = "regex_fallback";

static ACTION_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""action"\s*:\s*"([^"]+)""#).unwrap());

static CHANNEL_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""channel"\s*:\s*"([^"]*)""#).unwrap());

static REPLY_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""reply"\s*:\s*"([^"]*)""#).unwrap());

static QUERY_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""query"\s*:\s*"([^"]*)""#).unwrap());

/// Attempt to recover a candidate payload from `text`.
///
/// Strategy order:
/// 1. Parse the whole (trimmed) text as a single JSON object.
/// 2. Scan left-to-right for each `{` and parse a JSON value starting there,
///    permitting trailing unparsed text. The earliest offset that yields an
///    object wins — never a later-but-larger candidate.
/// 3. Scrape individual `"field":"value"` substrings. Without at least an
///    action or a reply this reports nothing; otherwise the matched subset
///    is returned with `reason` marking the fallback path.
///
/// Returns `None` when no payload is recoverable.
pub fn extract_payload(text: &str) -> Option<Map<String, Value>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) {
        return Some(map);
    }

    if let Some(map) = extract_embedded_object(text) {
        return Some(map);
    }

    scrape_fields(text)
}

/// Find the first position in `text` where a well-formed JSON object begins,
/// ignoring whatever follows its closing brace.
fn extract_embedded_object(text: &str) -> Option<Map<String, Value>> {
    for (start, _) in text.match_indices('{') {
        let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        if let Some(Ok(Value::Object(map))) = stream.next() {
            return Some(map);
        }
    }
    None
}

fn scrape_fields(text: &str) -> Option<Map<String, Value>> {
    let action = ACTION_FIELD.captures(text);
    let reply = REPLY_FIELD.captures(text);

    if action.is_none() && reply.is_none() {
        return None;
    }

    let mut map = Map::new();
    if let Some(caps) = action {
        map.insert("action".into(), Value::String(caps[1].trim().to_string()));
    }
    if let Some(caps) = CHANNEL_FIELD.captures(text) {
        map.insert("channel".into(), Value::String(caps[1].trim().to_string()));
    }
    if let Some(caps) = reply {
        map.insert("reply".into(), Value::String(caps[1].trim().to_string()));
    }
    if let Some(caps) = QUERY_FIELD.captures(text) {
        map.insert("query".into(), Value::String(caps[1].trim().to_string()));
    }
    map.insert(
        "reason".into(),
        Value::String(REGEX_FALLBACK_REASON.to_string()),
    );

    Some(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_text_object() {
        let map = extract_payload(r#"  {"action":"play","reply":"ok"}  "#).unwrap();
        assert_eq!(map["action"], "play");
        assert_eq!(map["reply"], "ok");
    }

    #[test]
    fn test_rejects_non_object_json() {
        assert!(extract_payload(r#"["play"]"#).is_none());
        assert!(extract_payload("42").is_none());
        assert!(extract_payload(r#""play""#).is_none());
    }

    #[test]
    fn test_object_embedded_in_prose() {
        let map =
            extract_payload(r#"Sure, here you go: {"action":"pause"} hope that helps"#).unwrap();
        assert_eq!(map["action"], "pause");
    }

    #[test]
    fn test_embedded_object_with_unicode_value() {
        let map = extract_payload(r#"prefix text {"action":"暂停"} suffix text"#).unwrap();
        assert_eq!(map["action"], "暂停");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_earliest_object_wins_over_larger_later_one() {
        let text = r#"{"action":"play"} then {"action":"open_channel","channel":"BBC"}"#;
        let map = extract_payload(text).unwrap();
        assert_eq!(map["action"], "play");
        assert!(!map.contains_key("channel"));
    }

    #[test]
    fn test_skips_broken_brace_before_valid_object() {
        let text = r#"oops { not json {"action":"play"}"#;
        // The first brace opens an unparsable candidate; scanning continues.
        let map = extract_payload(text).unwrap();
        assert_eq!(map["action"], "play");
    }

    #[test]
    fn test_nested_object_parsed_whole() {
        let map = extract_payload(r#"log: {"action":"play","meta":{"n":1}} end"#).unwrap();
        assert_eq!(map["meta"]["n"], 1);
    }

    #[test]
    fn test_regex_fallback_recovers_fields() {
        let text = r#"the model said "action":"play" and "reply":"ok" before dying"#;
        let map = extract_payload(text).unwrap();
        assert_eq!(map["action"], "play");
        assert_eq!(map["reply"], "ok");
        assert_eq!(map["reason"], REGEX_FALLBACK_REASON);
    }

    #[test]
    fn test_regex_fallback_requires_action_or_reply() {
        assert!(extract_payload(r#"only "channel":"BBC" here"#).is_none());
        let map = extract_payload(r#""reply":"hello" and "channel":"BBC""#).unwrap();
        assert_eq!(map["reply"], "hello");
        assert_eq!(map["channel"], "BBC");
        assert!(!map.contains_key("action"));
    }

    #[test]
    fn test_empty_and_noise_input() {
        assert!(extract_payload("").is_none());
        assert!(extract_payload("   \n  ").is_none());
        assert!(extract_payload("no structure here at all").is_none());
    }
}
