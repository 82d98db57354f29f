//! End-to-end tests of the resolution pipeline against canned agents.
//!
//! These cover the full path: invocation, ANSI sanitization, payload
//! extraction, normalization, and the degradation rules.

use std::sync::Arc;
use voicehelm_common::{Action, ActionPayload, VoicehelmError};
use voicehelm_resolver::{
    AgentInvocation, Resolver, ResolverConfig, StaticInvoker,
};

fn resolver_with(invoker: StaticInvoker) -> Resolver {
    Resolver::with_invoker(ResolverConfig::default(), Arc::new(invoker))
}

#[tokio::test]
async fn ansi_colored_json_is_recovered() {
    let resolver = resolver_with(StaticInvoker::success(
        "\x1b[32m{\"action\":\"volume_up\"}\x1b[0m",
    ));
    let result = resolver.resolve("louder please", &[]).await.unwrap();
    assert_eq!(result.action.action, Action::VolumeUp);
    assert_eq!(result.raw_text, r#"{"action":"volume_up"}"#);
}

#[tokio::test]
async fn prose_wrapped_object_first_match_wins() {
    let resolver = resolver_with(StaticInvoker::success(
        r#"Thinking... {"action":"pause"} but maybe {"action":"play"}"#,
    ));
    let result = resolver.resolve("stop", &[]).await.unwrap();
    assert_eq!(result.action.action, Action::Pause);
}

#[tokio::test]
async fn regex_fallback_marks_reason() {
    let resolver = resolver_with(StaticInvoker::success(
        r#"malformed { "action":"play" trailing "reply":"ok" junk"#,
    ));
    let result = resolver.resolve("resume", &[]).await.unwrap();
    assert_eq!(result.action.action, Action::Play);
    assert_eq!(result.action.reply, "ok");
    assert_eq!(result.action.reason, "regex_fallback");
}

#[tokio::test]
async fn legacy_alias_and_untrimmed_channel() {
    let resolver = resolver_with(StaticInvoker::success(
        r#"{"action":"open_channel","channel":"  ABC  "}"#,
    ));
    let channels = vec!["ABC".to_string(), "XYZ".to_string()];
    let result = resolver.resolve("put on ABC", &channels).await.unwrap();
    assert_eq!(result.action.action, Action::OpenChannel);
    assert_eq!(result.action.channel, "ABC");
}

#[tokio::test]
async fn unknown_action_with_channel_is_scrubbed() {
    let resolver = resolver_with(StaticInvoker::success(
        r#"{"action":"teleport","channel":"BBC","query":"x"}"#,
    ));
    let result = resolver.resolve("teleport me", &[]).await.unwrap();
    assert_eq!(result.action.action, Action::NoAction);
    assert!(result.action.channel.is_empty());
    assert!(result.action.query.is_empty());
}

#[tokio::test]
async fn scheduling_fields_survive_the_pipeline() {
    let resolver = resolver_with(StaticInvoker::success(
        r#"{"action":"open_channel","channel":"BBC","delay_seconds":"30","executeAt":1700000000000}"#,
    ));
    let result = resolver.resolve("BBC in 30 seconds", &[]).await.unwrap();
    assert_eq!(result.action.delay_seconds, Some(30.0));
    assert_eq!(result.action.execute_at, Some(1_700_000_000_000));
}

#[tokio::test]
async fn whitespace_only_agent_output() {
    let resolver = resolver_with(StaticInvoker::with_invocation(AgentInvocation {
        stdout: "   \n  ".into(),
        stderr: String::new(),
        exit_code: Some(0),
    }));
    let result = resolver.resolve("hello", &[]).await.unwrap();
    assert_eq!(result.action.action, Action::NoAction);
    assert_eq!(result.action.reason, "invalid_payload");
    assert!(result.action.reply.is_empty());
    assert!(result.raw_text.is_empty());
}

#[tokio::test]
async fn killed_agent_reports_agent_killed() {
    let resolver = resolver_with(StaticInvoker::with_invocation(AgentInvocation {
        stdout: String::new(),
        stderr: "segfault".into(),
        exit_code: None,
    }));
    let result = resolver.resolve("hello", &[]).await.unwrap();
    assert_eq!(result.action.reason, "agent_killed");
    assert_eq!(result.action.reply, "segfault");
}

#[tokio::test]
async fn timeout_is_distinguished_and_pairs_with_fallback() {
    let resolver = resolver_with(StaticInvoker::timing_out());
    let err = resolver.resolve("anything", &[]).await.unwrap_err();
    assert!(matches!(err, VoicehelmError::AgentTimeout(30_000)));

    // The boundary layer renders a safe default alongside the error.
    let fallback = ActionPayload::fallback("timeout");
    assert_eq!(fallback.action, Action::NoAction);
}

#[tokio::test]
async fn missing_agent_is_distinguished() {
    let resolver = resolver_with(StaticInvoker::missing());
    let err = resolver.resolve("anything", &[]).await.unwrap_err();
    assert!(matches!(err, VoicehelmError::AgentUnavailable(_)));
}

#[tokio::test]
async fn structured_reply_with_reason_is_preserved() {
    let resolver = resolver_with(StaticInvoker::success(
        r#"{"action":"none","reply":"It is 3pm.","reason":"question"}"#,
    ));
    let result = resolver.resolve("what time is it", &[]).await.unwrap();
    assert_eq!(result.action.action, Action::NoAction);
    assert_eq!(result.action.reply, "It is 3pm.");
    assert_eq!(result.action.reason, "question");
}
