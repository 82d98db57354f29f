//! The resolution orchestrator: agent invocation plus fallback logic.

use crate::config::ResolverConfig;
use crate::extract::extract_payload;
use crate::invoker::{AgentInvoker, SubprocessInvoker};
use crate::normalize::normalize_payload;
use crate::prompt::build_prompt;
use crate::sanitize::strip_ansi;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use voicehelm_common::{Action, ActionPayload, Resolution, Result};

/// Reason set when the transcript is empty and the agent is never invoked.
pub const EMPTY_TRANSCRIPT_REASON: &str = "empty_transcript";

/// Resolves transcripts into typed action payloads by running the external
/// agent and recovering a structured result from its output.
///
/// Stateless per request: concurrent `resolve` calls are independent and may
/// invoke the agent simultaneously.
pub struct Resolver {
    invoker: Arc<dyn AgentInvoker>,
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver backed by the configured agent subprocess.
    pub fn new(config: ResolverConfig) -> Self {
        let invoker = Arc::new(SubprocessInvoker::new(
            config.agent.command.clone(),
            config.agent.args.clone(),
        ));
        Self { invoker, config }
    }

    /// Create a resolver with a custom invoker (used by tests to substitute
    /// the subprocess with a canned implementation).
    pub fn with_invoker(config: ResolverConfig, invoker: Arc<dyn AgentInvoker>) -> Self {
        Self { invoker, config }
    }

    /// Resolve a transcript against the known channel names.
    ///
    /// Empty transcripts short-circuit without invoking the agent. Parsing
    /// failures degrade to a valid payload; only timeout, missing-executable,
    /// and unexpected invocation errors propagate.
    pub async fn resolve(&self, transcript: &str, channels: &[String]) -> Result<Resolution> {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            debug!("Empty transcript, skipping agent invocation");
            return Ok(Resolution {
                action: ActionPayload::fallback(EMPTY_TRANSCRIPT_REASON),
                raw_text: String::new(),
            });
        }

        let prompt = build_prompt(transcript, channels);
        let timeout = Duration::from_millis(self.config.agent.timeout_ms);

        let invocation = self.invoker.invoke(&prompt, timeout).await?;

        // stderr is consulted only when stdout came back empty.
        let raw = {
            let stdout = invocation.stdout.trim();
            if stdout.is_empty() {
                invocation.stderr.trim()
            } else {
                stdout
            }
        };
        let raw_text = strip_ansi(raw);

        let candidate = extract_payload(&raw_text);
        let extraction_failed = candidate.is_none();
        let mut action = normalize_payload(candidate.as_ref());

        // Unparseable but non-empty output is treated as a free-text answer
        // rather than discarded.
        if extraction_failed
            && !raw_text.is_empty()
            && action.action == Action::NoAction
            && action.reply.is_empty()
        {
            action.reply = raw_text.clone();
        }

        if invocation.exit_code != Some(0)
            && action.action == Action::NoAction
            && action.reason.is_empty()
        {
            action.reason = match invocation.exit_code {
                Some(code) => format!("agent_exit_{code}"),
                None => "agent_killed".to_string(),
            };
        }

        info!(
            action = %action.action,
            reason = %action.reason,
            extraction_failed,
            raw_len = raw_text.len(),
            "Resolved transcript"
        );

        Ok(Resolution { action, raw_text })
    }
}
