//! Prompt construction for the external agent.

/// Channel names beyond this count are dropped from the prompt. The list is
/// used in given order, without deduplication or sorting.
pub const MAX_PROMPT_CHANNELS: usize = 200;

/// Instruction header for the agent.
///
/// Asks for a bare JSON object; the extractor tolerates prose-wrapped or
/// malformed replies anyway.
const INSTRUCTION_HEADER: &str = r#"You are a voice command parser for a media player.
Given the user's speech transcript, output strict JSON and nothing else.

Allowed action values: next-track, previous-track, pause, play, toggle-mute, enter-fullscreen, exit-fullscreen, minimize, open-channel, volume-up, volume-down, search, no-action.

Field rules:
- For open-channel, put the best-matching channel name in "channel".
- For search, put the search keywords in "query".
- If the user asked a question, set action to no-action and answer briefly in "reply".
- If the user asked for delayed execution, set "delay_seconds" (a number) or "execute_at" (Unix millis).

Output format: {"action":"...","channel":"...","query":"...","reply":"...","reason":"..."}"#;

/// Build the full agent instruction from a transcript and the known
/// channel names.
pub fn build_prompt(transcript: &str, channels: &[String]) -> String {
    let channel_list = if channels.is_empty() {
        "- (none)".to_string()
    } else {
        channels
            .iter()
            .take(MAX_PROMPT_CHANNELS)
            .map(|name| format!("- {name}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!("{INSTRUCTION_HEADER}\n\nAvailable channels:\n{channel_list}\n\nUser transcript:\n{transcript}")
}
