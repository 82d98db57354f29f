//! The canonical player-control action vocabulary.
//!
//! `Action` is a closed set: anything the agent emits that does not resolve
//! to one of these members collapses to [`Action::NoAction`] during
//! normalization, so downstream clients only ever see this vocabulary.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// A canonical player-control intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    NextTrack,
    PreviousTrack,
    Pause,
    Play,
    ToggleMute,
    EnterFullscreen,
    ExitFullscreen,
    Minimize,
    OpenChannel,
    VolumeUp,
    VolumeDown,
    Search,
    NoAction,
}

impl Action {
    /// The canonical wire token for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::NextTrack => "next-track",
            Action::PreviousTrack => "previous-track",
            Action::Pause => "pause",
            Action::Play => "play",
            Action::ToggleMute => "toggle-mute",
            Action::EnterFullscreen => "enter-fullscreen",
            Action::ExitFullscreen => "exit-fullscreen",
            Action::Minimize => "minimize",
            Action::OpenChannel => "open-channel",
            Action::VolumeUp => "volume-up",
            Action::VolumeDown => "volume-down",
            Action::Search => "search",
            Action::NoAction => "no-action",
        }
    }

    /// Parse a canonical token. Aliases are not accepted here; run the input
    /// through [`resolve_alias`] first.
    pub fn parse_canonical(token: &str) -> Option<Self> {
        Some(match token {
            "next-track" => Action::NextTrack,
            "previous-track" => Action::PreviousTrack,
            "pause" => Action::Pause,
            "play" => Action::Play,
            "toggle-mute" => Action::ToggleMute,
            "enter-fullscreen" => Action::EnterFullscreen,
            "exit-fullscreen" => Action::ExitFullscreen,
            "minimize" => Action::Minimize,
            "open-channel" => Action::OpenChannel,
            "volume-up" => Action::VolumeUp,
            "volume-down" => Action::VolumeDown,
            "search" => Action::Search,
            "no-action" => Action::NoAction,
            _ => return None,
        })
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::NoAction
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Historical and alternate identifiers the agent is known to emit, mapped
/// to their canonical action. Keys are lowercase; lookups are performed on
/// lowercased input.
static ACTION_ALIASES: LazyLock<HashMap<&'static str, Action>> = LazyLock::new(|| {
    HashMap::from([
        ("next", Action::NextTrack),
        ("next_track", Action::NextTrack),
        ("prev", Action::PreviousTrack),
        ("previous", Action::PreviousTrack),
        ("previous_track", Action::PreviousTrack),
        ("mute", Action::ToggleMute),
        ("toggle_mute", Action::ToggleMute),
        ("fullscreen", Action::EnterFullscreen),
        ("enter_fullscreen", Action::EnterFullscreen),
        ("unfullscreen", Action::ExitFullscreen),
        ("exit_fullscreen", Action::ExitFullscreen),
        ("minimise", Action::Minimize),
        ("open_channel", Action::OpenChannel),
        ("volume_up", Action::VolumeUp),
        ("volume_down", Action::VolumeDown),
        ("find", Action::Search),
        ("none", Action::NoAction),
        ("no_action", Action::NoAction),
    ])
});

/// Resolve a lowercase identifier through the alias table, falling back to
/// the canonical token set. Returns `None` for anything outside the closed
/// vocabulary.
pub fn resolve_alias(token: &str) -> Option<Action> {
    ACTION_ALIASES
        .get(token)
        .copied()
        .or_else(|| Action::parse_canonical(token))
}
