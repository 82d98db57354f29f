//! ANSI escape stripping for raw agent output.

use regex::Regex;
use std::sync::LazyLock;

// CSI sequences only: ESC [ <params> <intermediates> <final>. The agent CLI
// colors its output; everything else must survive byte-for-byte.
static ANSI_CSI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-?]*[ -/]*[@-~]").unwrap());

/// Remove all ANSI/VT100 CSI escape sequences from `text`.
///
/// Pure and infallible; empty input yields an empty string.
pub fn strip_ansi(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    ANSI_CSI_PATTERN.replace_all(text, "").into_owned()
}
