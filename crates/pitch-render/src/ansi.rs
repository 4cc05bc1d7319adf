//! ANSI escape stripping for plain-text exports

use regex::Regex;
use std::sync::OnceLock;

static ANSI_REGEX: OnceLock<Regex> = OnceLock::new();

fn ansi_regex() -> &'static Regex {
    ANSI_REGEX.get_or_init(|| {
        // CSI sequences (colors, cursor movement), then any other two-byte escape
        Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]|\x1b[@-Z\\-_]").expect("valid ANSI regex")
    })
}

/// Strip terminal styling escape sequences from `input`
pub fn strip_ansi(input: &str) -> String {
    ansi_regex().replace_all(input, "").into_owned()
}

/// True when `input` still contains an escape character
pub fn has_escape(input: &str) -> bool {
    input.contains('\x1b')
}
