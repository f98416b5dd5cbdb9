//! Terminal UI primitives — colors and chat-transcript formatting.
//!
//! Zero external dependencies. Uses raw ANSI escape codes.
//! Respects the `NO_COLOR` environment variable (https://no-color.org/).

use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if color output is enabled.
/// Disabled when `NO_COLOR` env var is set (any value) or `TERM=dumb`.
pub fn color_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| {
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if let Ok(term) = std::env::var("TERM") {
            if term == "dumb" {
                return false;
            }
        }
        true
    })
}

// ---------------------------------------------------------------------------
// ANSI escape helpers
// ---------------------------------------------------------------------------

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

// Foreground colors
const FG_RED: &str = "\x1b[31m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_CYAN: &str = "\x1b[36m";
const FG_WHITE: &str = "\x1b[37m";

/// Apply an ANSI style to text. Returns plain text if color is disabled.
fn styled(codes: &[&str], text: &str) -> String {
    if !color_enabled() || codes.is_empty() {
        return text.to_string();
    }
    let prefix: String = codes.iter().copied().collect();
    format!("{}{}{}", prefix, text, RESET)
}

// ---------------------------------------------------------------------------
// Public style functions
// ---------------------------------------------------------------------------

pub fn bold(text: &str) -> String { styled(&[BOLD], text) }
pub fn dim(text: &str) -> String { styled(&[DIM], text) }

pub fn red(text: &str) -> String { styled(&[FG_RED], text) }
pub fn green(text: &str) -> String { styled(&[FG_GREEN], text) }
pub fn yellow(text: &str) -> String { styled(&[FG_YELLOW], text) }
pub fn cyan(text: &str) -> String { styled(&[FG_CYAN], text) }

pub fn bold_red(text: &str) -> String { styled(&[BOLD, FG_RED], text) }
pub fn bold_yellow(text: &str) -> String { styled(&[BOLD, FG_YELLOW], text) }
pub fn bold_cyan(text: &str) -> String { styled(&[BOLD, FG_CYAN], text) }
pub fn bold_white(text: &str) -> String { styled(&[BOLD, FG_WHITE], text) }

// ---------------------------------------------------------------------------
// Icons — flat geometric style
// ---------------------------------------------------------------------------

pub mod icon {
    pub const OK: &str = "✓";
    pub const FAIL: &str = "✗";
    pub const WARN: &str = "△";
    pub const SECTION: &str = "▰▰▰";
}

// ---------------------------------------------------------------------------
// Formatting primitives
// ---------------------------------------------------------------------------

/// Print a compact banner.
///
/// ```text
/// ▰▰▰ pythia v0.2.0 — a listening machine
/// ```
pub fn banner(name: &str, version: &str, subtitle: &str) -> String {
    if subtitle.is_empty() {
        format!("{} {} {}",
            bold_cyan(icon::SECTION),
            bold_white(name),
            dim(version),
        )
    } else {
        format!("{} {} {} {} {}",
            bold_cyan(icon::SECTION),
            bold_white(name),
            dim(version),
            dim("—"),
            dim(subtitle),
        )
    }
}

/// One responder line in the transcript.
///
/// ```text
/// -> [pythia] Hello, how are you feeling today?
/// ```
pub fn bot_line(speaker: &str, text: &str) -> String {
    format!("{} {}", cyan(&format!("-> [{}]", speaker)), text)
}

/// Prompt tag for the user's line: `=> [sam] `.
///
/// Deliberately free of ANSI codes: the string goes straight to the line
/// editor, and escape sequences would throw off its cursor math.
pub fn user_prompt(speaker: &str) -> String {
    format!("=> [{}] ", speaker)
}

/// Error message.
pub fn error(msg: &str) -> String {
    format!("{} {}", bold_red(icon::FAIL), red(msg))
}

/// Warning message.
pub fn warning(msg: &str) -> String {
    format!("{} {}", bold_yellow(icon::WARN), yellow(msg))
}

/// Success message.
pub fn success(msg: &str) -> String {
    format!("{} {}", green(icon::OK), green(msg))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
