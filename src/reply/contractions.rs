//! Contraction reattachment — undoes tokenizer clitic splits in rendered text.
//!
//! The tokenizer splits "don't" into `do` + `n't`; once tokens are joined
//! back with spaces the reply would read "do n't". [`attach`] glues each
//! split clitic back onto the preceding word. `'s` is deliberately not in
//! the list: it is ambiguous between possessive and "is", so a split `'s`
//! stays split.

use regex::Regex;
use std::sync::OnceLock;

/// Clitic suffixes reattached to the preceding word, applied in this order.
pub const SUFFIXES: [&str; 6] = ["n't", "'ll", "'ve", "'re", "'d", "'m"];

static PATTERNS: OnceLock<Vec<(Regex, String)>> = OnceLock::new();

fn patterns() -> &'static [(Regex, String)] {
    PATTERNS.get_or_init(|| {
        SUFFIXES
            .iter()
            .map(|suffix| {
                let pattern = format!(r"\b(\w+)\s+{}\b", regex::escape(suffix));
                let replacement = format!("${{1}}{}", suffix);
                let re = Regex::new(&pattern).expect("contraction pattern must compile");
                (re, replacement)
            })
            .collect()
    })
}

/// Reattach split clitics: "do n't" becomes "don't", "I 'm" becomes "I'm".
/// Idempotent on text with no split clitics.
pub fn attach(input: &str) -> String {
    let mut text = input.to_string();
    for (re, replacement) in patterns() {
        text = re.replace_all(&text, replacement.as_str()).into_owned();
    }
    text
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
