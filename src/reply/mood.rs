//! Grammar-mood adapter for "I am …" statements.
//!
//! A fragment like "I am tired" cannot be dropped into "Do you enjoy {0}?"
//! as-is. [`adapt`] strips the "I am"/"I'm" head and prefixes the remainder
//! according to the part of speech of the next word: adjectives get
//! "feeling", nouns get "being a", infinitives get "trying", and gerunds
//! stand alone. Inputs that do not start with "I am"/"I'm" pass through
//! unchanged.

use crate::tagger::PosTagger;

// ---------------------------------------------------------------------------
// Prefix selection
// ---------------------------------------------------------------------------

enum MoodPrefix {
    Feeling,
    Bare,
    Being,
    BeingA,
    Trying,
    Whatever,
    PassThrough,
}

fn prefix_for(tag: &str) -> MoodPrefix {
    match tag {
        "JJ" | "JJR" | "JJS" | "RB" | "RBR" | "RBS" => MoodPrefix::Feeling,
        "VBG" => MoodPrefix::Bare,
        t if t.starts_with("VB") => MoodPrefix::Being,
        "NN" => MoodPrefix::BeingA,
        t if t.starts_with("NN") => MoodPrefix::Being,
        "PRP" | "PRP$" | "RP" | "IN" | "DT" | "PDT" | "WDT" | "CD" | "LS" | "SYM" | "WP"
        | "WRB" => MoodPrefix::Being,
        "TO" => MoodPrefix::Trying,
        "CC" | "EX" | "FW" | "UH" | "POS" => MoodPrefix::Whatever,
        _ => MoodPrefix::PassThrough,
    }
}

// ---------------------------------------------------------------------------
// Adapt
// ---------------------------------------------------------------------------

/// Rewrite an "I am …"/"I'm …" statement into a fragment that fits after a
/// verb in a question template. Anything else is returned unchanged.
pub fn adapt(input: &str, tagger: &dyn PosTagger) -> String {
    let tokens = tagger.tokenize(input);
    let starts_i_am = tokens.len() >= 2
        && tokens[0].eq_ignore_ascii_case("i")
        && (tokens[1].eq_ignore_ascii_case("am") || tokens[1].eq_ignore_ascii_case("'m"));
    if !starts_i_am {
        return input.to_string();
    }

    let tagged = tagger.tag(&tokens);
    let remainder = tokens[2..].join(" ");
    let first_tag = tagged.get(2).map(|(_, tag)| tag.as_str()).unwrap_or("");

    match prefix_for(first_tag) {
        MoodPrefix::Feeling => format!("feeling {remainder}"),
        MoodPrefix::Bare | MoodPrefix::PassThrough => remainder,
        MoodPrefix::Being => format!("being {remainder}"),
        MoodPrefix::BeingA => format!("being a {remainder}"),
        MoodPrefix::Trying => format!("trying {remainder}"),
        MoodPrefix::Whatever => format!("whatever {remainder} means"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
