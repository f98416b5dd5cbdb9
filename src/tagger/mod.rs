//! Part-of-speech tagging service — tokenizer plus per-word Penn Treebank tags.
//!
//! The responder only consumes this through the [`PosTagger`] trait, so tests
//! can swap in canned taggers and a heavier backend can replace the built-in
//! one without touching the reply pipeline.
//!
//! Tagging is lookup-first: the lexicon pins closed-class words and known
//! traps, and anything unlisted falls through to shape heuristics (digits,
//! punctuation, suffix patterns, capitalization).

pub mod lexicon;
pub mod tokenize;

pub use tokenize::tokenize;

// ---------------------------------------------------------------------------
// Service trait
// ---------------------------------------------------------------------------

/// Tokenizing and tagging behind one seam.
///
/// `tag` takes pre-split tokens so callers can tag a whole utterance in one
/// call or probe a single token in isolation.
pub trait PosTagger {
    fn tokenize(&self, text: &str) -> Vec<String>;
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)>;
}

// ---------------------------------------------------------------------------
// Built-in tagger
// ---------------------------------------------------------------------------

/// The built-in lexicon + suffix-heuristic tagger.
#[derive(Debug, Clone, Copy)]
pub struct TreebankTagger;

impl PosTagger for TreebankTagger {
    fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize::tokenize(text)
    }

    fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        tokens
            .iter()
            .map(|t| (t.clone(), tag_word(t)))
            .collect()
    }
}

static TAGGER: TreebankTagger = TreebankTagger;

/// The shared built-in tagger instance.
pub fn builtin() -> &'static TreebankTagger {
    &TAGGER
}

/// Force the lexicon to load now instead of on first tag. Idempotent;
/// call it once at startup so the first reply doesn't pay the load cost.
pub fn ensure_ready() {
    let _ = lexicon::lexicon();
}

// ---------------------------------------------------------------------------
// Per-word tagging
// ---------------------------------------------------------------------------

/// Tag a single word: lexicon lookup first, shape heuristics second.
pub fn tag_word(word: &str) -> String {
    if let Some(tag) = lexicon::lexicon().lookup(word) {
        return tag.to_string();
    }
    suffix_guess(word)
}

fn suffix_guess(word: &str) -> String {
    // Numbers, allowing separators: "42", "1,500", "3.14"
    if !word.is_empty()
        && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        && word.chars().any(|c| c.is_ascii_digit())
    {
        return "CD".to_string();
    }

    // Pure punctuation
    if !word.chars().any(|c| c.is_alphanumeric()) {
        return punct_tag(word);
    }

    let lower = word.to_lowercase();
    if lower.len() >= 5 && lower.ends_with("ing") {
        return "VBG".to_string();
    }
    if lower.len() >= 4 && lower.ends_with("ed") {
        return "VBD".to_string();
    }
    if lower.len() >= 4 && lower.ends_with("ly") {
        return "RB".to_string();
    }
    if lower.len() >= 3 && lower.ends_with('s') && !lower.ends_with("ss") {
        return "NNS".to_string();
    }
    if word.chars().next().is_some_and(|c| c.is_uppercase()) {
        return "NNP".to_string();
    }
    "NN".to_string()
}

fn punct_tag(word: &str) -> String {
    match word {
        "." | "!" | "?" => ".".to_string(),
        "," => ",".to_string(),
        ":" | ";" | "-" => ":".to_string(),
        _ => "SYM".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_one(word: &str) -> String {
        tag_word(word)
    }

    #[test]
    fn test_lexicon_words_win() {
        assert_eq!(tag_one("the"), "DT");
        assert_eq!(tag_one("am"), "VBP");
        assert_eq!(tag_one("running"), "VBG");
        assert_eq!(tag_one("tired"), "JJ");
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(tag_one("The"), "DT");
        assert_eq!(tag_one("AM"), "VBP");
    }

    #[test]
    fn test_number_shapes() {
        assert_eq!(tag_one("42"), "CD");
        assert_eq!(tag_one("1,500"), "CD");
        assert_eq!(tag_one("3.14"), "CD");
    }

    #[test]
    fn test_punctuation_tags() {
        assert_eq!(tag_one("."), ".");
        assert_eq!(tag_one("!"), ".");
        assert_eq!(tag_one("?"), ".");
        assert_eq!(tag_one(","), ",");
        assert_eq!(tag_one(";"), ":");
        assert_eq!(tag_one("@"), "SYM");
    }

    #[test]
    fn test_suffix_ing_guesses_gerund() {
        assert_eq!(tag_one("jogging"), "VBG");
        // Too short for the -ing rule, falls through to NN
        assert_eq!(tag_one("zing"), "NN");
    }

    #[test]
    fn test_suffix_ed_guesses_past() {
        assert_eq!(tag_one("jumped"), "VBD");
    }

    #[test]
    fn test_suffix_ly_guesses_adverb() {
        assert_eq!(tag_one("quickly"), "RB");
    }

    #[test]
    fn test_suffix_s_guesses_plural() {
        assert_eq!(tag_one("spiders"), "NNS");
        assert_eq!(tag_one("stores"), "NNS");
        // Double-s singulars are not plurals
        assert_eq!(tag_one("chess"), "NN");
    }

    #[test]
    fn test_capitalized_unknown_is_proper() {
        assert_eq!(tag_one("Maria"), "NNP");
    }

    #[test]
    fn test_unknown_defaults_to_noun() {
        assert_eq!(tag_one("doctor"), "NN");
        assert_eq!(tag_one("store"), "NN");
        assert_eq!(tag_one("xyz123"), "NN");
    }

    #[test]
    fn test_tagger_trait_tags_utterance() {
        let tagger = builtin();
        let tokens = tagger.tokenize("I am tired");
        let tagged = tagger.tag(&tokens);
        assert_eq!(
            tagged,
            vec![
                ("I".to_string(), "PRP".to_string()),
                ("am".to_string(), "VBP".to_string()),
                ("tired".to_string(), "JJ".to_string()),
            ]
        );
    }

    #[test]
    fn test_ensure_ready_is_idempotent() {
        ensure_ready();
        ensure_ready();
        assert_eq!(tag_one("the"), "DT");
    }
}
