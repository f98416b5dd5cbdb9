//! Response simplifier — trims a rewritten fragment to its leading clause.
//!
//! Keeps tokens up to and including the first noun, or up to (excluding) the
//! first sentence punctuation, whichever comes first. A fragment like
//! "going to the store , really ." becomes "going to the store", which reads
//! naturally inside a question template.

use super::contractions;
use crate::tagger::PosTagger;

/// Punctuation that ends the kept fragment (the mark itself is dropped).
const STOP_PUNCT: [&str; 4] = [".", "!", "?", ","];

/// Cut `input` at the first noun (kept) or stop punctuation (dropped),
/// then reattach any clitics the tokenizer split.
pub fn simplify(input: &str, tagger: &dyn PosTagger) -> String {
    let tokens = tagger.tokenize(input);

    let mut kept: Vec<String> = Vec::new();
    for token in tokens {
        if STOP_PUNCT.contains(&token.as_str()) {
            break;
        }
        // Tokens are tagged in isolation here. A context-aware tagger sees
        // one-word utterances through this call; that is a known limitation.
        let tagged = tagger.tag(std::slice::from_ref(&token));
        let is_noun = tagged
            .first()
            .is_some_and(|(_, tag)| tag.starts_with("NN"));
        kept.push(token);
        if is_noun {
            break;
        }
    }

    contractions::attach(&kept.join(" "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
