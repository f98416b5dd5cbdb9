//! Word tokenizer for the tagging service.
//!
//! Splits on whitespace, peels punctuation off token edges into tokens of
//! their own, and detaches clitics the way the Penn Treebank conventions
//! do: "don't" → `do` + `n't`, "I'm" → `I` + `'m`, "it's" → `it` + `'s`.
//! Case is preserved; the tagger folds case itself.

/// Clitic suffixes detached from the word they ride on. `n't` keeps
/// treebank stems ("can't" → `ca` + `n't`, "won't" → `wo` + `n't`).
const CLITICS: [&str; 7] = ["n't", "'ll", "'ve", "'re", "'d", "'m", "'s"];

/// Tokenize a text into treebank-style word and punctuation tokens.
/// Hyphenated words stay whole. Empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        split_word(word, &mut tokens);
    }
    tokens
}

fn split_word(word: &str, out: &mut Vec<String>) {
    // Curly apostrophes count as apostrophes for clitic detection.
    let word = word.replace('\u{2019}', "'");
    let mut rest = word.as_str();

    // Leading punctuation, one token per character.
    while let Some(c) = rest.chars().next() {
        if !is_edge_punct(c) {
            break;
        }
        out.push(c.to_string());
        rest = &rest[c.len_utf8()..];
    }

    // Trailing punctuation, peeled inside-out so "word)," emits ")" ",".
    let mut trailing: Vec<String> = Vec::new();
    while let Some(c) = rest.chars().last() {
        if !is_edge_punct(c) {
            break;
        }
        trailing.push(c.to_string());
        rest = &rest[..rest.len() - c.len_utf8()];
    }

    if !rest.is_empty() {
        match clitic_split(rest) {
            Some(at) => {
                out.push(rest[..at].to_string());
                out.push(rest[at..].to_string());
            }
            None if rest.len() > 1 && rest.ends_with('\'') => {
                // Plural possessive: "friends'" → `friends` + `'`.
                out.push(rest[..rest.len() - 1].to_string());
                out.push("'".to_string());
            }
            None => out.push(rest.to_string()),
        }
    }

    out.extend(trailing.into_iter().rev());
}

/// Byte offset where a clitic suffix starts, if the word carries one and
/// is not the clitic itself.
fn clitic_split(word: &str) -> Option<usize> {
    for clitic in CLITICS {
        if word.len() > clitic.len() {
            let at = word.len() - clitic.len();
            if word.is_char_boundary(at) && word[at..].eq_ignore_ascii_case(clitic) {
                return Some(at);
            }
        }
    }
    None
}

/// Characters peeled off token edges. Apostrophes stay attached (clitic
/// handling owns them) and hyphens stay word-internal.
fn is_edge_punct(c: char) -> bool {
    !c.is_alphanumeric() && c != '\'' && c != '-'
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(text: &str) -> Vec<String> {
        tokenize(text)
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(toks("i feel fine"), vec!["i", "feel", "fine"]);
    }

    #[test]
    fn test_trailing_punctuation_split() {
        assert_eq!(toks("fine."), vec!["fine", "."]);
        assert_eq!(toks("really?!"), vec!["really", "?", "!"]);
    }

    #[test]
    fn test_negation_clitic() {
        assert_eq!(toks("don't"), vec!["do", "n't"]);
        assert_eq!(toks("can't"), vec!["ca", "n't"]);
        assert_eq!(toks("won't"), vec!["wo", "n't"]);
    }

    #[test]
    fn test_apostrophe_clitics() {
        assert_eq!(toks("I'm tired"), vec!["I", "'m", "tired"]);
        assert_eq!(toks("it's fine"), vec!["it", "'s", "fine"]);
        assert_eq!(toks("you'll see"), vec!["you", "'ll", "see"]);
    }

    #[test]
    fn test_clitic_case_insensitive() {
        assert_eq!(toks("DON'T"), vec!["DO", "N'T"]);
    }

    #[test]
    fn test_bare_clitic_not_resplit() {
        assert_eq!(toks("'m"), vec!["'m"]);
        assert_eq!(toks("n't"), vec!["n't"]);
    }

    #[test]
    fn test_curly_apostrophe_normalized() {
        assert_eq!(toks("I\u{2019}m sad"), vec!["I", "'m", "sad"]);
    }

    #[test]
    fn test_plural_possessive() {
        assert_eq!(toks("friends'"), vec!["friends", "'"]);
    }

    #[test]
    fn test_hyphen_stays_internal() {
        assert_eq!(toks("self-esteem"), vec!["self-esteem"]);
    }

    #[test]
    fn test_wrapping_punctuation() {
        assert_eq!(toks("(don't),"), vec!["(", "do", "n't", ")", ","]);
    }

    #[test]
    fn test_comma_inside_number_kept() {
        assert_eq!(toks("1,500"), vec!["1,500"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(toks("").is_empty());
        assert!(toks("   \t ").is_empty());
    }

    #[test]
    fn test_full_sentence() {
        assert_eq!(
            toks("I am going to the store, really."),
            vec!["I", "am", "going", "to", "the", "store", ",", "really", "."],
        );
    }
}
