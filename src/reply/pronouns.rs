//! Perspective swap — rewrites an utterance from the speaker's point of view
//! to the responder's ("I am happy" ⇄ "you are happy").
//!
//! Two passes per word: a direct pronoun lookup, then verb agreement for
//! be/have forms that directly follow a swapped pronoun. Everything else
//! passes through untouched, so third-person text survives the swap.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::contractions;

// ---------------------------------------------------------------------------
// Word tables
// ---------------------------------------------------------------------------

/// First ⇄ second person pronoun rewrites. Keys are lowercase; values keep
/// the case the output needs ("I" stays capitalized).
const PRONOUNS: [(&str, &str); 22] = [
    ("i", "you"),
    ("me", "you"),
    ("my", "your"),
    ("mine", "yours"),
    ("am", "are"),
    ("i'm", "you're"),
    ("i'd", "you'd"),
    ("i've", "you've"),
    ("i'll", "you'll"),
    ("you", "I"),
    ("your", "my"),
    ("yours", "mine"),
    ("you're", "I'm"),
    ("you'd", "I'd"),
    ("you've", "I've"),
    ("you'll", "I'll"),
    ("myself", "yourself"),
    ("yourself", "myself"),
    ("we", "you"),
    ("us", "you"),
    ("our", "your"),
    ("ours", "yours"),
];

fn pronoun_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| PRONOUNS.iter().copied().collect())
}

/// Subject pronoun → correct verb form, for one be/have verb group.
fn agree(
    first: &'static str,
    second: &'static str,
    third: &'static str,
) -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("i", first),
        ("you", second),
        ("we", second),
        ("they", second),
        ("he", third),
        ("she", third),
        ("it", third),
    ])
}

type VerbTable = HashMap<&'static str, HashMap<&'static str, &'static str>>;

fn verb_agreements() -> &'static VerbTable {
    static MAP: OnceLock<VerbTable> = OnceLock::new();
    MAP.get_or_init(|| {
        let groups: [(&[&str], (&str, &str, &str)); 6] = [
            (&["is", "are"], ("am", "are", "is")),
            (&["was", "were"], ("was", "were", "was")),
            (&["has", "have"], ("have", "have", "has")),
            (&["isn't", "aren't"], ("am not", "aren't", "isn't")),
            (&["wasn't", "weren't"], ("wasn't", "weren't", "wasn't")),
            (&["hasn't", "haven't"], ("haven't", "haven't", "hasn't")),
        ];
        let mut map = VerbTable::new();
        for (forms, (first, second, third)) in groups {
            for form in forms {
                map.insert(*form, agree(first, second, third));
            }
        }
        map
    })
}

// ---------------------------------------------------------------------------
// Swap
// ---------------------------------------------------------------------------

/// Rewrite `input` from the other point of view. The input is lowercased
/// first; swapped pronouns carry their own casing ("I", "I'm").
pub fn swap_perspective(input: &str) -> String {
    let lowered = input.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let pronouns = pronoun_map();
    let verbs = verb_agreements();

    let mut swapped: Vec<String> = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        if let Some(&replacement) = pronouns.get(word) {
            swapped.push(replacement.to_string());
            continue;
        }
        // Verb agreement only fires right after a swapped pronoun, keyed by
        // the pronoun it became. "isn't" after "i" expands to "am not".
        if i > 0 && pronouns.contains_key(words[i - 1]) {
            if let Some(agreement) = verbs.get(word) {
                let subject = swapped[i - 1].to_lowercase();
                if let Some(&form) = agreement.get(subject.as_str()) {
                    swapped.push(form.to_string());
                    continue;
                }
            }
        }
        swapped.push(word.to_string());
    }

    contractions::attach(&swapped.join(" "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_to_second_person() {
        assert_eq!(swap_perspective("i am happy"), "you are happy");
        assert_eq!(swap_perspective("my dog loves me"), "your dog loves you");
    }

    #[test]
    fn test_second_to_first_person() {
        assert_eq!(swap_perspective("you are happy"), "I am happy");
        assert_eq!(swap_perspective("your dog loves you"), "my dog loves I");
    }

    #[test]
    fn test_round_trip() {
        let once = swap_perspective("I am happy");
        assert_eq!(once, "you are happy");
        assert_eq!(swap_perspective(&once), "I am happy");
    }

    #[test]
    fn test_input_case_is_folded() {
        assert_eq!(swap_perspective("I Am HAPPY"), "you are happy");
    }

    #[test]
    fn test_verb_agreement_past() {
        assert_eq!(swap_perspective("i was sad yesterday"), "you were sad yesterday");
        assert_eq!(swap_perspective("you were mean to me"), "I was mean to you");
    }

    #[test]
    fn test_verb_agreement_have() {
        assert_eq!(swap_perspective("i have a dog"), "you have a dog");
        assert_eq!(swap_perspective("you has a dog"), "I have a dog");
    }

    #[test]
    fn test_negated_be_expands() {
        assert_eq!(swap_perspective("you aren't listening"), "I am not listening");
        assert_eq!(swap_perspective("i wasn't there"), "you weren't there");
    }

    #[test]
    fn test_contracted_pronouns() {
        assert_eq!(swap_perspective("i'm afraid of spiders"), "you're afraid of spiders");
        assert_eq!(swap_perspective("you're wrong"), "I'm wrong");
        assert_eq!(swap_perspective("i'll call you"), "you'll call I");
    }

    #[test]
    fn test_third_person_untouched() {
        assert_eq!(swap_perspective("it is fine"), "it is fine");
        assert_eq!(swap_perspective("she was here"), "she was here");
    }

    #[test]
    fn test_plural_first_person() {
        assert_eq!(swap_perspective("we were lost"), "you were lost");
        assert_eq!(swap_perspective("our house"), "your house");
    }

    #[test]
    fn test_reflexive() {
        assert_eq!(swap_perspective("i did it myself"), "you did it yourself");
    }

    #[test]
    fn test_verb_without_pronoun_before_it_unchanged() {
        assert_eq!(swap_perspective("this isn't right"), "this isn't right");
    }
}
