//! Tag lexicon loader — word → Penn Treebank tag lists from YAML.
//!
//! Uses the standard disk-first + `include_str!` fallback pattern. The
//! lexicon carries closed-class words and the open-class words the suffix
//! heuristics would misread; everything else is guessed by shape.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Embedded fallback
// ---------------------------------------------------------------------------

const EMBEDDED_LEXICON: &str = include_str!("../../data/lexicon.yaml");

// ---------------------------------------------------------------------------
// YAML schema types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct LexiconYaml {
    tags: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
struct TagEntry {
    tag: String,
    words: Vec<String>,
}

// ---------------------------------------------------------------------------
// Runtime lexicon — the loaded, indexed form
// ---------------------------------------------------------------------------

/// Loaded word-class lexicon, indexed word → tag.
#[derive(Debug)]
pub struct Lexicon {
    words: HashMap<String, String>,
}

impl Lexicon {
    /// Look up a word's tag, case-folded. `None` means the word is open
    /// class as far as the lexicon knows.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.words.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Singleton
// ---------------------------------------------------------------------------

static LEXICON: OnceLock<Lexicon> = OnceLock::new();

/// Get the loaded lexicon (singleton, loaded on first call).
pub fn lexicon() -> &'static Lexicon {
    LEXICON.get_or_init(load_lexicon)
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

fn load_lexicon() -> Lexicon {
    // Disk-first, embedded fallback
    let yaml_str = std::fs::read_to_string("data/lexicon.yaml")
        .ok()
        .unwrap_or_else(|| EMBEDDED_LEXICON.to_string());

    parse_lexicon(&yaml_str).unwrap_or_else(|e| {
        eprintln!("WARN: failed to parse lexicon.yaml from disk ({}), using embedded", e);
        parse_lexicon(EMBEDDED_LEXICON).expect("embedded lexicon.yaml must parse")
    })
}

fn parse_lexicon(yaml_str: &str) -> Result<Lexicon, String> {
    let raw: LexiconYaml = serde_yaml::from_str(yaml_str)
        .map_err(|e| format!("YAML parse error: {}", e))?;

    // First tag in file order wins for a word listed twice.
    let mut words = HashMap::new();
    for entry in raw.tags {
        for word in entry.words {
            words
                .entry(word.to_lowercase())
                .or_insert_with(|| entry.tag.clone());
        }
    }
    Ok(Lexicon { words })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
