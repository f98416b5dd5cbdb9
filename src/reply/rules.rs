//! Rule pack loader — the ordered pattern table driving the responder.
//!
//! Rules load from YAML (disk-first, embedded fallback) and keep their file
//! order: matching walks the list top to bottom and the first hit wins, so
//! specific patterns must be authored above general ones. Patterns are
//! compiled case-insensitive and anchored at the start of the input only.
//!
//! [`lint`] reports authoring mistakes that parsing deliberately tolerates,
//! like a rule shadowed by an earlier duplicate.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::types::{PackError, Result};

/// Capture placeholder recognized inside templates.
pub const PLACEHOLDER: &str = "{0}";

// ---------------------------------------------------------------------------
// Embedded fallback
// ---------------------------------------------------------------------------

const EMBEDDED_RULES: &str = include_str!("../../data/rules.yaml");

// ---------------------------------------------------------------------------
// YAML schema types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct PackYaml {
    rules: Vec<RuleYaml>,
    fallback: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RuleYaml {
    pattern: String,
    #[serde(default)]
    first_person: bool,
    templates: Vec<String>,
}

// ---------------------------------------------------------------------------
// Runtime pack — compiled, ordered rules
// ---------------------------------------------------------------------------

/// One compiled rule: a pattern plus the templates it can answer with.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Pattern source as authored, for lint messages.
    pub pattern: String,
    /// Routes the capture through the "I am …" mood adapter.
    pub first_person: bool,
    pub templates: Vec<String>,
    regex: Regex,
}

impl Rule {
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// First capture group's text, if the pattern has one and it matched.
    pub fn capture<'a>(&self, input: &'a str) -> Option<&'a str> {
        self.regex
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn has_capture_group(&self) -> bool {
        self.regex.captures_len() > 1
    }
}

/// Loaded rule table plus the fallback templates used when nothing matches.
#[derive(Debug, Clone)]
pub struct RulePack {
    pub rules: Vec<Rule>,
    pub fallback: Vec<String>,
}

// ---------------------------------------------------------------------------
// Singleton
// ---------------------------------------------------------------------------

static PACK: OnceLock<RulePack> = OnceLock::new();

/// Get the built-in rule pack (singleton, loaded on first call).
pub fn pack() -> &'static RulePack {
    PACK.get_or_init(load_pack)
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

fn load_pack() -> RulePack {
    // Disk-first, embedded fallback
    let yaml_str = std::fs::read_to_string("data/rules.yaml")
        .ok()
        .unwrap_or_else(|| EMBEDDED_RULES.to_string());

    parse_pack(&yaml_str).unwrap_or_else(|e| {
        eprintln!("WARN: failed to parse rules.yaml from disk ({}), using embedded", e);
        parse_pack(EMBEDDED_RULES).expect("embedded rules.yaml must parse")
    })
}

/// Load a rule pack from an explicit path, for the `--rules` override.
pub fn load_from_path(path: &Path) -> Result<RulePack> {
    let yaml_str = std::fs::read_to_string(path)?;
    parse_pack(&yaml_str)
}

pub fn parse_pack(yaml_str: &str) -> Result<RulePack> {
    let raw: PackYaml = serde_yaml::from_str(yaml_str)?;

    if raw.fallback.is_empty() {
        return Err(PackError::RulePack(
            "fallback template list must not be empty".to_string(),
        ));
    }

    let mut rules = Vec::with_capacity(raw.rules.len());
    for rule in raw.rules {
        if rule.templates.is_empty() {
            return Err(PackError::RulePack(format!(
                "rule `{}` has no templates",
                rule.pattern
            )));
        }
        let regex = compile_pattern(&rule.pattern)?;
        rules.push(Rule {
            pattern: rule.pattern,
            first_person: rule.first_person,
            templates: rule.templates,
            regex,
        });
    }

    Ok(RulePack {
        rules,
        fallback: raw.fallback,
    })
}

/// Anchor at the start and match case-insensitively. Anything after the
/// matched prefix is ignored, which is what lets "I want (.*)" fire on
/// "I want a break, honestly".
fn compile_pattern(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(&format!("^(?:{pattern})"))
        .case_insensitive(true)
        .build()
        .map_err(|source| PackError::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}

// ---------------------------------------------------------------------------
// Lint
// ---------------------------------------------------------------------------

/// Report authoring problems the loader accepts: duplicate patterns (the
/// later copy can never fire), templates with repeated placeholders, and
/// placeholder templates on patterns with no capture group (those matches
/// can only apologize). Indices in messages are 1-based rule positions.
pub fn lint(pack: &RulePack) -> Vec<String> {
    let mut warnings = Vec::new();

    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (idx, rule) in pack.rules.iter().enumerate() {
        let position = idx + 1;
        match first_seen.get(rule.pattern.as_str()) {
            Some(&earlier) => warnings.push(format!(
                "rule {} duplicates rule {} (pattern `{}`); the earlier rule wins and this one is unreachable",
                position, earlier, rule.pattern
            )),
            None => {
                first_seen.insert(rule.pattern.as_str(), position);
            }
        }

        for template in &rule.templates {
            let slots = template.matches(PLACEHOLDER).count();
            if slots > 1 {
                warnings.push(format!(
                    "rule {} template `{}` repeats the {} placeholder",
                    position, template, PLACEHOLDER
                ));
            }
            if slots >= 1 && !rule.has_capture_group() {
                warnings.push(format!(
                    "rule {} (pattern `{}`) has no capture group but template `{}` wants one; matches will only apologize",
                    position, rule.pattern, template
                ));
            }
        }
    }

    for template in &pack.fallback {
        if template.matches(PLACEHOLDER).count() > 1 {
            warnings.push(format!(
                "fallback template `{}` repeats the {} placeholder",
                template, PLACEHOLDER
            ));
        }
    }

    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
