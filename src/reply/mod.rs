//! Reply pipeline — matches input against the rule pack, rewrites the
//! captured fragment into the responder's voice, and renders a template.
//!
//! Dispatch walks the rules in pack order and the first match wins. The
//! template is drawn before any rewriting happens, so a rule with a mix of
//! plain and placeholder templates only pays for the rewrite when the drawn
//! template needs it.

pub mod contractions;
pub mod mood;
pub mod pronouns;
pub mod rules;
pub mod simplify;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::tagger::{self, PosTagger};
use self::rules::{RulePack, PLACEHOLDER};

/// Reply used when the drawn template wants a capture the rule's pattern
/// did not produce.
pub const ELABORATE: &str = "I'm not sure I understand. Can you elaborate?";

// ---------------------------------------------------------------------------
// Template choice
// ---------------------------------------------------------------------------

/// Strategy for drawing one template from a rule's list. Inject a
/// deterministic implementation to make sessions reproducible.
pub trait ChooseTemplate {
    /// Pick an index in `0..len`. `len` is always at least 1.
    fn choose(&mut self, len: usize) -> usize;
}

/// Uniform draw from any [`Rng`].
pub struct RngChooser<R: Rng>(pub R);

impl<R: Rng> ChooseTemplate for RngChooser<R> {
    fn choose(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

impl RngChooser<ThreadRng> {
    pub fn unseeded() -> Self {
        RngChooser(rand::thread_rng())
    }
}

impl RngChooser<StdRng> {
    /// Seeded chooser: same seed and inputs, same replies.
    pub fn seeded(seed: u64) -> Self {
        RngChooser(StdRng::seed_from_u64(seed))
    }
}

// ---------------------------------------------------------------------------
// Responder
// ---------------------------------------------------------------------------

/// One conversational responder: a rule pack, a tagging service, and a
/// template chooser.
pub struct Responder<'a> {
    pack: &'a RulePack,
    tagger: &'a dyn PosTagger,
    chooser: Box<dyn ChooseTemplate>,
}

impl Responder<'static> {
    /// Built-in pack and tagger with an unseeded chooser.
    pub fn new() -> Self {
        Self::with_parts(
            rules::pack(),
            tagger::builtin(),
            Box::new(RngChooser::unseeded()),
        )
    }
}

impl Default for Responder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Responder<'a> {
    pub fn with_parts(
        pack: &'a RulePack,
        tagger: &'a dyn PosTagger,
        chooser: Box<dyn ChooseTemplate>,
    ) -> Self {
        Responder {
            pack,
            tagger,
            chooser,
        }
    }

    /// Produce a reply for one utterance.
    pub fn respond(&mut self, input: &str) -> String {
        let pack = self.pack;
        for rule in &pack.rules {
            if !rule.is_match(input) {
                continue;
            }
            let template = &rule.templates[self.chooser.choose(rule.templates.len())];
            if !template.contains(PLACEHOLDER) {
                return template.clone();
            }
            let capture = match rule.capture(input) {
                Some(text) => text,
                None => return ELABORATE.to_string(),
            };
            let fragment = self.rewrite(capture, rule.first_person);
            return template.replace(PLACEHOLDER, &fragment);
        }
        self.fallback(input)
    }

    /// Rewrite a captured fragment into the responder's voice: swap
    /// perspective, adapt "I am …" rules for mood, rejoin clitics, trim.
    fn rewrite(&self, capture: &str, first_person: bool) -> String {
        let mut text = pronouns::swap_perspective(capture);
        if first_person {
            // The capture lost its "I am" head to the pattern; restore it so
            // the mood adapter sees the full statement.
            text = mood::adapt(&format!("I am {text}"), self.tagger);
        }
        let text = contractions::attach(&text);
        simplify::simplify(&text, self.tagger)
    }

    /// No rule matched: rewrite the whole utterance and drop it into one of
    /// the fallback templates.
    fn fallback(&mut self, input: &str) -> String {
        let mut text = pronouns::swap_perspective(input);
        if starts_first_person(input) {
            text = mood::adapt(&text, self.tagger);
        }
        let text = contractions::attach(&text);
        let text = simplify::simplify(&text, self.tagger);
        let pack = self.pack;
        let template = &pack.fallback[self.chooser.choose(pack.fallback.len())];
        template.replace(PLACEHOLDER, &text)
    }
}

fn starts_first_person(input: &str) -> bool {
    let lowered = input.to_lowercase();
    lowered.starts_with("i am") || lowered.starts_with("i'm")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Chooser pinned to one index, clamped to the list.
    struct Fixed(usize);

    impl ChooseTemplate for Fixed {
        fn choose(&mut self, len: usize) -> usize {
            self.0.min(len - 1)
        }
    }

    fn respond_with(template_index: usize, input: &str) -> String {
        let mut responder = Responder::with_parts(
            rules::pack(),
            tagger::builtin(),
            Box::new(Fixed(template_index)),
        );
        responder.respond(input)
    }

    #[test]
    fn test_first_person_adjective_reply() {
        assert_eq!(respond_with(2, "I am poor"), "Do you enjoy feeling poor?");
    }

    #[test]
    fn test_first_person_article_reply() {
        assert_eq!(
            respond_with(1, "I am a doctor"),
            "How do you feel about being a doctor?"
        );
    }

    #[test]
    fn test_capture_is_inserted() {
        assert_eq!(
            respond_with(0, "I'm afraid of spiders"),
            "Why are you afraid of spiders?"
        );
    }

    #[test]
    fn test_plain_template_returned_verbatim() {
        assert_eq!(respond_with(1, "hello"), "Hi there, how are you today?");
    }

    #[test]
    fn test_topic_rule_ignores_capture() {
        assert_eq!(respond_with(0, "My job is hard"), "Tell me more about your job.");
    }

    #[test]
    fn test_question_rule_wins_over_keyword_rule() {
        assert_eq!(respond_with(0, "Is there a problem?"), "Why do you ask that?");
    }

    #[test]
    fn test_first_listed_duplicate_wins() {
        // Both "I want (.*)" rules match; only the earlier one has a fourth
        // template, so drawing index 3 proves which rule fired.
        assert_eq!(
            respond_with(3, "I want a break"),
            "I see. And what does that tell you?"
        );
    }

    #[test]
    fn test_second_person_capture_swaps_back() {
        assert_eq!(
            respond_with(0, "You are mean to me"),
            "Why do you think I am mean to you?"
        );
    }

    #[test]
    fn test_capture_mid_template() {
        assert_eq!(
            respond_with(3, "Because I said so"),
            "If you said so, what else must be true?"
        );
    }

    #[test]
    fn test_unmatched_input_uses_fallback() {
        assert_eq!(respond_with(0, "xyz123"), "Why do you say xyz123?");
    }

    #[test]
    fn test_fallback_swaps_bare_i_am() {
        assert_eq!(respond_with(0, "I am"), "Why do you say you are?");
    }

    #[test]
    fn test_fallback_rejoins_contraction() {
        assert_eq!(respond_with(1, "I'm"), "you're?");
    }

    #[test]
    fn test_placeholder_without_capture_apologizes() {
        let pack = rules::parse_pack(
            "rules:\n  - pattern: \"Hello\"\n    templates: [\"Hi {0}\"]\nfallback: [\"{0}?\"]\n",
        )
        .unwrap();
        let mut responder =
            Responder::with_parts(&pack, tagger::builtin(), Box::new(Fixed(0)));
        assert_eq!(responder.respond("hello there"), ELABORATE);
    }

    #[test]
    fn test_seeded_responses_are_reproducible() {
        let inputs = ["I am tired of this", "my mother hates me", "can you help me?"];
        let run = || {
            let mut responder = Responder::with_parts(
                rules::pack(),
                tagger::builtin(),
                Box::new(RngChooser::seeded(42)),
            );
            inputs
                .iter()
                .map(|input| responder.respond(input))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_default_responder_always_answers() {
        let mut responder = Responder::new();
        for input in ["I am happy", "tell me about dreams", "zzz"] {
            assert!(!responder.respond(input).is_empty(), "no reply for {input:?}");
        }
    }
}
