//! ATS Bullet Rewriter. Normalizes one achievement line toward ATS conventions:
//! leading action verb, a quantifier where one can be inferred, bounded length.

use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::keywords::{
    ACTION_VERBS, CONTEXT_VERB_TRIGGERS, FALLBACK_VERB, QUANTIFIERS, VERB_TRIGGERS,
};
use crate::analysis::{capitalize_first, has_digit};

pub const MAX_BULLET_CHARS: usize = 120;
const ELLIPSIS: &str = "...";

fn vague_amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b(?:many|several|various)\b").expect("valid regex"))
}

/// Rewrites a single achievement line. Total over all input strings.
pub fn rewrite_bullet(text: &str, context: Option<&str>) -> String {
    let mut bullet = text.trim().to_string();

    if !starts_with_action_verb(&bullet) {
        let verb = select_verb(&bullet, context);
        bullet = if bullet.is_empty() {
            verb.to_string()
        } else {
            format!("{verb} {bullet}")
        };
    }

    if !has_digit(&bullet) {
        if let Some(quantifier) = select_quantifier(&bullet) {
            bullet = vague_amount_pattern()
                .replace_all(&bullet, quantifier)
                .into_owned();
        }
    }

    truncate_chars(&capitalize_first(&bullet), MAX_BULLET_CHARS)
}

/// True when the first word is a recognized action verb, ignoring case.
fn starts_with_action_verb(bullet: &str) -> bool {
    let first_word = bullet
        .split(|c: char| !c.is_alphabetic())
        .next()
        .unwrap_or_default();
    ACTION_VERBS
        .iter()
        .any(|verb| verb.eq_ignore_ascii_case(first_word))
}

fn select_verb(text: &str, context: Option<&str>) -> &'static str {
    let text_lower = text.to_lowercase();
    for (triggers, verb) in VERB_TRIGGERS {
        if triggers.iter().any(|t| text_lower.contains(t)) {
            return *verb;
        }
    }

    if let Some(context) = context {
        let context_lower = context.to_lowercase();
        for (trigger, verb) in CONTEXT_VERB_TRIGGERS {
            if context_lower.contains(trigger) {
                return *verb;
            }
        }
    }

    FALLBACK_VERB
}

fn select_quantifier(bullet: &str) -> Option<&'static str> {
    let lower = bullet.to_lowercase();
    QUANTIFIERS
        .iter()
        .find(|(mentions, _)| mentions.iter().any(|m| lower.contains(m)))
        .map(|(_, quantifier)| *quantifier)
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max - ELLIPSIS.len();
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_verb_is_kept_regardless_of_case() {
        let out = rewrite_bullet("led a team of people", Some("team"));
        assert!(out.starts_with("Led"), "got {out}");
        assert_eq!(out, "Led a team of people");
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let inputs = [
            "led a team of people",
            "handled many projects for the team",
            "cut cloud spend",
            "",
            "stuff happened",
        ];
        for input in inputs {
            let once = rewrite_bullet(input, Some("team"));
            let twice = rewrite_bullet(&once, Some("team"));
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_verb_sniffing_order() {
        assert_eq!(
            rewrite_bullet("the team shipped weekly", None),
            "Managed the team shipped weekly"
        );
        assert_eq!(
            rewrite_bullet("new onboarding flow created", None),
            "Developed new onboarding flow created"
        );
        assert_eq!(rewrite_bullet("cut costs by 15%", None), "Reduced cut costs by 15%");
        assert_eq!(
            rewrite_bullet("checkout page design", None),
            "Designed checkout page design"
        );
    }

    #[test]
    fn test_context_fallback_then_accomplished() {
        assert_eq!(
            rewrite_bullet("quarterly report", Some("Project work")),
            "Managed quarterly report"
        );
        assert_eq!(
            rewrite_bullet("quarterly report", Some("backend development")),
            "Developed quarterly report"
        );
        assert_eq!(
            rewrite_bullet("quarterly report", None),
            "Accomplished quarterly report"
        );
    }

    #[test]
    fn test_quantifier_substitution() {
        assert_eq!(
            rewrite_bullet("Managed several engineers on the team", None),
            "Managed team of 5+ members engineers on the team"
        );
        assert_eq!(
            rewrite_bullet("Increased sales across various regions", None),
            "Increased sales across 20%+ regions"
        );
        assert_eq!(
            rewrite_bullet("Improved efficiency in many workflows", None),
            "Improved efficiency in 30%+ workflows"
        );
    }

    #[test]
    fn test_quantifier_skipped_when_digit_present() {
        assert_eq!(
            rewrite_bullet("Managed 4 engineers and many contractors on the team", None),
            "Managed 4 engineers and many contractors on the team"
        );
    }

    #[test]
    fn test_quantifier_only_replaces_whole_words() {
        assert_eq!(
            rewrite_bullet("Managed the team office in Germany", None),
            "Managed the team office in Germany"
        );
    }

    #[test]
    fn test_long_input_is_truncated_with_ellipsis() {
        let long = "x".repeat(250);
        let out = rewrite_bullet(&long, None);
        assert_eq!(out.chars().count(), MAX_BULLET_CHARS);
        assert!(out.ends_with("..."));
        assert!(out.starts_with("Accomplished"));
    }

    #[test]
    fn test_long_multibyte_input_is_truncated_by_chars() {
        let long = "é".repeat(300);
        let out = rewrite_bullet(&long, None);
        assert!(out.chars().count() <= MAX_BULLET_CHARS);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(rewrite_bullet("", None), "Accomplished");
        assert_eq!(rewrite_bullet("   ", Some("team")), "Led");
    }

    #[test]
    fn test_first_letter_capitalized() {
        assert_eq!(
            rewrite_bullet("improved onboarding", None),
            "Improved onboarding"
        );
    }
}
