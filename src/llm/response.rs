use std::sync::LazyLock;

use regex::Regex;

use crate::models::{MatchAssessment, ParseFallback};

pub const STRENGTHS_LABEL: &str = "Strengths:";
pub const WEAKNESSES_LABEL: &str = "Weaknesses:";

static SCORE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Match Score:\s*([0-9]+)").unwrap());

static BULLET_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"- (.*)").unwrap());

/// Parse a scoring response into typed fields.
///
/// Matching is literal and order-sensitive:
/// - the score is the first integer directly after `Match Score:`;
/// - strengths are bullets between the first `Strengths:` and the next
///   `Strengths:` or `Weaknesses:`, whichever comes first;
/// - weaknesses are bullets between the first `Weaknesses:` and the next
///   `Weaknesses:` or end of text.
///
/// A bullet is `- ` followed by the rest of the line, wherever it occurs on
/// the line. Missing labels never fail the parse; they are recorded as
/// [`ParseFallback`]s and the field is left empty.
pub fn parse_match_response(text: &str) -> MatchAssessment {
    let raw = text.trim();
    let mut fallbacks = Vec::new();

    let score = SCORE_PATTERN
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok());
    if score.is_none() {
        fallbacks.push(ParseFallback::MissingScore);
    }

    let strengths = match section_after(raw, STRENGTHS_LABEL) {
        Some(section) => {
            let section = section.split(WEAKNESSES_LABEL).next().unwrap_or(section);
            bullets(section)
        }
        None => {
            fallbacks.push(ParseFallback::MissingStrengths);
            Vec::new()
        }
    };

    let weaknesses = match section_after(raw, WEAKNESSES_LABEL) {
        Some(section) => bullets(section),
        None => {
            fallbacks.push(ParseFallback::MissingWeaknesses);
            Vec::new()
        }
    };

    MatchAssessment {
        raw: raw.to_string(),
        score,
        strengths,
        weaknesses,
        fallbacks,
    }
}

/// Text between the first and second occurrence of `label`
fn section_after<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    text.split(label).nth(1)
}

fn bullets(section: &str) -> Vec<String> {
    BULLET_PATTERN
        .captures_iter(section)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
