use serde::{Deserialize, Serialize};

/// Separator for multi-value report fields
pub const LIST_SEPARATOR: &str = " | ";

/// Stand-in for an empty strengths or weaknesses list
pub const EMPTY_LIST: &str = "None";

/// A default the parser substituted because a label was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFallback {
    /// No `Match Score: <int>` line; score defaulted to 0
    MissingScore,
    /// No `Strengths:` label; strengths defaulted to empty
    MissingStrengths,
    /// No `Weaknesses:` label; weaknesses defaulted to empty
    MissingWeaknesses,
}

/// Structured view of the scoring step's response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchAssessment {
    /// Model response, trimmed
    pub raw: String,
    /// Parsed score, `None` when the label was absent or unparseable
    pub score: Option<u32>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    /// Defaults applied while parsing, in the order they were detected
    #[serde(default)]
    pub fallbacks: Vec<ParseFallback>,
}

impl MatchAssessment {
    /// Score with the silent fallback to 0 applied
    pub fn match_score(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    pub fn strengths_joined(&self) -> String {
        join_or_none(&self.strengths)
    }

    pub fn weaknesses_joined(&self) -> String {
        join_or_none(&self.weaknesses)
    }

    /// True when any field came from a default rather than the response.
    ///
    /// A labelled section with no bullets is not a fallback.
    pub fn low_confidence(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}

/// Join list items with [`LIST_SEPARATOR`], or [`EMPTY_LIST`] when there are none
pub fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        EMPTY_LIST.to_string()
    } else {
        items.join(LIST_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment(score: Option<u32>, strengths: &[&str], weaknesses: &[&str]) -> MatchAssessment {
        MatchAssessment {
            raw: String::new(),
            score,
            strengths: strengths.iter().map(|s| s.to_string()).collect(),
            weaknesses: weaknesses.iter().map(|s| s.to_string()).collect(),
            fallbacks: vec![],
        }
    }

    #[test]
    fn test_join_or_none() {
        assert_eq!(join_or_none(&[]), "None");
        assert_eq!(join_or_none(&["a".to_string()]), "a");
        assert_eq!(
            join_or_none(&["a".to_string(), "b".to_string()]),
            "a | b"
        );
    }

    #[test]
    fn test_match_score_defaults_to_zero() {
        assert_eq!(assessment(None, &[], &[]).match_score(), 0);
        assert_eq!(assessment(Some(73), &[], &[]).match_score(), 73);
    }

    #[test]
    fn test_joined_lists() {
        let a = assessment(Some(50), &["Rust", "Go"], &[]);
        assert_eq!(a.strengths_joined(), "Rust | Go");
        assert_eq!(a.weaknesses_joined(), "None");
        assert!(!a.low_confidence());
    }

    #[test]
    fn test_low_confidence_follows_fallbacks() {
        let mut a = assessment(None, &[], &[]);
        a.fallbacks.push(ParseFallback::MissingScore);
        assert!(a.low_confidence());
    }
}
