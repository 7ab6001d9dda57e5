use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder for any contact field the resume text does not reveal
pub const UNKNOWN: &str = "Unknown";

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]+\s[A-Z][a-z]+").unwrap());

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9+_.-]+@[a-zA-Z0-9.-]+").unwrap());

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[0-9]{10}\b").unwrap());

static DEGREE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:bachelors?|masters?|doctorate|ph\.?d|mba|diploma|b\.?\s?tech|m\.?\s?tech|b\.?\s?sc|m\.?\s?sc|b\.?\s?com|m\.?\s?com|b\.\s?e|m\.\s?e|bca|mca)\b",
    )
    .unwrap()
});

/// Contact and background fields pulled from the raw resume text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    /// Gaps in employment history; the text alone never reveals this
    pub experience_gap: String,
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            email: UNKNOWN.to_string(),
            phone: UNKNOWN.to_string(),
            education: UNKNOWN.to_string(),
            experience_gap: UNKNOWN.to_string(),
        }
    }
}

impl CandidateProfile {
    /// Scan resume text for contact fields.
    ///
    /// Each field takes the first match of its pattern, so a header line
    /// like "Jane Doe, jane@x.com, 9876543210" yields all three contact
    /// fields. Anything not found stays [`UNKNOWN`].
    pub fn from_resume_text(text: &str) -> Self {
        let first = |pattern: &Regex| {
            pattern
                .find(text)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| UNKNOWN.to_string())
        };

        Self {
            name: first(&NAME_PATTERN),
            email: first(&EMAIL_PATTERN),
            phone: first(&PHONE_PATTERN),
            education: find_education_line(text).unwrap_or_else(|| UNKNOWN.to_string()),
            experience_gap: UNKNOWN.to_string(),
        }
    }
}

/// First non-empty line that mentions a degree
fn find_education_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && DEGREE_PATTERN.is_match(line))
        .map(str::to_string)
}
