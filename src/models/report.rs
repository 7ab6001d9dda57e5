use serde::{Deserialize, Serialize};

use super::{CandidateProfile, MatchAssessment, NextStep};

/// One row of the candidate match report.
///
/// Field order is the column order of the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateReport {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Mobile")]
    pub mobile: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Experience Gap")]
    pub experience_gap: String,
    #[serde(rename = "Match Score")]
    pub match_score: String,
    #[serde(rename = "Strengths")]
    pub strengths: String,
    #[serde(rename = "Weaknesses")]
    pub weaknesses: String,
}

impl CandidateReport {
    #[cfg(test)]
    pub const HEADER: [&'static str; 8] = [
        "Name",
        "Mobile",
        "Email",
        "Education",
        "Experience Gap",
        "Match Score",
        "Strengths",
        "Weaknesses",
    ];

    /// Flatten the final profile and assessment into a report row
    pub fn from_parts(profile: &CandidateProfile, assessment: &MatchAssessment) -> Self {
        Self {
            name: profile.name.clone(),
            mobile: profile.phone.clone(),
            email: profile.email.clone(),
            education: profile.education.clone(),
            experience_gap: profile.experience_gap.clone(),
            match_score: assessment.match_score().to_string(),
            strengths: assessment.strengths_joined(),
            weaknesses: assessment.weaknesses_joined(),
        }
    }
}

/// A routing decision recorded by the supervisor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepLog {
    pub step: NextStep,
    pub message: String,
}

impl StepLog {
    pub fn for_decision(step: NextStep) -> Self {
        Self {
            step,
            message: step.supervisor_message().to_string(),
        }
    }
}
