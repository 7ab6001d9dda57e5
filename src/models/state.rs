use std::collections::BTreeSet;

use serde::Serialize;

use super::{CandidateProfile, MatchAssessment, NextStep, StepName, next_step};

/// The value threaded through every step of a screening run.
///
/// Steps never mutate a state in place: each one takes the current value and
/// returns a successor with its own step name added to the completed set.
/// The completed set only ever grows, and the current position is always
/// derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowState {
    resume_text: String,
    jd_text: String,
    completed_steps: BTreeSet<StepName>,
    result_text: String,
    resume_summary: Option<String>,
    jd_summary: Option<String>,
    profile: Option<CandidateProfile>,
    assessment: Option<MatchAssessment>,
}

impl WorkflowState {
    /// Fresh state for one screening request
    pub fn new(resume_text: impl Into<String>, jd_text: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            jd_text: jd_text.into(),
            completed_steps: BTreeSet::new(),
            result_text: String::new(),
            resume_summary: None,
            jd_summary: None,
            profile: None,
            assessment: None,
        }
    }

    pub fn resume_text(&self) -> &str {
        &self.resume_text
    }

    pub fn jd_text(&self) -> &str {
        &self.jd_text
    }

    pub fn completed_steps(&self) -> &BTreeSet<StepName> {
        &self.completed_steps
    }

    /// Output of the most recent step
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn resume_summary(&self) -> Option<&str> {
        self.resume_summary.as_deref()
    }

    pub fn jd_summary(&self) -> Option<&str> {
        self.jd_summary.as_deref()
    }

    pub fn profile(&self) -> Option<&CandidateProfile> {
        self.profile.as_ref()
    }

    pub fn assessment(&self) -> Option<&MatchAssessment> {
        self.assessment.as_ref()
    }

    pub fn current_step(&self) -> NextStep {
        next_step(&self.completed_steps)
    }

    pub fn is_terminal(&self) -> bool {
        self.current_step().is_terminal()
    }

    pub fn is_completed(&self, step: StepName) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Successor after the resume parser ran
    pub fn with_resume_parsed(&self, summary: String, profile: CandidateProfile) -> Self {
        let mut next = self.complete(StepName::ResumeParser, summary.clone());
        next.resume_summary = Some(summary);
        next.profile = Some(profile);
        next
    }

    /// Successor after the job description analyzer ran
    pub fn with_jd_analyzed(&self, summary: String) -> Self {
        let mut next = self.complete(StepName::JDAnalyzer, summary.clone());
        next.jd_summary = Some(summary);
        next
    }

    /// Successor after the match scorer ran
    pub fn with_match_scored(&self, assessment: MatchAssessment) -> Self {
        let mut next = self.complete(StepName::MatchScorer, assessment.raw.clone());
        next.assessment = Some(assessment);
        next
    }

    fn complete(&self, step: StepName, result_text: String) -> Self {
        let mut next = self.clone();
        next.completed_steps.insert(step);
        next.result_text = result_text;
        next
    }
}
