use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One unit of work in the fixed screening sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StepName {
    /// Summarize the resume and pull out contact fields
    ResumeParser,
    /// Summarize the job description requirements
    JDAnalyzer,
    /// Score the resume against the job description
    MatchScorer,
}

impl StepName {
    /// All steps, in execution order
    pub const ALL: [StepName; 3] = [
        StepName::ResumeParser,
        StepName::JDAnalyzer,
        StepName::MatchScorer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepName::ResumeParser => "ResumeParser",
            StepName::JDAnalyzer => "JDAnalyzer",
            StepName::MatchScorer => "MatchScorer",
        }
    }
}

impl fmt::Display for StepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the sequencer points after looking at the completed steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextStep {
    Run(StepName),
    Terminal,
}

impl NextStep {
    pub fn is_terminal(&self) -> bool {
        matches!(self, NextStep::Terminal)
    }

    /// Message the supervisor reports when it routes to this position
    pub fn supervisor_message(&self) -> &'static str {
        match self {
            NextStep::Run(StepName::ResumeParser) => "Starting with resume parsing.",
            NextStep::Run(StepName::JDAnalyzer) => "Resume parsed. Now analyzing JD.",
            NextStep::Run(StepName::MatchScorer) => "JD analyzed. Now scoring match.",
            NextStep::Terminal => "All steps completed.",
        }
    }
}

impl fmt::Display for NextStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextStep::Run(step) => write!(f, "{step}"),
            NextStep::Terminal => f.write_str("Terminal"),
        }
    }
}

/// Decide which step runs next.
///
/// The order is fixed: the first step of [`StepName::ALL`] not yet in
/// `completed`, or [`NextStep::Terminal`] once all three have run. Only the
/// membership of `completed` matters, never any step output.
pub fn next_step(completed: &BTreeSet<StepName>) -> NextStep {
    StepName::ALL
        .into_iter()
        .find(|step| !completed.contains(step))
        .map_or(NextStep::Terminal, NextStep::Run)
}
