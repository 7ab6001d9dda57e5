pub mod config;
pub mod error;
pub mod io;
pub mod llm;
pub mod models;
pub mod stages;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use config::{LlmConfig, ScreeningConfig};
pub use error::{ExtractionError, GenerationError, ReportError, ScreeningError};
pub use io::{DocumentExtractor, FileTextExtractor, format_summary, write_report_csv};
pub use llm::{GroqClient, TextGenerator, parse_match_response};
pub use models::{
    CandidateProfile, CandidateReport, MatchAssessment, NextStep, ParseFallback, StepLog,
    StepName, WorkflowState, next_step,
};
pub use workflow::{ScreeningOutcome, WorkflowRun, run_screening, run_workflow, screen_texts};
