use std::path::PathBuf;

use tracing::info;

use crate::config::ScreeningConfig;
use crate::error::ScreeningError;
use crate::io::write_report_csv;
use crate::models::{CandidateReport, NextStep, StepName, WorkflowState};

/// Result of Stage 4 rendering
#[derive(Debug)]
pub struct ReportResult {
    pub report: CandidateReport,
    pub path: PathBuf,
}

/// Execute Stage 4: report assembly
///
/// Flattens the finished state into one report row and writes it as CSV.
/// Only a terminal state carries every field the row needs.
pub fn execute_report(
    state: &WorkflowState,
    config: &ScreeningConfig,
) -> Result<ReportResult, ScreeningError> {
    if let NextStep::Run(step) = state.current_step() {
        return Err(ScreeningError::Incomplete(step));
    }

    let profile = state
        .profile()
        .ok_or(ScreeningError::Incomplete(StepName::ResumeParser))?;
    let assessment = state
        .assessment()
        .ok_or(ScreeningError::Incomplete(StepName::MatchScorer))?;

    let report = CandidateReport::from_parts(profile, assessment);

    info!("Writing report to {:?}", config.report_path);
    write_report_csv(&config.report_path, &report)?;

    Ok(ReportResult {
        report,
        path: config.report_path.clone(),
    })
}
