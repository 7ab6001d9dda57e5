use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::config::ScreeningConfig;
use crate::error::{GenerationError, ScreeningError};
use crate::io::DocumentExtractor;
use crate::llm::TextGenerator;
use crate::models::{CandidateReport, MatchAssessment, NextStep, StepLog, StepName, WorkflowState};
use crate::stages::{
    execute_jd_analyzer, execute_match_scorer, execute_report, execute_resume_parser,
};

/// Final state of the step sequence plus the supervisor's decisions
#[derive(Debug, Clone)]
pub struct WorkflowRun {
    pub state: WorkflowState,
    pub step_log: Vec<StepLog>,
}

/// Everything a caller gets back from a completed screening
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningOutcome {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    /// Trimmed text of the scoring response
    pub raw_result: String,
    pub report_path: PathBuf,
    pub report: CandidateReport,
    pub assessment: MatchAssessment,
    /// Set when the scoring response missed a template label
    pub low_confidence: bool,
    pub step_log: Vec<StepLog>,
}

/// Drive the state through every step until the sequencer reports Terminal.
///
/// The supervisor consults only the completed-step set. Any generation
/// failure stops the run immediately and is returned tagged with the step
/// that raised it.
pub async fn run_workflow(
    generator: &dyn TextGenerator,
    initial: WorkflowState,
) -> Result<WorkflowRun, ScreeningError> {
    let mut state = initial;
    let mut step_log = Vec::new();

    loop {
        let decision = state.current_step();
        info!("Supervisor: {}", decision.supervisor_message());
        step_log.push(StepLog::for_decision(decision));

        let NextStep::Run(step) = decision else {
            break;
        };

        state = run_step(generator, step, &state)
            .await
            .map_err(|source| ScreeningError::step(step, source))?;
    }

    Ok(WorkflowRun { state, step_log })
}

async fn run_step(
    generator: &dyn TextGenerator,
    step: StepName,
    state: &WorkflowState,
) -> Result<WorkflowState, GenerationError> {
    match step {
        StepName::ResumeParser => execute_resume_parser(generator, state).await,
        StepName::JDAnalyzer => execute_jd_analyzer(generator, state).await,
        StepName::MatchScorer => execute_match_scorer(generator, state).await,
    }
}

/// Screen already-extracted document texts and write the report
pub async fn screen_texts(
    generator: &dyn TextGenerator,
    resume_text: &str,
    jd_text: &str,
    config: &ScreeningConfig,
) -> Result<ScreeningOutcome, ScreeningError> {
    let run_id = Uuid::new_v4();
    let span = info_span!("screening", %run_id);

    screen_in_span(generator, run_id, resume_text, jd_text, config)
        .instrument(span)
        .await
}

async fn screen_in_span(
    generator: &dyn TextGenerator,
    run_id: Uuid,
    resume_text: &str,
    jd_text: &str,
    config: &ScreeningConfig,
) -> Result<ScreeningOutcome, ScreeningError> {
    let started_at = Utc::now();
    let run = run_workflow(generator, WorkflowState::new(resume_text, jd_text)).await?;
    let rendered = execute_report(&run.state, config)?;

    let assessment = run
        .state
        .assessment()
        .cloned()
        .ok_or(ScreeningError::Incomplete(StepName::MatchScorer))?;

    info!(
        "Screening complete: score {}, report {:?}",
        assessment.match_score(),
        rendered.path
    );

    Ok(ScreeningOutcome {
        run_id,
        started_at,
        finished_at: Utc::now(),
        score: assessment.match_score(),
        strengths: assessment.strengths.clone(),
        weaknesses: assessment.weaknesses.clone(),
        raw_result: run.state.result_text().to_string(),
        report_path: rendered.path,
        report: rendered.report,
        low_confidence: assessment.low_confidence(),
        assessment,
        step_log: run.step_log,
    })
}

/// Extract both documents, then screen them.
///
/// Extraction failures abort before any step runs.
pub async fn run_screening(
    generator: &dyn TextGenerator,
    extractor: &dyn DocumentExtractor,
    resume_source: &Path,
    jd_source: &Path,
    config: &ScreeningConfig,
) -> Result<ScreeningOutcome, ScreeningError> {
    info!("Loading resume from {:?}", resume_source);
    let resume_text = extractor.extract_text(resume_source)?;

    info!("Loading job description from {:?}", jd_source);
    let jd_text = extractor.extract_text(jd_source)?;

    screen_texts(generator, &resume_text, &jd_text, config).await
}
