use tracing::info;

use crate::error::GenerationError;
use crate::llm::{TextGenerator, build_resume_prompt};
use crate::models::{CandidateProfile, WorkflowState};

/// Execute Stage 1: resume parsing
///
/// 1. Ask the model for a free-text summary of the resume
/// 2. Pull contact fields out of the raw text with fixed patterns
///
/// The summary is stored verbatim; nothing about its shape is checked.
pub async fn execute_resume_parser(
    generator: &dyn TextGenerator,
    state: &WorkflowState,
) -> Result<WorkflowState, GenerationError> {
    info!("Stage 1: Parsing resume ({} chars)...", state.resume_text().len());

    let prompt = build_resume_prompt(state.resume_text());
    let summary = generator.generate(&prompt).await?;
    let profile = CandidateProfile::from_resume_text(state.resume_text());

    info!(
        "Stage 1: Resume parsed (candidate {}, {} summary chars)",
        profile.name,
        summary.len()
    );

    Ok(state.with_resume_parsed(summary, profile))
}
