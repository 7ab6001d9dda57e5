use tracing::info;

use crate::error::GenerationError;
use crate::llm::{TextGenerator, build_jd_prompt};
use crate::models::WorkflowState;

/// Execute Stage 2: job description analysis
pub async fn execute_jd_analyzer(
    generator: &dyn TextGenerator,
    state: &WorkflowState,
) -> Result<WorkflowState, GenerationError> {
    info!("Stage 2: Analyzing JD ({} chars)...", state.jd_text().len());

    let prompt = build_jd_prompt(state.jd_text());
    let summary = generator.generate(&prompt).await?;

    info!("Stage 2: JD analyzed ({} summary chars)", summary.len());

    Ok(state.with_jd_analyzed(summary))
}
