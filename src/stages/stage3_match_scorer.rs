use tracing::{info, warn};

use crate::error::GenerationError;
use crate::llm::{TextGenerator, build_match_prompt, parse_match_response};
use crate::models::{MatchAssessment, WorkflowState};

/// Execute Stage 3: match scoring
///
/// Sends both raw documents to the model with the fixed response template,
/// then parses the reply. A reply that ignores the template still completes
/// the step with default values.
pub async fn execute_match_scorer(
    generator: &dyn TextGenerator,
    state: &WorkflowState,
) -> Result<WorkflowState, GenerationError> {
    info!("Stage 3: Scoring resume against JD...");

    let assessment = score(generator, state.resume_text(), state.jd_text()).await?;

    if assessment.low_confidence() {
        warn!(
            "Stage 3: Response missed template labels, using defaults: {:?}",
            assessment.fallbacks
        );
    }
    info!(
        "Stage 3: Match score {} ({} strengths, {} weaknesses)",
        assessment.match_score(),
        assessment.strengths.len(),
        assessment.weaknesses.len()
    );

    Ok(state.with_match_scored(assessment))
}

/// Score a resume against a job description
pub async fn score(
    generator: &dyn TextGenerator,
    resume_text: &str,
    jd_text: &str,
) -> Result<MatchAssessment, GenerationError> {
    let prompt = build_match_prompt(resume_text, jd_text);
    let response = generator.generate(&prompt).await?;
    Ok(parse_match_response(&response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateProfile, ParseFallback};
    use crate::testing::ScriptedGenerator;

    fn ready_state() -> WorkflowState {
        WorkflowState::new("resume", "jd")
            .with_resume_parsed("r".to_string(), CandidateProfile::default())
            .with_jd_analyzed("j".to_string())
    }

    #[tokio::test]
    async fn test_match_scorer_reaches_terminal() {
        let generator = ScriptedGenerator::new([
            "  Match Score: 82\n\nStrengths:\n- Strong Python\n- Good communication\n\nWeaknesses:\n- No cloud experience\n",
        ]);

        let next = execute_match_scorer(&generator, &ready_state()).await.unwrap();

        assert!(next.is_terminal());
        let assessment = next.assessment().unwrap();
        assert_eq!(assessment.match_score(), 82);
        assert_eq!(assessment.strengths_joined(), "Strong Python | Good communication");
        assert_eq!(assessment.weaknesses_joined(), "No cloud experience");
        assert!(next.result_text().starts_with("Match Score: 82"));
    }

    #[tokio::test]
    async fn test_match_scorer_sends_raw_documents() {
        let generator = ScriptedGenerator::new(["Match Score: 1"]);
        execute_match_scorer(&generator, &ready_state()).await.unwrap();

        assert!(generator.prompts()[0].ends_with("Resume: resume\nJD: jd"));
    }

    #[tokio::test]
    async fn test_off_template_reply_completes_with_defaults() {
        let generator = ScriptedGenerator::new(["The candidate looks great overall."]);

        let next = execute_match_scorer(&generator, &ready_state()).await.unwrap();

        assert!(next.is_terminal());
        let assessment = next.assessment().unwrap();
        assert_eq!(assessment.match_score(), 0);
        assert_eq!(assessment.strengths_joined(), "None");
        assert_eq!(assessment.weaknesses_joined(), "None");
        assert_eq!(
            assessment.fallbacks,
            vec![
                ParseFallback::MissingScore,
                ParseFallback::MissingStrengths,
                ParseFallback::MissingWeaknesses
            ]
        );
    }

    #[tokio::test]
    async fn test_match_scorer_propagates_failure() {
        let generator = ScriptedGenerator::failing_at(0);
        let state = ready_state();

        assert!(execute_match_scorer(&generator, &state).await.is_err());
        assert!(!state.is_terminal());
    }
}
