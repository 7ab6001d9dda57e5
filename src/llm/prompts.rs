/// Build the resume extraction prompt
pub fn build_resume_prompt(resume_text: &str) -> String {
    format!(
        r#"You are an HR assistant. Extract key information from this resume:
- Skills
- Experience (in years)
- Education
- Certifications

Resume:
{resume_text}"#
    )
}

/// Build the job description analysis prompt
pub fn build_jd_prompt(jd_text: &str) -> String {
    format!(
        r#"You are an HR assistant. Analyze the job description and extract:
- Required skills
- Experience level
- Educational background

JD:
{jd_text}"#
    )
}

/// Build the match scoring prompt.
///
/// The response template here is the contract the response parser relies
/// on: a `Match Score:` line followed by `Strengths:` and `Weaknesses:`
/// sections of dash bullets.
pub fn build_match_prompt(resume_text: &str, jd_text: &str) -> String {
    format!(
        r#"Compare the Resume & JD, give output EXACTLY in this structure:

Match Score: <ONLY NUMBER 0-100>

Strengths:
- <strength>
- <strength>

Weaknesses:
- <weakness>
- <weakness>

Resume: {resume_text}
JD: {jd_text}"#
    )
}
