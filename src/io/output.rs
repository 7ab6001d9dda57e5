use std::fs::File;
use std::path::Path;

use crate::error::ReportError;
use crate::models::{CandidateReport, MatchAssessment};

/// Write the report as a single-row CSV, replacing any existing file
pub fn write_report_csv(path: &Path, report: &CandidateReport) -> Result<(), ReportError> {
    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.serialize(report)?;
    writer.flush().map_err(io_error)?;
    Ok(())
}

/// Read back a report written by [`write_report_csv`]
#[cfg(test)]
pub fn read_report_csv(path: &Path) -> Result<Vec<CandidateReport>, ReportError> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<CandidateReport>, _>>()?;
    Ok(rows)
}

/// Human-readable rendering of a finished screening
pub fn format_summary(report: &CandidateReport, assessment: &MatchAssessment) -> String {
    let mut output = String::new();

    output.push_str(&format!("Candidate: {}\n", report.name));
    output.push_str(&format!("Email: {}\n", report.email));
    output.push_str(&format!("Mobile: {}\n", report.mobile));
    output.push_str(&format!("Education: {}\n", report.education));
    output.push('\n');
    output.push_str(&format!("Match Score: {}\n", report.match_score));
    output.push_str(&format!("Strengths: {}\n", report.strengths));
    output.push_str(&format!("Weaknesses: {}\n", report.weaknesses));

    if assessment.low_confidence() {
        output.push_str(&format!(
            "\nWarning: response did not follow the template ({:?}); defaults were used\n",
            assessment.fallbacks
        ));
    }

    output
}
