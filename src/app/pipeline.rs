//! Shared "submit pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! webhook submit -> response decode -> report parse
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use chrono::{DateTime, Local};

use crate::domain::{EvaluationReport, ReportFile, SubmitRequest};
use crate::error::AppError;
use crate::parse::parse_report;
use crate::webhook::WebhookClient;

/// All outputs of a single submission (or offline parse).
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Raw report text as returned by the webhook.
    pub raw: String,
    pub report: EvaluationReport,
    pub submitted_at: DateTime<Local>,
}

/// Submit a resume and parse the returned report.
pub fn run_submit(client: &WebhookClient, request: &SubmitRequest) -> Result<RunOutput, AppError> {
    let raw = client.submit(request)?;
    Ok(outcome_from_raw(raw))
}

/// Parse raw report text without any network activity.
///
/// This backs `cvscan parse` and is useful for re-rendering saved responses.
pub fn run_parse(raw: String) -> RunOutput {
    outcome_from_raw(raw)
}

fn outcome_from_raw(raw: String) -> RunOutput {
    let report = parse_report(&raw);
    RunOutput {
        report,
        raw,
        submitted_at: Local::now(),
    }
}

/// Assemble the export schema for a run.
pub fn report_file(run: &RunOutput, job_position: &str) -> ReportFile {
    ReportFile {
        tool: "cvscan".to_string(),
        submitted_at: run.submitted_at.to_rfc3339(),
        job_position: job_position.to_string(),
        report: run.report.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_parse_produces_structured_report() {
        let raw = "## Match Score\n8/10\n---\n## Recommendations\nIntro\n1. A\n".to_string();
        let run = run_parse(raw.clone());
        assert_eq!(run.raw, raw);
        assert_eq!(run.report.score_display(), "8/10");
        assert_eq!(run.report.recommendations.items, vec!["A"]);
    }

    #[test]
    fn report_file_carries_metadata() {
        let run = run_parse(String::new());
        let file = report_file(&run, "Backend Engineer");
        assert_eq!(file.tool, "cvscan");
        assert_eq!(file.job_position, "Backend Engineer");
        assert!(file.report.score.is_none());
    }
}
