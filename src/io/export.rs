//! Read/write parsed reports.
//!
//! Report JSON is the "portable" representation of one evaluation:
//! - the structured report (score, lists, profile, recommendations)
//! - submission metadata (timestamp, job position)
//! - the raw section mapping and any parse warnings
//!
//! The schema is defined by `domain::ReportFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::ReportFile;
use crate::error::AppError;

/// Write a parsed report to a JSON file.
pub fn write_report_json(path: &Path, report: &ReportFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::internal(format!(
            "Failed to create report JSON '{}': {e}",
            path.display()
        ))
    })?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::internal(format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

/// Read a previously exported report JSON file.
pub fn read_report_json(path: &Path) -> Result<ReportFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::internal(format!(
            "Failed to open report JSON '{}': {e}",
            path.display()
        ))
    })?;
    let report: ReportFile = serde_json::from_reader(file)
        .map_err(|e| AppError::internal(format!("Invalid report JSON: {e}")))?;
    Ok(report)
}

/// Read a raw report text file for offline parsing (`cvscan parse`).
pub fn read_report_text(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|e| {
        AppError::internal(format!(
            "Failed to read report text '{}': {e}",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EvaluationReport, Score};

    #[test]
    fn report_json_round_trips() {
        let path = std::env::temp_dir().join(format!("cvscan_export_test_{}.json", std::process::id()));

        let report = ReportFile {
            tool: "cvscan".to_string(),
            submitted_at: "2025-06-01T12:00:00+00:00".to_string(),
            job_position: "Platform Engineer".to_string(),
            report: EvaluationReport {
                score: Some(Score {
                    numerator: 7.5,
                    denominator: 10,
                }),
                ..Default::default()
            },
        };

        write_report_json(&path, &report).unwrap();
        let loaded = read_report_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.job_position, "Platform Engineer");
        assert_eq!(loaded.report.score, report.report.score);
    }

    #[test]
    fn missing_raw_report_is_an_internal_error() {
        let err = read_report_text(Path::new("no_such_report.md")).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
