//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory between the parser and the renderers
//! - exported to JSON for downstream tooling
//! - reloaded later for re-rendering

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One resume submission: the file plus the two free-text job fields.
///
/// `job_position` and `job_description` may be empty; only the file is
/// required and validated before a request goes out.
#[derive(Debug, Clone, Default)]
pub struct SubmitRequest {
    pub file: PathBuf,
    pub job_position: String,
    pub job_description: String,
}

/// A match score parsed from the report, e.g. `7.5/10`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub numerator: f64,
    pub denominator: u32,
}

impl Score {
    /// Percentage used for the gauge. A zero denominator yields 0.0 rather
    /// than infinity; the parser records a warning for that case.
    pub fn percent(&self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        self.numerator / f64::from(self.denominator) * 100.0
    }

    /// Display string, e.g. `"7.5/10"`. Whole numerators print without a
    /// trailing `.0`.
    pub fn display(&self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }
}

/// One bullet item from a strengths/weaknesses list.
///
/// `label` is present when the fragment matched the `label: detail` pattern;
/// otherwise the whole fragment lands in `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
}

impl BulletItem {
    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }
}

/// A titled group of sub-items inside the profile summary,
/// e.g. `**Education:** *BSc ... *MSc ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightGroup {
    pub title: String,
    pub items: Vec<String>,
}

/// The "Candidate Profile Summary" section: an intro paragraph followed by
/// titled groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub intro: String,
    pub groups: Vec<HighlightGroup>,
}

/// The "Recommendations" section: an intro line and numbered items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub intro: String,
    pub items: Vec<String>,
}

/// Structured form of one evaluation report.
///
/// The parser never fails; absent or malformed sections degrade to `None` /
/// empty collections, and anything suspicious (duplicate section titles,
/// zero score denominator) is surfaced in `warnings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub score: Option<Score>,
    pub strengths: Vec<BulletItem>,
    pub weaknesses: Vec<BulletItem>,
    pub profile: ProfileSummary,
    pub recommendations: Recommendations,
    /// Raw title -> body mapping for every non-score section.
    pub sections: BTreeMap<String, String>,
    pub warnings: Vec<String>,
}

impl EvaluationReport {
    /// Gauge percentage; 0.0 when no score was parsed.
    pub fn score_percent(&self) -> f64 {
        self.score.map(|s| s.percent()).unwrap_or(0.0)
    }

    /// Score display string; `"N/A"` when no score was parsed.
    pub fn score_display(&self) -> String {
        self.score
            .map(|s| s.display())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// On-disk export schema for a parsed report (`cvscan submit --export`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFile {
    pub tool: String,
    /// RFC 3339 local timestamp of the submission (or parse, for offline runs).
    pub submitted_at: String,
    pub job_position: String,
    pub report: EvaluationReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_display_drops_trailing_zero() {
        let s = Score {
            numerator: 7.0,
            denominator: 10,
        };
        assert_eq!(s.display(), "7/10");

        let s = Score {
            numerator: 7.5,
            denominator: 10,
        };
        assert_eq!(s.display(), "7.5/10");
    }

    #[test]
    fn score_percent_handles_zero_denominator() {
        let s = Score {
            numerator: 5.0,
            denominator: 0,
        };
        assert_eq!(s.percent(), 0.0);
    }

    #[test]
    fn report_defaults_to_na_score() {
        let report = EvaluationReport::default();
        assert_eq!(report.score_display(), "N/A");
        assert_eq!(report.score_percent(), 0.0);
    }
}
