//! Formatted terminal output for an evaluation report.
//!
//! The gauge is intentionally "dumb" (fixed-width character bar), optimized
//! for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)

use crate::domain::{BulletItem, EvaluationReport};

/// Width of the ASCII score gauge in characters.
const GAUGE_WIDTH: usize = 40;

/// Format the full dashboard: score gauge, strengths/weaknesses, profile
/// highlights, recommendations, and any parse warnings.
pub fn format_report(report: &EvaluationReport) -> String {
    let mut out = String::new();

    out.push_str("=== Resume Evaluation ===\n\n");

    out.push_str(&format!(
        "Overall Match Score: {} ({:.1}%)\n",
        report.score_display(),
        report.score_percent()
    ));
    out.push_str(&render_gauge(report.score_percent(), GAUGE_WIDTH));
    out.push('\n');

    out.push_str("\nStrengths:\n");
    out.push_str(&format_bullets(&report.strengths, '+'));
    out.push_str("\nWeaknesses:\n");
    out.push_str(&format_bullets(&report.weaknesses, '-'));

    out.push_str("\nProfile Highlights:\n");
    if !report.profile.intro.is_empty() {
        out.push_str(&format!("{}\n", report.profile.intro));
    }
    for group in &report.profile.groups {
        out.push_str(&format!("  {}:\n", group.title));
        for item in &group.items {
            out.push_str(&format!("    * {item}\n"));
        }
    }

    out.push_str("\nRecommendations:\n");
    if !report.recommendations.intro.is_empty() {
        out.push_str(&format!("{}\n", report.recommendations.intro));
    }
    for (idx, item) in report.recommendations.items.iter().enumerate() {
        out.push_str(&format!("  {}. {item}\n", idx + 1));
    }

    if !report.warnings.is_empty() {
        out.push_str("\nWarnings:\n");
        for warning in &report.warnings {
            out.push_str(&format!("  ! {warning}\n"));
        }
    }

    out
}

/// Render a fixed-width gauge bar, e.g. `[##########----------] 50.0%`.
///
/// The fill is clamped to 0-100%; the printed percentage is the raw value.
pub fn render_gauge(percent: f64, width: usize) -> String {
    let width = width.max(4);
    let clamped = percent.clamp(0.0, 100.0);
    let filled = (clamped / 100.0 * width as f64).round() as usize;

    let mut out = String::with_capacity(width + 10);
    out.push('[');
    for i in 0..width {
        out.push(if i < filled { '#' } else { '-' });
    }
    out.push(']');
    out.push_str(&format!(" {percent:.1}%"));
    out
}

fn format_bullets(items: &[BulletItem], marker: char) -> String {
    if items.is_empty() {
        return "  (none)\n".to_string();
    }

    let mut out = String::new();
    for item in items {
        match &item.label {
            Some(label) => out.push_str(&format!("  {marker} {label}: {}\n", item.text)),
            None => out.push_str(&format!("  {marker} {}\n", item.text)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Recommendations, Score};

    #[test]
    fn gauge_is_clamped_and_deterministic() {
        assert_eq!(render_gauge(0.0, 10), "[----------] 0.0%");
        assert_eq!(render_gauge(50.0, 10), "[#####-----] 50.0%");
        assert_eq!(render_gauge(100.0, 10), "[##########] 100.0%");
        // Overflowing percentages fill the bar but print the raw value.
        assert_eq!(render_gauge(150.0, 10), "[##########] 150.0%");
    }

    #[test]
    fn report_without_score_shows_na() {
        let out = format_report(&EvaluationReport::default());
        assert!(out.contains("Overall Match Score: N/A (0.0%)"));
        assert!(out.contains("(none)"));
    }

    #[test]
    fn recommendations_are_numbered_from_one() {
        let report = EvaluationReport {
            score: Some(Score {
                numerator: 7.5,
                denominator: 10,
            }),
            recommendations: Recommendations {
                intro: "Intro text".to_string(),
                items: vec!["Do X".to_string(), "Do Y".to_string()],
            },
            ..Default::default()
        };
        let out = format_report(&report);
        assert!(out.contains("Overall Match Score: 7.5/10 (75.0%)"));
        assert!(out.contains("  1. Do X\n  2. Do Y\n"));
    }

    #[test]
    fn labeled_and_plain_bullets_render() {
        let items = vec![
            BulletItem::labeled("Rust", "solid"),
            BulletItem::plain("Fast learner"),
        ];
        let out = format_bullets(&items, '+');
        assert_eq!(out, "  + Rust: solid\n  + Fast learner\n");
    }
}
