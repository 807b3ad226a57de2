//! Markdown evaluation-report parser.
//!
//! The webhook returns a markdown-ish report whose conventions are defined by
//! the remote service, not by us: sections separated by horizontal rules,
//! a `<n>/<m>` match score, `*`-delimited bullet lists, and `-`-delimited
//! profile groups. The grammar is undocumented and brittle by construction,
//! so all of it is isolated here and each section type is unit-tested on its
//! own.
//!
//! The parser is a pure one-shot transform and never fails: sections that do
//! not match the expected titles are carried verbatim in the section mapping,
//! and malformed sub-patterns degrade to empty or partial structures.
//! Anything suspicious (duplicate titles, a zero score denominator) is
//! recorded as a warning instead of an error.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{EvaluationReport, Score};

pub mod lists;

/// Section titles the renderer knows how to display structurally.
/// Matched case-sensitively and exactly; everything else stays raw.
pub const TITLE_STRENGTHS_WEAKNESSES: &str = "Strengths and Weaknesses";
pub const TITLE_PROFILE_SUMMARY: &str = "Candidate Profile Summary";
pub const TITLE_RECOMMENDATIONS: &str = "Recommendations";

/// Delimiter between report sections: a markdown horizontal rule on its own line.
const SECTION_DELIMITER: &str = "\n---\n";

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#+ (.+)").unwrap());
static SCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\.?\d*)/(\d+)").unwrap());

/// One delimiter-separated chunk of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

/// Parse raw webhook text into a structured report.
///
/// Deterministic and stateless: the same input always yields the same output.
pub fn parse_report(text: &str) -> EvaluationReport {
    let mut score: Option<Score> = None;
    let mut sections: BTreeMap<String, String> = BTreeMap::new();
    let mut warnings: Vec<String> = Vec::new();

    for chunk in text.split(SECTION_DELIMITER) {
        let section = split_heading(chunk);

        // Any section whose title mentions "Score" is the score section; it is
        // consumed here and never enters the raw mapping.
        if section.title.contains("Score") {
            if let Some(parsed) = parse_score(&section.body) {
                if parsed.denominator == 0 {
                    warnings.push(format!(
                        "Score '{}' has a zero denominator; treating as 0%.",
                        parsed.display()
                    ));
                }
                score = Some(parsed);
            }
            continue;
        }

        if sections
            .insert(section.title.clone(), section.body)
            .is_some()
        {
            warnings.push(format!(
                "Duplicate section title '{}'; keeping the last occurrence.",
                section.title
            ));
        }
    }

    let sw_body = sections
        .get(TITLE_STRENGTHS_WEAKNESSES)
        .map(String::as_str)
        .unwrap_or("");
    let (strengths_half, weaknesses_half) = lists::split_strengths_weaknesses(sw_body);

    let profile_body = sections
        .get(TITLE_PROFILE_SUMMARY)
        .map(String::as_str)
        .unwrap_or("");
    let recommendations_body = sections
        .get(TITLE_RECOMMENDATIONS)
        .map(String::as_str)
        .unwrap_or("");

    EvaluationReport {
        score,
        strengths: lists::parse_bullet_items(&strengths_half),
        weaknesses: lists::parse_bullet_items(&weaknesses_half),
        profile: lists::parse_profile_summary(profile_body),
        recommendations: lists::parse_recommendations(recommendations_body),
        sections,
        warnings,
    }
}

/// Split one chunk into heading and body.
///
/// The first line (after trimming the chunk) is the heading; a heading is a
/// run of `#` followed by text, with emphasis markers stripped from the
/// title. Chunks without a recognizable heading become "Untitled Section".
pub fn split_heading(chunk: &str) -> Section {
    let trimmed = chunk.trim();
    let mut lines = trimmed.lines();
    let first = lines.next().unwrap_or("").trim();
    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    let title = HEADING_RE
        .captures(first)
        .map(|c| strip_emphasis(&c[1]))
        .unwrap_or_else(|| "Untitled Section".to_string());

    Section { title, body }
}

/// Extract a `<number>/<number>` score from a section body. The numerator may
/// carry a decimal point. Absent or unparseable patterns yield `None`.
pub fn parse_score(body: &str) -> Option<Score> {
    let caps = SCORE_RE.captures(body)?;
    let numerator = caps[1].parse::<f64>().ok()?;
    let denominator = caps[2].parse::<u32>().ok()?;
    Some(Score {
        numerator,
        denominator,
    })
}

/// Remove all markdown emphasis markers (`**` and `*`).
pub fn strip_emphasis(s: &str) -> String {
    s.chars().filter(|&c| c != '*').collect()
}

/// Remove bold markers (`**`) only, leaving single `*` untouched.
pub fn strip_bold(s: &str) -> String {
    s.replace("**", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
## **Overall Match Score**\n\
The candidate scores 7.5/10 for this role.\n\
---\n\
## Strengths and Weaknesses\n\
**Strengths:** *Rust: deep systems experience *Testing: strong habits **Weaknesses:** *Frontend: limited exposure\n\
---\n\
## Candidate Profile Summary\n\
A seasoned backend engineer.\n\
- **Education:** *BSc Computer Science *MSc Distributed Systems\n\
- **Experience:** 6 years in backend roles\n\
---\n\
## Recommendations\n\
**Next steps** for the candidate:\n\
1. Build a small frontend project\n\
2. Contribute to an open source UI library\n";

    #[test]
    fn parses_decimal_score() {
        let report = parse_report(SAMPLE);
        let score = report.score.unwrap();
        assert_eq!(score.numerator, 7.5);
        assert_eq!(score.denominator, 10);
        assert_eq!(report.score_display(), "7.5/10");
        assert_eq!(report.score_percent(), 75.0);
    }

    #[test]
    fn missing_score_defaults_to_na() {
        let report = parse_report("## Strengths and Weaknesses\nnothing here");
        assert!(report.score.is_none());
        assert_eq!(report.score_display(), "N/A");
        assert_eq!(report.score_percent(), 0.0);
    }

    #[test]
    fn splits_strengths_and_weaknesses() {
        let report = parse_report(SAMPLE);
        assert_eq!(report.strengths.len(), 2);
        assert_eq!(report.strengths[0].label.as_deref(), Some("Rust"));
        assert_eq!(report.strengths[0].text, "deep systems experience");
        assert_eq!(report.strengths[1].label.as_deref(), Some("Testing"));
        assert_eq!(report.weaknesses.len(), 1);
        assert_eq!(report.weaknesses[0].label.as_deref(), Some("Frontend"));
        assert_eq!(report.weaknesses[0].text, "limited exposure");
    }

    #[test]
    fn parses_profile_groups() {
        let report = parse_report(SAMPLE);
        assert_eq!(report.profile.intro, "A seasoned backend engineer.");
        assert_eq!(report.profile.groups.len(), 2);
        assert_eq!(report.profile.groups[0].title, "Education");
        assert_eq!(
            report.profile.groups[0].items,
            vec!["BSc Computer Science", "MSc Distributed Systems"]
        );
        assert_eq!(report.profile.groups[1].title, "Experience");
        assert_eq!(report.profile.groups[1].items, vec!["6 years in backend roles"]);
    }

    #[test]
    fn parses_numbered_recommendations() {
        let report = parse_report(SAMPLE);
        assert_eq!(report.recommendations.intro, "Next steps for the candidate:");
        assert_eq!(
            report.recommendations.items,
            vec![
                "Build a small frontend project",
                "Contribute to an open source UI library"
            ]
        );
    }

    #[test]
    fn parsing_is_idempotent() {
        let first = parse_report(SAMPLE);
        let second = parse_report(SAMPLE);
        assert_eq!(first, second);
    }

    #[test]
    fn heading_strips_emphasis() {
        let section = split_heading("### **Candidate Profile Summary**\nbody text");
        assert_eq!(section.title, "Candidate Profile Summary");
        assert_eq!(section.body, "body text");
    }

    #[test]
    fn chunk_without_heading_is_untitled() {
        let section = split_heading("just some text\nmore text");
        assert_eq!(section.title, "Untitled Section");
        assert_eq!(section.body, "more text");
    }

    #[test]
    fn duplicate_titles_warn_and_keep_last() {
        let text = "## Recommendations\nfirst\n1. A\n---\n## Recommendations\nsecond\n1. B\n";
        let report = parse_report(text);
        assert_eq!(report.sections["Recommendations"], "second\n1. B");
        assert_eq!(report.recommendations.items, vec!["B"]);
        assert!(report.warnings.iter().any(|w| w.contains("Duplicate")));
    }

    #[test]
    fn zero_denominator_warns_and_gauges_zero() {
        let report = parse_report("## Score\n5/0\n");
        assert_eq!(report.score.unwrap().denominator, 0);
        assert_eq!(report.score_percent(), 0.0);
        assert!(report.warnings.iter().any(|w| w.contains("zero denominator")));
    }

    #[test]
    fn malformed_score_body_is_ignored() {
        let report = parse_report("## Overall Score\nno numbers here\n");
        assert!(report.score.is_none());
        // Score sections never land in the raw mapping, parsed or not.
        assert!(report.sections.is_empty());
    }

    #[test]
    fn unexpected_sections_are_kept_raw() {
        let report = parse_report("## Culture Fit\nGreat fit.\n");
        assert_eq!(report.sections["Culture Fit"], "Great fit.");
        assert!(report.strengths.is_empty());
        assert!(report.recommendations.items.is_empty());
    }
}
