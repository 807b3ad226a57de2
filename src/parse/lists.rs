//! Bullet-list and sub-section parsing.
//!
//! The remote service marks list items with bare `*` characters (not proper
//! markdown bullets) and labels them as `label: detail`, optionally bolded.
//! Profile groups are `-`-delimited with a `**title:** detail` header, and
//! recommendations are numbered `1. `-style items.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{BulletItem, HighlightGroup, ProfileSummary, Recommendations};

use super::strip_bold;

static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\*\*|)(.+?):\s*(?:\*\*|)(.*)").unwrap());
static STRENGTHS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*\*Strengths:\*\*\s*(.*?)\s*\*\*Weaknesses:\*\*").unwrap());
static WEAKNESSES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*\*Weaknesses:\*\*\s*(.*)").unwrap());
static GROUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?):\*\*\s*(.*)").unwrap());
static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\s").unwrap());

/// Split the "Strengths and Weaknesses" body into its two halves.
///
/// Strengths run from the `**Strengths:**` marker up to `**Weaknesses:**`;
/// weaknesses run from `**Weaknesses:**` to the end. A missing marker leaves
/// that half empty.
pub fn split_strengths_weaknesses(body: &str) -> (String, String) {
    let strengths = STRENGTHS_RE
        .captures(body)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();
    let weaknesses = WEAKNESSES_RE
        .captures(body)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();
    (strengths, weaknesses)
}

/// Parse a `*`-delimited bullet list.
///
/// Each non-empty fragment is matched against `label: detail`; fragments
/// without the pattern become plain items.
pub fn parse_bullet_items(text: &str) -> Vec<BulletItem> {
    text.split('*')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| match ITEM_RE.captures(fragment) {
            Some(caps) => BulletItem::labeled(caps[1].trim(), caps[2].trim()),
            None => BulletItem::plain(fragment),
        })
        .collect()
}

/// Parse the "Candidate Profile Summary" body.
///
/// Text before the first `-` is the intro paragraph. Each following
/// `-`-delimited chunk must match `**title:** detail` to become a group;
/// chunks that do not match are dropped. Group details split on `*` into
/// sub-items.
pub fn parse_profile_summary(body: &str) -> ProfileSummary {
    let mut parts = body.split('-');
    let intro = parts.next().unwrap_or("").trim().to_string();

    let mut groups = Vec::new();
    for part in parts {
        let Some(caps) = GROUP_RE.captures(part) else {
            continue;
        };
        let title = caps[1].trim().to_string();
        let items: Vec<String> = caps[2]
            .split('*')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();
        groups.push(HighlightGroup { title, items });
    }

    ProfileSummary { intro, groups }
}

/// Parse the "Recommendations" body.
///
/// The first line (bold stripped) is the intro; the rest is bold-stripped and
/// split on `<digits>. ` markers. Whatever precedes the first numbered item
/// is discarded, and the remaining fragments are the ordered items.
pub fn parse_recommendations(body: &str) -> Recommendations {
    let intro = strip_bold(body.lines().next().unwrap_or(""))
        .trim()
        .to_string();

    let stripped = strip_bold(body);
    let items: Vec<String> = NUMBERED_RE
        .split(&stripped)
        .skip(1)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    Recommendations { intro, items }
}
