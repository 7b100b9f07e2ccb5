//! Surface-level document heuristics: canonical section headings, length,
//! and per-skill frequency counts.
//!
//! Heading detection is intentionally crude: case-insensitive substring
//! containment anywhere in the text, no layout parsing. An incidental
//! mention of "degree" counts as an education heading. Known limitation,
//! kept for parity with the historical checks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring::skills::SkillComparison;

const EDUCATION_HEADINGS: &[&str] = &["education", "degree"];
const EXPERIENCE_HEADINGS: &[&str] = &["experience", "work experience"];

/// Keyword sets used for heading detection. Defaults to the canonical
/// English sets; tests inject their own.
#[derive(Debug, Clone, Copy)]
pub struct HeadingSets<'a> {
    pub education: &'a [&'a str],
    pub experience: &'a [&'a str],
}

impl Default for HeadingSets<'_> {
    fn default() -> Self {
        Self {
            education: EDUCATION_HEADINGS,
            experience: EXPERIENCE_HEADINGS,
        }
    }
}

/// Signals read off one document's normalized text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DocumentSignals {
    pub has_education_heading: bool,
    pub has_experience_heading: bool,
    /// Character count of the normalized text.
    pub length: usize,
}

/// Inspects a normalized text block for heading keywords and length.
pub fn inspect(text: &str, headings: &HeadingSets<'_>) -> DocumentSignals {
    let lower = text.to_lowercase();
    DocumentSignals {
        has_education_heading: contains_any(&lower, headings.education),
        has_experience_heading: contains_any(&lower, headings.experience),
        length: text.chars().count(),
    }
}

fn contains_any(lower_text: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|kw| lower_text.contains(&kw.to_lowercase()))
}

/// Per-skill usage row in the frequency report: occurrence counts in both
/// texts plus the display flags carried over from the comparison table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillUsage {
    pub resume_count: usize,
    pub job_count: usize,
    pub wanted: bool,
    pub present_in_resume: bool,
}

/// Counts case-insensitive occurrences of every table skill in the résumé
/// and job texts. Plain substring counting — "java" also hits "javascript";
/// same crude-match caveat as heading detection.
pub fn skill_frequencies(
    table: &BTreeMap<String, SkillComparison>,
    resume_text: &str,
    job_text: &str,
) -> BTreeMap<String, SkillUsage> {
    let resume_lower = resume_text.to_lowercase();
    let job_lower = job_text.to_lowercase();

    table
        .iter()
        .map(|(skill, flags)| {
            let needle = skill.to_lowercase();
            (
                skill.clone(),
                SkillUsage {
                    resume_count: count_occurrences(&resume_lower, &needle),
                    job_count: count_occurrences(&job_lower, &needle),
                    wanted: flags.wanted,
                    present_in_resume: flags.present_in_resume,
                },
            )
        })
        .collect()
}

/// Non-overlapping substring occurrence count.
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}
