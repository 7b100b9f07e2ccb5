//! Record extraction: builds populated `ResumeRecord` / `JobRecord` values
//! from raw document text. The scoring engine consumes the finished records
//! and never re-enters this layer.

pub mod contact;
pub mod document;
pub mod skills;

use std::sync::OnceLock;

use regex::Regex;

use crate::models::job::{JobMeta, JobRecord};
use crate::models::resume::{ExperienceEntry, ResumeMeta, ResumeRecord};
use crate::normalize::{normalize, NormalizeOptions};
use crate::scoring::document::{inspect, HeadingSets};
use crate::scoring::skills::resolve;
use crate::vocabulary::ControlledVocabulary;

/// Assembles a résumé record: contact fields from the raw text, then
/// normalization, skill resolution, and document signals on the cleaned text.
pub fn build_resume_record(
    raw_text: &str,
    source_file_name: Option<String>,
    vocab: &ControlledVocabulary,
    options: NormalizeOptions,
) -> ResumeRecord {
    let contact = contact::extract(raw_text);
    let experience_entries = detect_experience_entries(raw_text);

    let cleaned = normalize(raw_text, options);
    let terms = skills::extract_skill_terms(&cleaned, vocab);
    let resolved = resolve(&terms, vocab);
    let signals = inspect(&cleaned, &HeadingSets::default());

    ResumeRecord {
        raw_text: cleaned,
        skills: resolved,
        contact,
        experience_entries,
        meta: ResumeMeta {
            length: signals.length,
            has_education_heading: signals.has_education_heading,
            has_experience_heading: signals.has_experience_heading,
        },
        source_file_name,
    }
}

/// Assembles a job record. The education requirement is read off the JD the
/// same way the résumé's education heading is detected.
pub fn build_job_record(
    raw_text: &str,
    vocab: &ControlledVocabulary,
    options: NormalizeOptions,
) -> JobRecord {
    let cleaned = normalize(raw_text, options);
    let terms = skills::extract_skill_terms(&cleaned, vocab);
    let resolved = resolve(&terms, vocab);
    let signals = inspect(&cleaned, &HeadingSets::default());

    JobRecord {
        raw_text: cleaned,
        skills: resolved,
        meta: JobMeta {
            requires_education: signals.has_education_heading,
        },
    }
}

fn year_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:19|20)\d{2}\s*(?:-|–|—|to)\s*(?:(?:19|20)\d{2}|present|current|now)\b")
            .expect("valid year range regex")
    })
}

/// Work-history detection on the raw text: a line carrying a year range
/// ("2019 - 2023", "2020 to present") is taken as one experience entry.
/// Only the count participates in scoring, so false negatives on exotic
/// date formats cost one checklist point, nothing more.
pub fn detect_experience_entries(raw_text: &str) -> Vec<ExperienceEntry> {
    raw_text
        .lines()
        .filter(|line| year_range_re().is_match(line))
        .map(|line| ExperienceEntry {
            snippet: line.trim().to_string(),
        })
        .collect()
}
