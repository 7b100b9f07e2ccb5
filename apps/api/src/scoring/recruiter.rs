//! Recruiter-facing heuristics: a small fixed set of binary checks.
//!
//! Each heuristic is a named unit in `HEURISTICS`, so any single check can be
//! replaced without touching the aggregation. Three of the four are
//! deliberate constant placeholders — they must stay constants until the real
//! signal lands, so historical scores remain reproducible.

use serde::{Deserialize, Serialize};

use crate::models::report::ScoreBreakdown;
use crate::models::resume::ResumeRecord;

/// A résumé longer than this (normalized characters) reads as unfocused.
const CONCISE_LENGTH_LIMIT: usize = 1000;

/// One named heuristic: its report label and its evaluation function.
struct Heuristic {
    name: &'static str,
    evaluate: fn(&ResumeRecord) -> bool,
}

const HEURISTICS: &[Heuristic] = &[
    Heuristic {
        name: "concise_length",
        evaluate: concise_length,
    },
    Heuristic {
        name: "measurable_results",
        evaluate: measurable_results,
    },
    Heuristic {
        name: "avoid_words_absent",
        evaluate: avoid_words_absent,
    },
    Heuristic {
        name: "job_level_match",
        evaluate: job_level_match,
    },
];

fn concise_length(resume: &ResumeRecord) -> bool {
    resume.meta.length < CONCISE_LENGTH_LIMIT
}

// TODO: replace the constant with a quantified-impact scan over experience
// bullets (digits / % / currency), mirroring the skills frequency counter.
fn measurable_results(_resume: &ResumeRecord) -> bool {
    true
}

// TODO: replace the constant with a weak-verb/cliché list check once the
// avoid-word list is agreed with the recruiting team.
fn avoid_words_absent(_resume: &ResumeRecord) -> bool {
    false
}

// TODO: replace the constant with seniority inference from experience-entry
// count and date ranges.
fn job_level_match(_resume: &ResumeRecord) -> bool {
    true
}

/// One heuristic's outcome, named for the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecruiterFinding {
    pub heuristic: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecruiterAssessment {
    pub breakdown: ScoreBreakdown,
    pub findings: Vec<RecruiterFinding>,
}

/// Evaluates every heuristic against the résumé. `total` is always the size
/// of the fixed heuristic table (currently 4).
pub fn score(resume: &ResumeRecord) -> RecruiterAssessment {
    let findings: Vec<RecruiterFinding> = HEURISTICS
        .iter()
        .map(|h| RecruiterFinding {
            heuristic: h.name.to_string(),
            passed: (h.evaluate)(resume),
        })
        .collect();

    let breakdown = ScoreBreakdown::from_checks(findings.iter().map(|f| f.passed));
    RecruiterAssessment {
        breakdown,
        findings,
    }
}
