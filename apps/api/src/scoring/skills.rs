//! Skill resolution and overlap scoring.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::report::ScoreBreakdown;
use crate::vocabulary::ControlledVocabulary;

/// Filters raw extracted terms against the controlled vocabulary.
/// Terms are lowercased; only recognized skills survive; duplicates collapse.
/// Input order is irrelevant and an empty input is not an error.
pub fn resolve(raw_terms: &[String], vocab: &ControlledVocabulary) -> BTreeSet<String> {
    raw_terms
        .iter()
        .map(|term| term.to_lowercase())
        .filter(|term| vocab.contains(term))
        .collect()
}

/// Set-overlap counts between the résumé's and the job's resolved skills.
/// `total` is the number of job-side skills; a job with no listed skills
/// yields `{0,0,0}` and consumers guard the division (see `composite::ratio`).
pub fn compare(resume_skills: &BTreeSet<String>, job_skills: &BTreeSet<String>) -> ScoreBreakdown {
    let exists = job_skills.intersection(resume_skills).count() as u32;
    ScoreBreakdown::from_counts(exists, job_skills.len() as u32)
}

/// Display flags for one skill in the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillComparison {
    pub wanted: bool,
    pub present_in_resume: bool,
}

/// Builds the per-skill display table over the union of both skill sets.
///
/// Labeling matches the historical report, quirk included: a skill listed by
/// the job is always recorded as `{wanted: true, present_in_resume: false}`,
/// even when the candidate holds it — the flag pair distinguishes
/// "required" from "held-but-not-required", not candidate coverage. The
/// table feeds only the skill-frequency report, which depends on today's
/// labeling, so it is preserved rather than reconciled with `compare`.
pub fn comparison_table(
    resume_skills: &BTreeSet<String>,
    job_skills: &BTreeSet<String>,
) -> BTreeMap<String, SkillComparison> {
    let mut table = BTreeMap::new();

    for skill in resume_skills {
        table.insert(
            skill.clone(),
            SkillComparison {
                wanted: job_skills.contains(skill),
                present_in_resume: true,
            },
        );
    }

    for skill in job_skills {
        table.insert(
            skill.clone(),
            SkillComparison {
                wanted: true,
                present_in_resume: false,
            },
        );
    }

    table
}
