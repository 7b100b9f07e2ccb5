//! Engine entry point: runs every sub-scorer over a pair of records and
//! assembles the immutable `MatchReport`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::models::report::ScoreBreakdown;
use crate::models::resume::ResumeRecord;
use crate::scoring::ats::{self, AtsFinding};
use crate::scoring::composite::{CompositeInputs, WeightPreset};
use crate::scoring::document::{self, SkillUsage};
use crate::scoring::recruiter::{self, RecruiterFinding};
use crate::scoring::{lexical, skills};

/// Per-category count breakdowns behind the composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScores {
    pub skills: ScoreBreakdown,
    pub ats: ScoreBreakdown,
    pub recruiter: ScoreBreakdown,
}

/// Full scoring output for one résumé/job pair. Constructed fresh per
/// request, immutable once returned, never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Composite match percentage in [0, 100].
    pub total_score: u32,
    /// Name of the weighting preset that produced `total_score`.
    pub preset: String,
    /// Lexical similarity percentage in [0, 100], 2 decimal places.
    pub lexical_similarity: f64,
    pub scores: CategoryScores,
    /// Per-skill frequency/comparison table over the union of both skill sets.
    pub skill_report: BTreeMap<String, SkillUsage>,
    pub ats_findings: Vec<AtsFinding>,
    pub recruiter_findings: Vec<RecruiterFinding>,
    pub generated_at: DateTime<Utc>,
}

/// Scores one résumé against one job description.
///
/// Inputs are read-only; each stage derives new values. A pair of records
/// with no text on either side is malformed and rejected with a single
/// `InvalidInput`; partial or garbage scores are never returned.
pub fn score_match(
    resume: &ResumeRecord,
    job: &JobRecord,
    preset: WeightPreset,
) -> Result<MatchReport, AppError> {
    if resume.raw_text.trim().is_empty() && job.raw_text.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "resume and job description are both empty".to_string(),
        ));
    }

    let skill_score = skills::compare(&resume.skills, &job.skills);
    let table = skills::comparison_table(&resume.skills, &job.skills);
    let skill_report = document::skill_frequencies(&table, &resume.raw_text, &job.raw_text);

    let lexical_similarity = lexical::similarity(&resume.raw_text, &job.raw_text);

    let ats_assessment = ats::score(
        resume,
        job,
        &skill_score,
        resume.source_file_name.as_deref(),
    );
    let recruiter_assessment = recruiter::score(resume);

    let total_score = preset.total_score(&CompositeInputs {
        skills: skill_score,
        ats: ats_assessment.breakdown,
        recruiter: recruiter_assessment.breakdown,
        lexical_similarity,
    });

    Ok(MatchReport {
        total_score,
        preset: preset.name().to_string(),
        lexical_similarity,
        scores: CategoryScores {
            skills: skill_score,
            ats: ats_assessment.breakdown,
            recruiter: recruiter_assessment.breakdown,
        },
        skill_report,
        ats_findings: ats_assessment.findings,
        recruiter_findings: recruiter_assessment.findings,
        generated_at: Utc::now(),
    })
}
