//! Composite match calculation: combines sub-scores into one bounded
//! percentage under a named weighting preset.
//!
//! The two historical aggregation policies live behind one tagged union so
//! future weighting schemes are additive — callers select a preset at
//! startup (`MATCH_PRESET`), they never re-derive weights.

use serde::{Deserialize, Serialize};

use crate::models::report::ScoreBreakdown;

/// Multiplier applied to each component of the lexical-weighted preset.
const LEXICAL_COMPONENT_BOOST: f64 = 1.3;
/// A component whose raw ratio reaches 1.0 is discounted to this value: a
/// perfect skill match alone is suspicious, and similarity 100 means the job
/// description was pasted verbatim as the résumé.
const PERFECT_RATIO_DISCOUNT: f64 = 0.1;
/// Ceiling on the lexical-weighted total before scaling to a percentage.
const LEXICAL_TOTAL_CAP: f64 = 0.95;

/// Weights of the composite-ats preset.
const ATS_PRESET_SKILL_WEIGHT: f64 = 0.5;
const ATS_PRESET_CHECKS_WEIGHT: f64 = 0.25;
const ATS_PRESET_RECRUITER_WEIGHT: f64 = 0.25;

/// Everything a preset may weigh.
#[derive(Debug, Clone, Copy)]
pub struct CompositeInputs {
    pub skills: ScoreBreakdown,
    pub ats: ScoreBreakdown,
    pub recruiter: ScoreBreakdown,
    /// Lexical similarity percentage in [0, 100].
    pub lexical_similarity: f64,
}

/// Named weighting preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightPreset {
    /// Skills ratio and lexical similarity only, boosted ×1.3 each, with the
    /// perfect-ratio anti-gaming discount and a 0.95 total cap. Range [0, 95].
    LexicalWeighted,
    /// Skills 50% + ATS checklist 25% + recruiter heuristics 25%. Range [0, 100].
    CompositeAts,
}

impl WeightPreset {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lexical-weighted" => Some(Self::LexicalWeighted),
            "composite-ats" => Some(Self::CompositeAts),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LexicalWeighted => "lexical-weighted",
            Self::CompositeAts => "composite-ats",
        }
    }

    /// Combines the sub-scores into the final percentage.
    pub fn total_score(&self, inputs: &CompositeInputs) -> u32 {
        match self {
            Self::LexicalWeighted => lexical_weighted(inputs),
            Self::CompositeAts => composite_ats(inputs),
        }
    }
}

fn lexical_weighted(inputs: &CompositeInputs) -> u32 {
    let skills = boosted_component(ratio(&inputs.skills));
    let words = boosted_component(inputs.lexical_similarity / 100.0);

    let total = (skills + words).min(LEXICAL_TOTAL_CAP);
    (total * 100.0).round() as u32
}

/// Boost a raw ratio, discounting perfect ratios instead of rewarding them.
fn boosted_component(raw: f64) -> f64 {
    if raw >= 1.0 {
        PERFECT_RATIO_DISCOUNT
    } else {
        raw * LEXICAL_COMPONENT_BOOST
    }
}

fn composite_ats(inputs: &CompositeInputs) -> u32 {
    let total = ratio(&inputs.skills) * ATS_PRESET_SKILL_WEIGHT
        + ratio(&inputs.ats) * ATS_PRESET_CHECKS_WEIGHT
        + ratio(&inputs.recruiter) * ATS_PRESET_RECRUITER_WEIGHT;
    (total * 100.0).round() as u32
}

/// Zero-guarded ratio: a breakdown with `total == 0` scores 0 rather than
/// dividing by zero.
pub fn ratio(breakdown: &ScoreBreakdown) -> f64 {
    if breakdown.total == 0 {
        0.0
    } else {
        f64::from(breakdown.exists) / f64::from(breakdown.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        skills: (u32, u32),
        ats: (u32, u32),
        recruiter: (u32, u32),
        lexical: f64,
    ) -> CompositeInputs {
        CompositeInputs {
            skills: ScoreBreakdown::from_counts(skills.0, skills.1),
            ats: ScoreBreakdown::from_counts(ats.0, ats.1),
            recruiter: ScoreBreakdown::from_counts(recruiter.0, recruiter.1),
            lexical_similarity: lexical,
        }
    }

    #[test]
    fn test_ratio_guards_zero_denominator() {
        assert_eq!(ratio(&ScoreBreakdown::empty()), 0.0);
    }

    #[test]
    fn test_ratio_plain_division() {
        assert_eq!(ratio(&ScoreBreakdown::from_counts(1, 4)), 0.25);
    }

    #[test]
    fn test_preset_names_round_trip() {
        for preset in [WeightPreset::LexicalWeighted, WeightPreset::CompositeAts] {
            assert_eq!(WeightPreset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(WeightPreset::from_name("bogus"), None);
    }

    #[test]
    fn test_lexical_weighted_boosts_partial_components() {
        // skills 2/4 = 0.5 → 0.65; words 50/100 = 0.5 → 0.65; total 1.3 → capped 0.95.
        let score = WeightPreset::LexicalWeighted.total_score(&inputs((2, 4), (0, 0), (0, 0), 50.0));
        assert_eq!(score, 95);
    }

    #[test]
    fn test_lexical_weighted_discounts_perfect_similarity() {
        // Identical texts: words component collapses to 0.1.
        let score = WeightPreset::LexicalWeighted.total_score(&inputs((1, 4), (0, 0), (0, 0), 100.0));
        // skills 0.25 → 0.325; words → 0.1; total 0.425 → 43.
        assert_eq!(score, 43);
    }

    #[test]
    fn test_lexical_weighted_discounts_perfect_skill_match() {
        let score = WeightPreset::LexicalWeighted.total_score(&inputs((3, 3), (0, 0), (0, 0), 0.0));
        // skills ratio 1.0 → 0.1; words 0 → 0; total 0.1 → 10.
        assert_eq!(score, 10);
    }

    #[test]
    fn test_lexical_weighted_never_exceeds_95() {
        let score = WeightPreset::LexicalWeighted.total_score(&inputs((9, 10), (0, 0), (0, 0), 99.0));
        assert_eq!(score, 95);
    }

    #[test]
    fn test_lexical_weighted_zero_skill_total_still_defined() {
        // Job listed no skills: ratio resolves to 0, score comes from words alone.
        let score = WeightPreset::LexicalWeighted.total_score(&inputs((0, 0), (0, 0), (0, 0), 40.0));
        // words 0.4 → 0.52 → 52.
        assert_eq!(score, 52);
    }

    #[test]
    fn test_composite_ats_weighted_sum() {
        // 0.5*1 + 0.25*0.5 + 0.25*0.5 = 0.75 → 75.
        let score = WeightPreset::CompositeAts.total_score(&inputs((2, 2), (4, 8), (2, 4), 0.0));
        assert_eq!(score, 75);
    }

    #[test]
    fn test_composite_ats_is_bounded_by_100() {
        let score = WeightPreset::CompositeAts.total_score(&inputs((5, 5), (11, 11), (4, 4), 100.0));
        assert_eq!(score, 100);
    }

    #[test]
    fn test_composite_ats_all_zero_denominators() {
        let score = WeightPreset::CompositeAts.total_score(&inputs((0, 0), (0, 0), (0, 0), 0.0));
        assert_eq!(score, 0);
    }

    #[test]
    fn test_composite_ats_ignores_lexical_similarity() {
        let with = WeightPreset::CompositeAts.total_score(&inputs((1, 2), (4, 8), (2, 4), 90.0));
        let without = WeightPreset::CompositeAts.total_score(&inputs((1, 2), (4, 8), (2, 4), 0.0));
        assert_eq!(with, without);
    }
}
