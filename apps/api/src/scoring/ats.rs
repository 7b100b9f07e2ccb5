//! ATS-style compliance checks: a fixed checklist of binary pass/fail items
//! aggregated into one `ScoreBreakdown`.

use serde::{Deserialize, Serialize};

use crate::models::job::JobRecord;
use crate::models::report::ScoreBreakdown;
use crate::models::resume::ResumeRecord;

/// File extensions ATS pipelines reliably parse.
const RECOGNIZED_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// Characters that trip up automated file handling when present in a name.
const FORBIDDEN_FILE_CHARS: &[char] = &['-', '@', '!', '$', '^', '&', '*'];

/// One named checklist item and its outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsFinding {
    pub check: String,
    pub passed: bool,
}

/// Checklist outcome: the aggregated counts plus the per-item findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsAssessment {
    pub breakdown: ScoreBreakdown,
    pub findings: Vec<AtsFinding>,
}

/// Runs the ATS checklist. Each item contributes exactly 1 to `total` and
/// 0 or 1 to `exists`. The three file-name items apply only when a source
/// file name is known — without one they are excluded from `total` entirely,
/// not counted as failures.
pub fn score(
    resume: &ResumeRecord,
    job: &JobRecord,
    skill_score: &ScoreBreakdown,
    file_name: Option<&str>,
) -> AtsAssessment {
    let mut findings = vec![
        AtsFinding {
            check: "skills_complete".to_string(),
            passed: skill_score.not_exists == 0,
        },
        AtsFinding {
            check: "has_experience".to_string(),
            passed: resume.has_experience(),
        },
        AtsFinding {
            check: "has_email".to_string(),
            passed: resume.contact.email.is_some(),
        },
        AtsFinding {
            check: "has_phone".to_string(),
            passed: resume.contact.phone.is_some(),
        },
        AtsFinding {
            check: "has_name".to_string(),
            passed: resume.contact.name.is_some(),
        },
        AtsFinding {
            check: "education_requirement_met".to_string(),
            passed: !job.meta.requires_education || resume.meta.has_education_heading,
        },
        AtsFinding {
            check: "education_heading_present".to_string(),
            passed: resume.meta.has_education_heading,
        },
        AtsFinding {
            check: "work_heading_present".to_string(),
            passed: resume.meta.has_experience_heading,
        },
    ];

    if let Some(name) = file_name {
        let clean = file_name_clean(name);
        findings.push(AtsFinding {
            check: "file_format_recognized".to_string(),
            passed: file_format_recognized(name),
        });
        findings.push(AtsFinding {
            check: "file_name_clean".to_string(),
            passed: clean,
        });
        // Derived from file_name_clean, not an independent signal.
        findings.push(AtsFinding {
            check: "file_name_readable".to_string(),
            passed: clean,
        });
    }

    let breakdown = ScoreBreakdown::from_checks(findings.iter().map(|f| f.passed));
    AtsAssessment {
        breakdown,
        findings,
    }
}

fn file_format_recognized(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| RECOGNIZED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn file_name_clean(name: &str) -> bool {
    !name.contains(FORBIDDEN_FILE_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ContactInfo, ExperienceEntry, ResumeMeta};

    fn resume_fixture() -> ResumeRecord {
        ResumeRecord {
            raw_text: "education experience python".to_string(),
            skills: ["python".to_string()].into(),
            contact: ContactInfo {
                email: Some("jo@example.com".to_string()),
                phone: Some("+1 555 0100".to_string()),
                name: Some("Jo Doe".to_string()),
            },
            experience_entries: vec![ExperienceEntry {
                snippet: "Backend Engineer 2019 - 2023".to_string(),
            }],
            meta: ResumeMeta {
                length: 27,
                has_education_heading: true,
                has_experience_heading: true,
            },
            source_file_name: None,
        }
    }

    fn job_fixture(requires_education: bool) -> JobRecord {
        JobRecord {
            raw_text: "python engineer".to_string(),
            skills: ["python".to_string()].into(),
            meta: crate::models::job::JobMeta { requires_education },
        }
    }

    #[test]
    fn test_all_checks_pass_without_file_name() {
        let skill_score = ScoreBreakdown::from_counts(1, 1);
        let assessment = score(&resume_fixture(), &job_fixture(true), &skill_score, None);
        assert_eq!(assessment.breakdown.total, 8);
        assert_eq!(assessment.breakdown.exists, 8);
        assert_eq!(assessment.breakdown.not_exists, 0);
    }

    #[test]
    fn test_file_name_extends_total_to_eleven() {
        let skill_score = ScoreBreakdown::from_counts(1, 1);
        let assessment = score(
            &resume_fixture(),
            &job_fixture(false),
            &skill_score,
            Some("resume.pdf"),
        );
        assert_eq!(assessment.breakdown.total, 11);
        assert_eq!(assessment.breakdown.exists, 11);
    }

    #[test]
    fn test_hyphenated_docx_name_fails_clean_but_passes_format() {
        let skill_score = ScoreBreakdown::from_counts(1, 1);
        let assessment = score(
            &resume_fixture(),
            &job_fixture(false),
            &skill_score,
            Some("resume-v2.docx"),
        );
        let by_name = |check: &str| {
            assessment
                .findings
                .iter()
                .find(|f| f.check == check)
                .unwrap()
                .passed
        };
        assert!(by_name("file_format_recognized"));
        assert!(!by_name("file_name_clean"));
        assert!(!by_name("file_name_readable"));
        assert_eq!(assessment.breakdown.exists, 9);
        assert_eq!(assessment.breakdown.not_exists, 2);
    }

    #[test]
    fn test_unknown_extension_fails_format() {
        let skill_score = ScoreBreakdown::from_counts(1, 1);
        let assessment = score(
            &resume_fixture(),
            &job_fixture(false),
            &skill_score,
            Some("resume.odt"),
        );
        let format = assessment
            .findings
            .iter()
            .find(|f| f.check == "file_format_recognized")
            .unwrap();
        assert!(!format.passed);
    }

    #[test]
    fn test_incomplete_skills_fail_first_check() {
        let skill_score = ScoreBreakdown::from_counts(1, 3);
        let assessment = score(&resume_fixture(), &job_fixture(false), &skill_score, None);
        let skills = assessment
            .findings
            .iter()
            .find(|f| f.check == "skills_complete")
            .unwrap();
        assert!(!skills.passed);
        assert_eq!(assessment.breakdown.exists, 7);
    }

    #[test]
    fn test_education_requirement_waived_when_job_does_not_ask() {
        let mut resume = resume_fixture();
        resume.meta.has_education_heading = false;

        let skill_score = ScoreBreakdown::from_counts(1, 1);
        let assessment = score(&resume, &job_fixture(false), &skill_score, None);
        let by_name = |check: &str| {
            assessment
                .findings
                .iter()
                .find(|f| f.check == check)
                .unwrap()
                .passed
        };
        // Requirement met unconditionally, but the independent heading check
        // still reports the missing section.
        assert!(by_name("education_requirement_met"));
        assert!(!by_name("education_heading_present"));
    }

    #[test]
    fn test_education_requirement_enforced_when_job_asks() {
        let mut resume = resume_fixture();
        resume.meta.has_education_heading = false;

        let skill_score = ScoreBreakdown::from_counts(1, 1);
        let assessment = score(&resume, &job_fixture(true), &skill_score, None);
        let requirement = assessment
            .findings
            .iter()
            .find(|f| f.check == "education_requirement_met")
            .unwrap();
        assert!(!requirement.passed);
    }

    #[test]
    fn test_missing_contact_fields_fail() {
        let mut resume = resume_fixture();
        resume.contact = ContactInfo::default();

        let skill_score = ScoreBreakdown::from_counts(1, 1);
        let assessment = score(&resume, &job_fixture(false), &skill_score, None);
        assert_eq!(assessment.breakdown.not_exists, 3);
    }

    #[test]
    fn test_breakdown_invariant_holds() {
        let skill_score = ScoreBreakdown::from_counts(0, 2);
        let assessment = score(
            &resume_fixture(),
            &job_fixture(true),
            &skill_score,
            Some("cv!.pdf"),
        );
        let b = assessment.breakdown;
        assert_eq!(b.exists + b.not_exists, b.total);
    }
}
