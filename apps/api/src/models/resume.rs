//! Résumé-side input record consumed by the scoring engine.
//!
//! Populated by the extraction layer (or supplied directly by callers of the
//! JSON scoring endpoint). The engine treats it as read-only: every scoring
//! stage derives new values instead of mutating the record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Contact fields pulled from the résumé. All optional — the ATS checklist
/// scores their presence, so absence is data, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub name: Option<String>,
}

/// One detected work-history entry. Only the count participates in scoring;
/// the snippet is carried for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub snippet: String,
}

/// Surface-level document signals measured on the normalized résumé text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeMeta {
    /// Character count of the normalized text.
    pub length: usize,
    pub has_education_heading: bool,
    pub has_experience_heading: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Normalized résumé text (see `normalize`).
    pub raw_text: String,
    /// Resolved skills (lowercase, vocabulary-filtered).
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub experience_entries: Vec<ExperienceEntry>,
    #[serde(default)]
    pub meta: ResumeMeta,
    #[serde(default)]
    pub source_file_name: Option<String>,
}

impl ResumeRecord {
    pub fn has_experience(&self) -> bool {
        !self.experience_entries.is_empty()
    }
}
