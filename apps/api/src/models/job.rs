//! Job-description-side input record consumed by the scoring engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobMeta {
    /// Whether the posting asks for formal education (detected from the
    /// education heading keywords in the JD text).
    pub requires_education: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// Normalized job-description text (see `normalize`).
    pub raw_text: String,
    /// Resolved skills (lowercase, vocabulary-filtered).
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub meta: JobMeta,
}
