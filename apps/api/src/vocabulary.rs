//! Controlled skill vocabulary — the fixed reference list of recognized skill terms.
//!
//! Loaded once at startup and carried in `AppState` as `Arc<ControlledVocabulary>`.
//! Read-only for the lifetime of the process; tests construct small fixture
//! vocabularies via `from_terms` instead of touching the shipped data file.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

/// Immutable set of lowercase skill terms.
#[derive(Debug, Clone)]
pub struct ControlledVocabulary {
    terms: BTreeSet<String>,
}

impl ControlledVocabulary {
    /// Loads a vocabulary from a newline-delimited file.
    /// Blank lines and `#` comment lines are skipped; terms are lowercased.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill vocabulary from {}", path.display()))?;

        let terms: BTreeSet<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        if terms.is_empty() {
            anyhow::bail!("Skill vocabulary at {} contains no terms", path.display());
        }

        Ok(Self { terms })
    }

    /// Builds a vocabulary from in-memory terms. Intended for tests and
    /// embedded callers.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Membership test. The vocabulary stores lowercase terms, so callers
    /// lowercase before asking.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}
