//! Count triple underlying every ratio-based sub-score.

use serde::{Deserialize, Serialize};

/// `{exists, not_exists, total}` counts for one scored category.
/// Invariant: `exists + not_exists == total`. Construct through `from_counts`
/// or `from_checks` so the invariant holds everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub exists: u32,
    pub not_exists: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    /// Builds a breakdown from the number of satisfied items and the number
    /// of applicable items. `exists` is clamped to `total` so the invariant
    /// cannot be violated by an over-counting caller.
    pub fn from_counts(exists: u32, total: u32) -> Self {
        let exists = exists.min(total);
        Self {
            exists,
            not_exists: total - exists,
            total,
        }
    }

    /// Builds a breakdown from a sequence of pass/fail checks, one point each.
    pub fn from_checks<I: IntoIterator<Item = bool>>(checks: I) -> Self {
        let mut exists = 0u32;
        let mut total = 0u32;
        for passed in checks {
            total += 1;
            if passed {
                exists += 1;
            }
        }
        Self::from_counts(exists, total)
    }

    pub fn empty() -> Self {
        Self::from_counts(0, 0)
    }
}
