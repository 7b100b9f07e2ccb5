use std::sync::Arc;

use crate::config::Config;
use crate::normalize::NormalizeOptions;
use crate::scoring::composite::WeightPreset;
use crate::vocabulary::ControlledVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The vocabulary is loaded once at startup and never mutated, so handlers
/// score concurrently without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub vocabulary: Arc<ControlledVocabulary>,
    /// Weighting preset selected at startup via MATCH_PRESET.
    pub preset: WeightPreset,
    pub normalize_options: NormalizeOptions,
}
