use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default — the service boots from a bare environment
/// with the shipped vocabulary and the lexical-weighted preset.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Newline-delimited controlled skill vocabulary.
    pub vocabulary_path: String,
    /// Weighting preset name: "lexical-weighted" or "composite-ats".
    pub match_preset: String,
    /// Historical normalizer variant: drop tokens containing digits.
    pub alphabetic_tokens_only: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            vocabulary_path: std::env::var("SKILLS_VOCAB_PATH")
                .unwrap_or_else(|_| "data/skills.txt".to_string()),
            match_preset: std::env::var("MATCH_PRESET")
                .unwrap_or_else(|_| "lexical-weighted".to_string()),
            alphabetic_tokens_only: env_flag("ALPHABETIC_TOKENS_ONLY"),
        })
    }
}

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
