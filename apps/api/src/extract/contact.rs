//! Contact-field extraction from raw (pre-normalization) résumé text.
//!
//! Runs before normalization on purpose: cleaning strips the `@` and
//! punctuation these patterns rely on.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::resume::ContactInfo;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
    })
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // International or local formats: optional +, then 8+ digits with
        // common separators.
        Regex::new(r"\+?\d[\d\s().\-]{6,}\d").expect("valid phone regex")
    })
}

/// Extracts email, phone, and a display name from raw résumé text. Every
/// field is optional — the ATS checklist scores absence, it is not an error.
pub fn extract(raw_text: &str) -> ContactInfo {
    ContactInfo {
        email: email_re().find(raw_text).map(|m| m.as_str().to_string()),
        phone: phone_re().find(raw_text).map(|m| m.as_str().trim().to_string()),
        name: extract_name(raw_text),
    }
}

/// Name heuristic: the first non-empty line, if it looks like a person's
/// name (2–4 words, no digits, no email). CVs overwhelmingly lead with the
/// candidate's name; anything else fails the shape test and yields None.
fn extract_name(raw_text: &str) -> Option<String> {
    let line = raw_text.lines().map(str::trim).find(|l| !l.is_empty())?;

    if line.contains('@') || line.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let words = line.split_whitespace().count();
    if !(2..=4).contains(&words) || line.len() > 60 {
        return None;
    }
    Some(line.to_string())
}
