//! Language resolver: maps a request's language preference to a supported language.
//!
//! The input is an `Accept-Language`-style header value such as
//! `"en-US,en;q=0.9,ru;q=0.8"`. Only the first entry's primary subtag is
//! considered; anything absent or unsupported resolves to the default
//! language, so resolution can never fail.

use crate::i18n::{Language, LanguageRegistry};

/// Resolve a language preference string to a supported language.
///
/// Takes the first entry of the preference list, strips the region subtag
/// and quality weight, lowercases it, and matches it against registry codes
/// and aliases (e.g. `"kg"` resolves to Kyrgyz). Unknown or empty
/// preferences resolve to the default language.
pub fn resolve(preference: &str) -> Language {
    let primary = preference
        .split(',')
        .next()
        .unwrap_or("")
        .split(';')
        .next()
        .unwrap_or("")
        .split('-')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase();

    match LanguageRegistry::get().get_by_code_or_alias(&primary) {
        Some(config) if config.enabled => {
            Language::from_code(config.code).unwrap_or_default()
        }
        _ => Language::default_language(),
    }
}
