//! Translator: resolve `(key, language, args)` to a formatted string.
//!
//! The translator is a pure, synchronous lookup over catalogs loaded once at
//! startup. Resolution order: the requested language's catalog, then the
//! default language's catalog, then the raw key itself. Key misses therefore
//! degrade to readable text and never fail the caller; a missing `{name}`
//! interpolation parameter is the one caller-facing error, since it indicates
//! a programming mistake at the call site rather than a locale gap.

use crate::i18n::{Catalog, Language, LookupMetrics};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors surfaced to translator callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// The resolved template contains a `{name}` placeholder that was not
    /// supplied. Distinct from key-not-found, which degrades to a fallback.
    #[error("missing parameter '{name}' for translation key '{key}'")]
    MissingParameter { key: String, name: String },
}

/// Named substitution parameters for `{name}` placeholders.
///
/// # Example
/// ```ignore
/// let args = TranslationArgs::new().arg("min", 250_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranslationArgs {
    values: HashMap<String, String>,
}

impl TranslationArgs {
    /// Create an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named argument (builder style).
    pub fn arg(mut self, name: &str, value: impl ToString) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }

    /// Look up an argument by placeholder name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Check whether no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// Placeholder pattern: literal braces first so "{{min}}" stays literal
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{\{|\}\}|\{([A-Za-z0-9_]+)\}").unwrap())
}

/// Translator over immutable, already-loaded catalogs.
///
/// Stateless after construction; safe to share across any number of
/// concurrent request contexts without locking.
pub struct Translator {
    catalogs: HashMap<Language, Catalog>,
    default_language: Language,
}

/// Process-wide translator instance (set once at startup)
static TRANSLATOR: OnceLock<Translator> = OnceLock::new();

impl Translator {
    /// Create a translator from loaded catalogs.
    ///
    /// The default language is taken from the registry; its catalog is the
    /// fallback for every other language (the loader guarantees it exists).
    pub fn new(catalogs: HashMap<Language, Catalog>) -> Self {
        Self {
            catalogs,
            default_language: Language::default_language(),
        }
    }

    /// The default (fallback) language this translator resolves against.
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Install the process-wide translator instance.
    ///
    /// Must be called once, before concurrent request handling begins.
    /// Returns an error if a translator was already installed.
    pub fn init_global(translator: Translator) -> anyhow::Result<()> {
        TRANSLATOR
            .set(translator)
            .map_err(|_| anyhow::anyhow!("Global translator already initialized"))
    }

    /// Get the process-wide translator, if one was installed.
    pub fn global() -> Option<&'static Translator> {
        TRANSLATOR.get()
    }

    /// Translate a dotted key to the given language with named parameters.
    ///
    /// Resolution falls back from the requested language's catalog to the
    /// default language's catalog, and finally to the raw key. Every
    /// `{name}` placeholder in the resolved template must have a matching
    /// argument or `TranslateError::MissingParameter` is returned.
    pub fn translate(
        &self,
        key: &str,
        language: Language,
        args: &TranslationArgs,
    ) -> Result<String, TranslateError> {
        let template = self.resolve(key, language);
        interpolate(key, template, args)
    }

    /// Short alias for `translate` without parameters.
    pub fn t(&self, key: &str, language: Language) -> Result<String, TranslateError> {
        self.translate(key, language, &TranslationArgs::new())
    }

    /// Resolve a key to its raw template, without interpolation.
    ///
    /// Tries the requested language, then the default language, then
    /// returns the key itself.
    fn resolve<'a>(&'a self, key: &'a str, language: Language) -> &'a str {
        let metrics = LookupMetrics::global();

        if let Some(value) = self.catalogs.get(&language).and_then(|c| c.get(key)) {
            metrics.record_hit();
            return value;
        }

        if language != self.default_language {
            if let Some(value) = self
                .catalogs
                .get(&self.default_language)
                .and_then(|c| c.get(key))
            {
                metrics.record_default_fallback();
                return value;
            }
        }

        tracing::warn!(key, language = %language, "Translation key not found in any catalog");
        metrics.record_key_miss();
        key
    }
}

/// Substitute `{name}` placeholders in a template.
///
/// `{{` and `}}` are literal braces. A placeholder without a matching
/// argument is a usage error; extra arguments are ignored.
fn interpolate(key: &str, template: &str, args: &TranslationArgs) -> Result<String, TranslateError> {
    let regex = placeholder_regex();

    // Check all placeholders up front so the error names the first gap
    for captures in regex.captures_iter(template) {
        if let Some(name) = captures.get(1) {
            if args.get(name.as_str()).is_none() {
                return Err(TranslateError::MissingParameter {
                    key: key.to_string(),
                    name: name.as_str().to_string(),
                });
            }
        }
    }

    let result = regex.replace_all(template, |captures: &regex::Captures<'_>| {
        match captures.get(1) {
            // Checked above
            Some(name) => args.get(name.as_str()).unwrap_or_default().to_string(),
            None => match &captures[0] {
                "{{" => "{".to_string(),
                _ => "}".to_string(),
            },
        }
    });

    Ok(result.into_owned())
}
