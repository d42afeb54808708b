//! Catalog quality validation module.
//!
//! This module checks non-default catalogs against the default catalog so
//! gaps are visible at startup rather than at request time: keys the
//! translation is missing (fallback will serve the default text), empty
//! values, and `{name}` placeholder sets that differ from the default leaf
//! (interpolation would break at runtime).

use crate::i18n::Catalog;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical problems (placeholder mismatches)
    pub errors: Vec<String>,

    /// Non-critical problems (missing keys, empty values)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog completeness and placeholder consistency.
pub struct CatalogValidator;

// Placeholder extraction pattern (cached for performance)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate a translation catalog against the default catalog.
    ///
    /// This function checks that:
    /// - every key in the default catalog exists in the translation
    /// - translated values are non-empty
    /// - translated values use the same `{name}` placeholders as the default
    ///
    /// # Arguments
    /// * `default_catalog` - The default language's catalog (source of truth)
    /// * `translated` - The catalog being checked
    ///
    /// # Returns
    /// A `ValidationReport` containing any errors or warnings found.
    pub fn validate(default_catalog: &Catalog, translated: &Catalog) -> ValidationReport {
        let mut report = ValidationReport::new();

        for key in default_catalog.keys() {
            let default_value = default_catalog
                .get(&key)
                .expect("Enumerated key should resolve");

            let Some(translated_value) = translated.get(&key) else {
                report
                    .warnings
                    .push(format!("Missing key '{}': default text will be served", key));
                continue;
            };

            if translated_value.trim().is_empty() {
                report.warnings.push(format!("Empty value for key '{}'", key));
            }

            let default_placeholders = Self::extract_placeholders(default_value);
            let translated_placeholders = Self::extract_placeholders(translated_value);
            if default_placeholders != translated_placeholders {
                report.errors.push(format!(
                    "Placeholder mismatch for key '{}': default has {:?}, translation has {:?}",
                    key, default_placeholders, translated_placeholders
                ));
            }
        }

        report
    }

    /// Extract the set of `{name}` placeholders from a template
    fn extract_placeholders(template: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap());

        regex
            .captures_iter(template)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
