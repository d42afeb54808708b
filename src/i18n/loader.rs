//! Resource loader: reads per-language catalog files at startup.
//!
//! Each enabled language loads from `<dir>/<code>.json`. The default
//! language's catalog is mandatory; a missing file for any other language is
//! tolerated and resolution falls back to the default catalog.

use crate::i18n::{Catalog, Language, LanguageRegistry};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// Load one catalog per enabled language from a locales directory.
///
/// # Errors
/// Fails if the default language's catalog file is missing or unreadable,
/// or if any present catalog file is not a valid nested string mapping.
pub fn load_all(dir: &Path) -> Result<HashMap<Language, Catalog>> {
    let registry = LanguageRegistry::get();
    let default_code = registry.default_language().code;
    let mut catalogs = HashMap::new();

    for config in registry.list_enabled() {
        let path = dir.join(format!("{}.json", config.code));

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound && config.code != default_code => {
                warn!(
                    language = config.code,
                    path = %path.display(),
                    "Catalog file not found, lookups will fall back to the default language"
                );
                continue;
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read catalog file {}", path.display()));
            }
        };

        let catalog: Catalog = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;

        info!(
            language = config.code,
            keys = catalog.keys().len(),
            "Loaded translation catalog"
        );

        let language = Language::from_code(config.code)
            .with_context(|| format!("Registry language '{}' is invalid", config.code))?;
        catalogs.insert(language, catalog);
    }

    Ok(catalogs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_catalog(dir: &TempDir, code: &str, json: &str) {
        fs::write(dir.path().join(format!("{}.json", code)), json)
            .expect("Failed to write test catalog");
    }

    #[test]
    fn test_load_all_languages() {
        let dir = TempDir::new().unwrap();
        write_catalog(&dir, "ru", r#"{"greeting": "Здравствуйте"}"#);
        write_catalog(&dir, "ky", r#"{"greeting": "Саламатсызбы"}"#);
        write_catalog(&dir, "en", r#"{"greeting": "Hello"}"#);

        let catalogs = load_all(dir.path()).expect("Should load all catalogs");

        assert_eq!(catalogs.len(), 3);
        assert_eq!(
            catalogs.get(&Language::ENGLISH).unwrap().get("greeting"),
            Some("Hello")
        );
    }

    #[test]
    fn test_missing_non_default_catalog_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_catalog(&dir, "ru", r#"{"greeting": "Здравствуйте"}"#);

        let catalogs = load_all(dir.path()).expect("Default catalog alone should suffice");

        assert_eq!(catalogs.len(), 1);
        assert!(catalogs.contains_key(&Language::RUSSIAN));
        assert!(!catalogs.contains_key(&Language::ENGLISH));
    }

    #[test]
    fn test_missing_default_catalog_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_catalog(&dir, "en", r#"{"greeting": "Hello"}"#);

        let err = load_all(dir.path()).unwrap_err();
        assert!(err.to_string().contains("ru.json"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_catalog(&dir, "ru", r#"{"greeting": "#);

        let err = load_all(dir.path()).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_non_string_leaf_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_catalog(&dir, "ru", r#"{"count": 3}"#);

        assert!(load_all(dir.path()).is_err());
    }

    #[test]
    fn test_shipped_locales_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("locales");
        let catalogs = load_all(&dir).expect("Shipped locales should load");

        assert_eq!(catalogs.len(), 3);
        assert_eq!(
            catalogs
                .get(&Language::RUSSIAN)
                .unwrap()
                .get("credit.calculator.title"),
            Some("Кредитный калькулятор")
        );
    }
}
