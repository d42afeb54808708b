use crate::i18n::LanguageRegistry;
use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one `<code>.json` catalog per language
    pub locales_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // DEFAULT_LANGUAGE is a deploy-time sanity check: the registry is
        // the single source of truth, so a mismatch is a config error.
        if let Ok(code) = std::env::var("DEFAULT_LANGUAGE") {
            let registry_default = LanguageRegistry::get().default_language().code;
            if code != registry_default {
                bail!(
                    "DEFAULT_LANGUAGE is '{}' but the registry default is '{}'",
                    code,
                    registry_default
                );
            }
        }

        Ok(Self {
            locales_dir: std::env::var("LOCALES_DIR")
                .unwrap_or_else(|_| "locales".to_string())
                .into(),
        })
    }
}
