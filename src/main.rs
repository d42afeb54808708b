//! Catalog check binary - loads every locale catalog, validates translations
//! against the default catalog, and prints sample lookups.
//!
//! Usage:
//!   cargo run                        # Check catalogs in ./locales
//!   LOCALES_DIR=path cargo run      # Check catalogs in a custom directory
//!
//! Exits non-zero when any catalog has a placeholder mismatch, so it can run
//! as a CI gate for locale files.

use anyhow::Result;
use credit_localization::config::Config;
use credit_localization::i18n::{
    self, CatalogValidator, Language, LookupMetrics, TranslationArgs, Translator,
};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("credit_localization=info".parse()?),
        )
        .init();

    info!("Starting catalog check");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Load all catalogs
    info!("Loading catalogs from {}", config.locales_dir.display());
    let catalogs = i18n::load_all(&config.locales_dir)?;

    // Validate every non-default catalog against the default one
    let default_language = Language::default_language();
    let default_catalog = catalogs
        .get(&default_language)
        .expect("Loader guarantees the default catalog");

    let mut failed = false;
    for (language, catalog) in &catalogs {
        if *language == default_language {
            continue;
        }

        let report = CatalogValidator::validate(default_catalog, catalog);
        for warning in &report.warnings {
            warn!(language = %language, "{}", warning);
        }
        for err in &report.errors {
            error!(language = %language, "{}", err);
        }
        if report.has_errors() {
            failed = true;
        } else {
            info!(language = %language, "Catalog OK ({} warnings)", report.warnings.len());
        }
    }

    // Print sample lookups through the translator
    let translator = Translator::new(catalogs);
    Translator::init_global(translator)?;
    let translator = Translator::global().expect("Translator was just installed");

    for language in [Language::RUSSIAN, Language::KYRGYZ, Language::ENGLISH] {
        let title = translator.t("credit.calculator.title", language)?;
        let hint = translator.translate(
            "validation.min_value",
            language,
            &TranslationArgs::new().arg("min", 250_000),
        )?;
        info!(language = %language, "{} / {}", title, hint);
    }

    let report = LookupMetrics::global().report();
    info!(
        "Lookups: {} total, {:.0}% direct hits, {} fallbacks, {} misses",
        report.total_lookups, report.hit_rate, report.default_fallbacks, report.key_misses
    );

    if failed {
        anyhow::bail!("Catalog validation failed");
    }

    info!("All catalogs OK");
    Ok(())
}
