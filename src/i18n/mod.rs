//! Internationalization (i18n) module for multi-language support.
//!
//! This module provides a centralized, extensible architecture for managing
//! multiple languages. All language-related logic, catalogs, and translation
//! infrastructure is contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `catalog`: Nested key→string catalogs with dotted-path navigation
//! - `loader`: Reads per-language JSON catalogs from disk at startup
//! - `translator`: Key resolution with default-language fallback and interpolation
//! - `resolver`: Maps request language preferences to supported languages
//! - `validator`: Catalog completeness and placeholder-consistency checks
//! - `metrics`: Lookup observability counters
//!
//! # Example
//!
//! ```rust,ignore
//! use credit_localization::i18n::{self, Language, Translator, TranslationArgs};
//!
//! let catalogs = i18n::load_all(Path::new("locales"))?;
//! let translator = Translator::new(catalogs);
//!
//! let language = i18n::resolve("en-US,en;q=0.9");
//! let title = translator.t("credit.calculator.title", language)?;
//! let hint = translator.translate(
//!     "validation.min_value",
//!     language,
//!     &TranslationArgs::new().arg("min", 250_000),
//! )?;
//! ```

mod catalog;
mod language;
mod loader;
mod metrics;
mod registry;
mod resolver;
mod translator;
mod validator;

pub use catalog::{walk, Catalog, CatalogNode};
pub use language::Language;
pub use loader::load_all;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::resolve;
pub use translator::{TranslateError, TranslationArgs, Translator};
pub use validator::{CatalogValidator, ValidationReport};
