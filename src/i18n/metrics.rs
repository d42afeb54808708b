//! Lookup metrics for the translator.
//!
//! Plain in-process counters on the resolution path: direct catalog hits,
//! fallbacks to the default language, and keys missing from every catalog.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup metrics singleton.
pub struct LookupMetrics {
    /// Number of keys resolved from the requested language's catalog
    hits: AtomicUsize,

    /// Number of keys served from the default language's catalog
    default_fallbacks: AtomicUsize,

    /// Number of keys missing from every catalog (raw key returned)
    key_misses: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Get the global lookup metrics instance.
    ///
    /// This method initializes the metrics on first call and returns a reference
    /// to the singleton instance on subsequent calls.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(|| LookupMetrics {
            hits: AtomicUsize::new(0),
            default_fallbacks: AtomicUsize::new(0),
            key_misses: AtomicUsize::new(0),
        })
    }

    /// Record a key resolved from the requested language's catalog.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a key served from the default language's catalog.
    pub fn record_default_fallback(&self) {
        self.default_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a key missing from every catalog.
    pub fn record_key_miss(&self) {
        self.key_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current hit count.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Get the current default-fallback count.
    pub fn default_fallbacks(&self) -> usize {
        self.default_fallbacks.load(Ordering::Relaxed)
    }

    /// Get the current key-miss count.
    pub fn key_misses(&self) -> usize {
        self.key_misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let default_fallbacks = self.default_fallbacks();
        let key_misses = self.key_misses();
        let total_lookups = hits + default_fallbacks + key_misses;
        let hit_rate = if total_lookups > 0 {
            (hits as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            default_fallbacks,
            key_misses,
            total_lookups,
            hit_rate,
        }
    }
}

/// Metrics report containing current lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of keys resolved from the requested language's catalog
    pub hits: usize,

    /// Number of keys served from the default language's catalog
    pub default_fallbacks: usize,

    /// Number of keys missing from every catalog
    pub key_misses: usize,

    /// Total lookups observed
    pub total_lookups: usize,

    /// Direct hit rate as a percentage (0-100)
    pub hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Counters are process-global and other tests translate in parallel,
    // so assert on deltas rather than absolute values.

    #[test]
    fn test_record_hit() {
        let metrics = LookupMetrics::global();
        let initial = metrics.hits();

        metrics.record_hit();
        metrics.record_hit();
        assert!(metrics.hits() >= initial + 2);
    }

    #[test]
    fn test_record_default_fallback() {
        let metrics = LookupMetrics::global();
        let initial = metrics.default_fallbacks();

        metrics.record_default_fallback();
        assert!(metrics.default_fallbacks() >= initial + 1);
    }

    #[test]
    fn test_record_key_miss() {
        let metrics = LookupMetrics::global();
        let initial = metrics.key_misses();

        metrics.record_key_miss();
        assert!(metrics.key_misses() >= initial + 1);
    }

    #[test]
    fn test_report_totals() {
        let metrics = LookupMetrics::global();
        metrics.record_hit();
        metrics.record_default_fallback();
        metrics.record_key_miss();

        let report = metrics.report();
        assert_eq!(
            report.total_lookups,
            report.hits + report.default_fallbacks + report.key_misses
        );
        assert!(report.hit_rate >= 0.0 && report.hit_rate <= 100.0);
    }

    #[test]
    fn test_report_serializes() {
        let report = LookupMetrics::global().report();
        let json = serde_json::to_string(&report).expect("Report should serialize");
        assert!(json.contains("hit_rate"));
    }

    #[test]
    fn test_global_returns_same_instance() {
        let metrics1 = LookupMetrics::global();
        let metrics2 = LookupMetrics::global();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(metrics1, metrics2));
    }
}
