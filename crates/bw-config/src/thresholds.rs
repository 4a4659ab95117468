//! Tuned heuristic thresholds for the analytics engine.
//!
//! Every fixed constant controlling qualification, boundary search,
//! classification, and gating lives here as a named field so it can be
//! tuned and tested independently of the algorithm logic. Defaults are
//! the values tuned for roughly weekly-sampled, multi-month NDVI
//! series; they are not meant for arbitrary sampling rates.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::validate::{ValidationError, ValidationResult};

/// Root threshold configuration, one sub-struct per engine component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub detector: DetectorParams,
    pub stats: StatsParams,
    pub predictor: PredictorParams,
}

impl Thresholds {
    /// Load thresholds from a TOML file and validate them.
    ///
    /// Missing fields fall back to their defaults, so a file may
    /// override only the handful of values it cares about.
    pub fn load(path: &Path) -> ValidationResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ValidationError::Io(format!("{}: {e}", path.display())))?;
        let thresholds: Thresholds =
            toml::from_str(&raw).map_err(|e| ValidationError::Parse(e.to_string()))?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Semantic validation across all sub-structs.
    pub fn validate(&self) -> ValidationResult<()> {
        crate::validate::validate_thresholds(self)
    }
}

/// Bloom event detector parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Series shorter than this produce no events (silent outcome).
    pub min_series_len: usize,
    /// Centered moving-average window for noise suppression.
    pub smoothing_window: usize,
    /// Number of preceding smoothed points averaged into the baseline.
    pub baseline_window: usize,
    /// Minimum rise over baseline for a peak to qualify as a bloom.
    pub min_increase: f64,
    /// Absolute smoothed-NDVI floor for a qualifying peak.
    pub min_peak_ndvi: f64,
    /// Backward scan stops at the first point below baseline + margin.
    pub start_margin: f64,
    /// Forward scan stops at the first point below peak - drop.
    pub end_drop: f64,
    /// Intensity class cutoffs on the baseline-relative increase.
    pub moderate_increase: f64,
    pub high_increase: f64,
    pub extreme_increase: f64,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            min_series_len: 5,
            smoothing_window: 3,
            baseline_window: 5,
            min_increase: 0.10,
            min_peak_ndvi: 0.30,
            start_margin: 0.05,
            end_drop: 0.10,
            moderate_increase: 0.15,
            high_increase: 0.20,
            extreme_increase: 0.30,
        }
    }
}

/// Statistics aggregator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsParams {
    /// Hysteresis band around the half-means comparison; differences
    /// inside the band report a stable trend.
    pub trend_band: f64,
    /// Trailing window for the short-horizon bloom probability.
    pub momentum_window: usize,
    /// Offset added to the windowed increase before scaling.
    pub momentum_offset: f64,
    /// Scale mapping the offset increase into a percentage.
    pub momentum_scale: f64,
}

impl Default for StatsParams {
    fn default() -> Self {
        Self {
            trend_band: 0.05,
            momentum_window: 4,
            momentum_offset: 0.1,
            momentum_scale: 200.0,
        }
    }
}

/// Bloom predictor parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorParams {
    /// Series shorter than this produce no forecast.
    pub min_series_len: usize,
    /// Trailing window compared against the window before it for the
    /// recent trend.
    pub recent_window: usize,
    /// Trend above this contributes the "increasing trend" factor.
    pub strong_trend: f64,
    /// Recent mean above this contributes the "high baseline" factor.
    pub high_baseline: f64,
    /// Event count at which the historical pattern counts as
    /// consistent.
    pub consistent_events: usize,
    /// Confidence ceiling for forecasts.
    pub max_confidence: f64,
    /// Likelihood grade cutoffs on the forecast confidence.
    pub high_likelihood: f64,
    pub moderate_likelihood: f64,
}

impl Default for PredictorParams {
    fn default() -> Self {
        Self {
            min_series_len: 30,
            recent_window: 10,
            strong_trend: 0.05,
            high_baseline: 0.4,
            consistent_events: 3,
            max_confidence: 85.0,
            high_likelihood: 60.0,
            moderate_likelihood: 40.0,
        }
    }
}
