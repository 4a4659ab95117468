//! Aggregate vegetation statistics.
//!
//! Descriptive statistics over the normalized series, independent of
//! event detection: mean/min/max, a half-split trend with hysteresis,
//! and a short-horizon momentum heuristic for bloom probability.

use bw_common::{NdviSample, VegetationStats, VegetationTrend};
use bw_config::StatsParams;

use crate::series::normalize;

/// Compute series statistics using the default thresholds.
///
/// An empty series yields the all-zero / stable default rather than an
/// error.
pub fn calculate_stats(samples: &[NdviSample]) -> VegetationStats {
    calculate_stats_with(samples, &StatsParams::default())
}

/// Compute series statistics with explicit parameters.
pub fn calculate_stats_with(samples: &[NdviSample], params: &StatsParams) -> VegetationStats {
    let sorted = normalize(samples);
    if sorted.is_empty() {
        return VegetationStats::default();
    }

    let values: Vec<f64> = sorted.iter().map(|s| s.ndvi).collect();
    let avg_ndvi = bw_math::mean_or(&values, 0.0);
    let (min_ndvi, max_ndvi) = bw_math::min_max(&values).unwrap_or((0.0, 0.0));

    // Half-split trend with a hysteresis band so sample noise does not
    // flip the direction. A one-element series has an empty first half
    // and stays stable.
    let trend = match bw_math::half_means(&values) {
        Some((first, second)) if second > first + params.trend_band => {
            VegetationTrend::Increasing
        }
        Some((first, second)) if second < first - params.trend_band => {
            VegetationTrend::Decreasing
        }
        _ => VegetationTrend::Stable,
    };

    let recent_increase = bw_math::tail_delta(&values, params.momentum_window);
    let bloom_probability =
        ((recent_increase + params.momentum_offset) * params.momentum_scale).clamp(0.0, 100.0);

    VegetationStats {
        avg_ndvi,
        min_ndvi,
        max_ndvi,
        trend,
        bloom_probability,
    }
}
