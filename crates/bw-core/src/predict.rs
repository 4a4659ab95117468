//! Bloom forecasting from historical detections.
//!
//! Combines the detector's historical events with the recent trend to
//! forecast the next likely bloom window at month granularity. At most
//! one best-guess forecast is produced per call.

use bw_common::{BloomLikelihood, BloomPrediction, NdviSample};
use bw_config::Thresholds;
use chrono::{Datelike, Months};
use tracing::debug;

use crate::detect::detect_bloom_events_with;
use crate::series::normalize;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Predict the next bloom window using the default thresholds.
///
/// Returns an empty list when the series is shorter than the
/// prediction gate or when no historical events exist to learn from.
pub fn predict_bloom_events(samples: &[NdviSample]) -> Vec<BloomPrediction> {
    predict_bloom_events_with(samples, &Thresholds::default())
}

/// Predict the next bloom window with explicit thresholds.
pub fn predict_bloom_events_with(
    samples: &[NdviSample],
    thresholds: &Thresholds,
) -> Vec<BloomPrediction> {
    let params = &thresholds.predictor;
    let sorted = normalize(samples);
    if sorted.len() < params.min_series_len {
        return Vec::new();
    }

    let history = detect_bloom_events_with(&sorted, &thresholds.detector);
    if history.is_empty() {
        return Vec::new();
    }

    // Arithmetic mean of peak months (0-based). Not a circular mean:
    // seasons spanning the year boundary average toward mid-year, a
    // deliberate parity with the tuned heuristic.
    let month_sum: u32 = history.iter().map(|e| e.peak_date.month0()).sum();
    let avg_bloom_month =
        (month_sum as f64 / history.len() as f64).round() as u32 % 12;

    // The gate guarantees two full windows under validated thresholds;
    // saturate anyway so unvalidated parameter sets cannot panic.
    let values: Vec<f64> = sorted.iter().map(|s| s.ndvi).collect();
    let w = params.recent_window;
    let recent_start = values.len().saturating_sub(w);
    let older_start = values.len().saturating_sub(2 * w);
    let recent_avg = bw_math::mean_or(&values[recent_start..], 0.0);
    let older_avg = bw_math::mean_or(&values[older_start..recent_start], 0.0);
    let trend = recent_avg - older_avg;

    let last_date = sorted[sorted.len() - 1].date;
    let current_month = last_date.month0();

    // Always a strictly future (or same-month-next-year) target.
    let mut months_until_bloom = avg_bloom_month as i32 - current_month as i32;
    if months_until_bloom <= 0 {
        months_until_bloom += 12;
    }
    let predicted_date = last_date + Months::new(months_until_bloom as u32);

    let mut factors = Vec::new();
    if trend > params.strong_trend {
        factors.push("Increasing vegetation trend".to_string());
    }
    if recent_avg > params.high_baseline {
        factors.push("High baseline vegetation".to_string());
    }
    if history.len() >= params.consistent_events {
        factors.push("Consistent historical pattern".to_string());
    }
    factors.push(format!(
        "Historical blooms in {}",
        MONTH_NAMES[avg_bloom_month as usize]
    ));

    let pattern_consistency = if history.len() >= params.consistent_events {
        0.3
    } else {
        0.1
    };
    let trend_factor = (trend * 2.0).clamp(0.0, 0.3);
    let baseline_factor = (recent_avg * 0.5).clamp(0.0, 0.4);
    let confidence =
        ((pattern_consistency + trend_factor + baseline_factor) * 100.0).min(params.max_confidence);

    let likelihood = if confidence > params.high_likelihood {
        BloomLikelihood::High
    } else if confidence > params.moderate_likelihood {
        BloomLikelihood::Moderate
    } else {
        BloomLikelihood::Low
    };

    debug!(
        events = history.len(),
        avg_bloom_month,
        trend,
        confidence,
        "bloom forecast"
    );

    vec![BloomPrediction {
        predicted_date,
        confidence,
        factors,
        likelihood,
    }]
}
