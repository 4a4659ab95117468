//! Series normalization and smoothing.
//!
//! The normalizer defines the canonical ordered view every other
//! component operates on: ascending by date, one sample per date.

use bw_common::NdviSample;
use chrono::NaiveDate;

/// A normalized sample paired with its moving-average value.
///
/// Transient detector input; not part of any public result.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedPoint {
    pub date: NaiveDate,
    pub ndvi: f64,
    pub smoothed: f64,
}

/// Sort samples ascending by date and drop duplicate dates.
///
/// Duplicate dates keep the first occurrence in input order (the sort
/// is stable), so a re-fetch appending stale rows cannot rewrite
/// history.
pub fn normalize(samples: &[NdviSample]) -> Vec<NdviSample> {
    let mut sorted = samples.to_vec();
    sorted.sort_by_key(|s| s.date);
    sorted.dedup_by_key(|s| s.date);
    sorted
}

/// Smooth a normalized series with an edge-shrinking centered moving
/// average of the given window.
pub fn smooth_series(samples: &[NdviSample], window: usize) -> Vec<SmoothedPoint> {
    let values: Vec<f64> = samples.iter().map(|s| s.ndvi).collect();
    let smoothed = bw_math::moving_average(&values, window);
    samples
        .iter()
        .zip(smoothed)
        .map(|(s, smoothed)| SmoothedPoint {
            date: s.date,
            ndvi: s.ndvi,
            smoothed,
        })
        .collect()
}
