//! End-to-end engine scenarios over synthetic series.

use bw_common::{BloomIntensity, VegetationStats, VegetationTrend};
use bw_core::{analyze_patterns, calculate_stats, detect_bloom_events, predict_bloom_events};
use chrono::{Datelike, NaiveDate};

fn weekly_series(start: &str, values: &[f64]) -> Vec<bw_common::NdviSample> {
    let start: NaiveDate = start.parse().unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            bw_common::NdviSample::new(start + chrono::Days::new(7 * i as u64), v, -2.33, 34.83)
        })
        .collect()
}

#[test]
fn flat_series_yields_no_events_and_stable_trend() {
    let samples = weekly_series("2024-01-07", &[0.5; 10]);
    assert!(detect_bloom_events(&samples).is_empty());
    assert_eq!(calculate_stats(&samples).trend, VegetationTrend::Stable);
}

#[test]
fn steep_synthetic_peak_is_extreme_with_capped_confidence() {
    // Rise from a 0.2 floor to 0.85 and back: the smoothed peak sits
    // ~0.35 above its baseline, landing in the extreme class with the
    // confidence capped at 95.
    let samples = weekly_series(
        "2024-01-07",
        &[
            0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.25, 0.55, 0.85, 0.55, 0.25, 0.2, 0.2, 0.2,
        ],
    );
    let events = detect_bloom_events(&samples);
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.peak_ndvi, 0.85);
    assert_eq!(event.intensity, BloomIntensity::Extreme);
    assert_eq!(event.confidence, 95.0);
    assert!(event.start_date <= event.peak_date);
    assert!(event.peak_date <= event.end_date.unwrap());
}

#[test]
fn linear_ramp_peak_classifies_low_from_smoothed_baseline() {
    // Linear rise 0.2 -> 0.6 over eight points, mirrored fall back to
    // 0.2. The gentle ramp drags the five-point baseline up to ~0.429,
    // so the smoothed peak (~0.562) clears it by only ~0.133: a
    // qualifying bloom, but in the low intensity band.
    let step = 0.4 / 7.0;
    let values: Vec<f64> = (0..15)
        .map(|i| {
            if i <= 7 {
                0.2 + i as f64 * step
            } else {
                0.6 - (i - 7) as f64 * step
            }
        })
        .collect();
    let samples = weekly_series("2024-01-07", &values);

    let events = detect_bloom_events(&samples);
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert!((event.peak_ndvi - 0.6).abs() < 1e-9);
    assert_eq!(event.peak_date, samples[7].date);
    assert_eq!(event.intensity, BloomIntensity::Low);
    assert!((event.confidence - 73.33).abs() < 0.5);
    assert_eq!(event.start_date, samples[4].date);
    assert_eq!(event.end_date, Some(samples[10].date));
}

#[test]
fn empty_series_yields_defaults_everywhere() {
    assert_eq!(calculate_stats(&[]), VegetationStats::default());
    assert!(detect_bloom_events(&[]).is_empty());
    assert!(predict_bloom_events(&[]).is_empty());
}

#[test]
fn pattern_sentinel_for_no_events() {
    let analysis = analyze_patterns(&[]);
    assert_eq!(analysis.average_intensity, "No blooms detected");
    assert_eq!(analysis.bloom_frequency, "Insufficient data");
    assert_eq!(analysis.seasonal_pattern, "Unknown");
    assert_eq!(
        analysis.insights,
        vec!["Not enough data to analyze bloom patterns".to_string()]
    );
}

#[test]
fn three_march_peaks_predict_a_following_march() {
    // Weekly series over three years with one bloom bump each March.
    let mut values = vec![0.2; 120];
    for start in [8usize, 60, 112] {
        values[start..start + 5].copy_from_slice(&[0.3, 0.45, 0.65, 0.45, 0.3]);
    }
    let samples = weekly_series("2023-01-01", &values);

    let events = detect_bloom_events(&samples);
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.peak_date.month0() == 2));

    let predictions = predict_bloom_events(&samples);
    assert_eq!(predictions.len(), 1);
    let p = &predictions[0];
    assert_eq!(p.predicted_date.month0(), 2);
    assert!(p.predicted_date > samples.last().unwrap().date);
    assert!(p.factors.iter().any(|f| f.contains("March")));

    let analysis = analyze_patterns(&events);
    assert_eq!(analysis.seasonal_pattern, "Spring-dominant");
}

#[test]
fn full_pipeline_is_idempotent() {
    let samples = weekly_series(
        "2024-01-07",
        &[
            0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.3, 0.45, 0.65, 0.45, 0.3, 0.2, 0.2, 0.2,
        ],
    );
    assert_eq!(detect_bloom_events(&samples), detect_bloom_events(&samples));
    assert_eq!(calculate_stats(&samples), calculate_stats(&samples));
    let events = detect_bloom_events(&samples);
    assert_eq!(analyze_patterns(&events), analyze_patterns(&events));
}
