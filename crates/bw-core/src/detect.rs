//! Bloom event detection.
//!
//! Scans the smoothed series for local maxima that rise significantly
//! above their short-horizon baseline, then derives start/end
//! boundaries and an intensity/confidence classification per event.
//! Closely spaced maxima each produce an event; overlaps are not
//! merged or suppressed.

use bw_common::{BloomEvent, BloomIntensity, NdviSample};
use bw_config::DetectorParams;
use tracing::debug;

use crate::series::{normalize, smooth_series};

/// Detect bloom events in a series using the default thresholds.
///
/// The input needs no sort order; normalization happens internally.
/// Series shorter than the detection gate return an empty list — an
/// ordinary outcome, not an error.
pub fn detect_bloom_events(samples: &[NdviSample]) -> Vec<BloomEvent> {
    detect_bloom_events_with(samples, &DetectorParams::default())
}

/// Detect bloom events with explicit detector thresholds.
pub fn detect_bloom_events_with(
    samples: &[NdviSample],
    params: &DetectorParams,
) -> Vec<BloomEvent> {
    let sorted = normalize(samples);
    if sorted.len() < params.min_series_len {
        return Vec::new();
    }

    let smoothed = smooth_series(&sorted, params.smoothing_window);
    let n = smoothed.len();
    let mut events = Vec::new();

    // Interior scan only: both neighbors of a candidate must exist,
    // with one further point of slack on each side. Saturate so a
    // hand-built gate below the scan width cannot underflow.
    for i in 2..n.saturating_sub(2) {
        let current = smoothed[i].smoothed;
        if current <= smoothed[i - 1].smoothed || current <= smoothed[i + 1].smoothed {
            continue;
        }

        let baseline_start = i.saturating_sub(params.baseline_window);
        let baseline_values: Vec<f64> = smoothed[baseline_start..i]
            .iter()
            .map(|p| p.smoothed)
            .collect();
        // i >= 2 guarantees a non-empty window, but keep the guard so
        // the scan bounds can change without reintroducing a division
        // by zero.
        let Some(baseline) = bw_math::mean(&baseline_values) else {
            continue;
        };

        let increase = current - baseline;
        if increase <= params.min_increase || current <= params.min_peak_ndvi {
            continue;
        }

        // Start: first point scanning backward whose smoothed value is
        // already below baseline + margin; the peak itself if the rise
        // extends past the scan.
        let mut start_idx = i;
        for j in (0..i).rev() {
            if smoothed[j].smoothed < baseline + params.start_margin {
                start_idx = j;
                break;
            }
        }

        // End: first point scanning forward that falls below
        // peak - drop; none means the bloom is ongoing at series end.
        let mut end_idx = None;
        for (j, point) in smoothed.iter().enumerate().skip(i + 1) {
            if point.smoothed < current - params.end_drop {
                end_idx = Some(j);
                break;
            }
        }

        let intensity = classify_increase(increase, params);
        let confidence = (60.0 + increase * 100.0).min(95.0);

        debug!(
            peak_date = %smoothed[i].date,
            increase,
            %intensity,
            "qualifying local maximum"
        );

        events.push(BloomEvent {
            start_date: smoothed[start_idx].date,
            peak_date: smoothed[i].date,
            end_date: end_idx.map(|j| smoothed[j].date),
            peak_ndvi: smoothed[i].ndvi,
            intensity,
            confidence,
        });
    }

    events
}

fn classify_increase(increase: f64, params: &DetectorParams) -> BloomIntensity {
    if increase > params.extreme_increase {
        BloomIntensity::Extreme
    } else if increase > params.high_increase {
        BloomIntensity::High
    } else if increase > params.moderate_increase {
        BloomIntensity::Moderate
    } else {
        BloomIntensity::Low
    }
}
