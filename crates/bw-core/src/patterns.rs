//! Bloom pattern analysis.
//!
//! Summarizes a collection of detected events into categorical
//! insights: average intensity, frequency class, seasonal dominance,
//! and a fixed-order narrative list. Works on any event list, whether
//! it came from the detector or elsewhere.

use bw_common::{BloomEvent, PatternAnalysis};
use chrono::Datelike;

/// Meteorological-style season buckets over 0-based months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

fn season_of(month0: u32) -> Season {
    match month0 {
        2..=4 => Season::Spring,
        5..=7 => Season::Summer,
        8..=10 => Season::Fall,
        _ => Season::Winter,
    }
}

/// Analyze a set of bloom events into categorical pattern labels.
///
/// An empty input returns the fixed "insufficient data" sentinel.
pub fn analyze_patterns(events: &[BloomEvent]) -> PatternAnalysis {
    if events.is_empty() {
        return PatternAnalysis {
            average_intensity: "No blooms detected".to_string(),
            bloom_frequency: "Insufficient data".to_string(),
            seasonal_pattern: "Unknown".to_string(),
            insights: vec!["Not enough data to analyze bloom patterns".to_string()],
        };
    }

    let avg_score = events
        .iter()
        .map(|e| e.intensity.score() as f64)
        .sum::<f64>()
        / events.len() as f64;
    let average_intensity = if avg_score > 3.5 {
        "Extreme"
    } else if avg_score > 2.5 {
        "High"
    } else if avg_score > 1.5 {
        "Moderate"
    } else {
        "Low"
    }
    .to_string();

    let bloom_frequency = if events.len() > 3 {
        "Frequent"
    } else if events.len() > 1 {
        "Occasional"
    } else {
        "Rare"
    }
    .to_string();

    // A season label wins only by strict dominance over all three
    // other buckets; ties and spreads report as variable.
    let mut counts = [0usize; 4];
    for event in events {
        let idx = match season_of(event.peak_date.month0()) {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Fall => 2,
            Season::Winter => 3,
        };
        counts[idx] += 1;
    }
    let labels = ["Spring-dominant", "Summer-dominant", "Fall-dominant", "Winter-dominant"];
    let mut seasonal_pattern = "Variable".to_string();
    for (idx, &label) in labels.iter().enumerate() {
        let dominant = counts
            .iter()
            .enumerate()
            .all(|(other, &count)| other == idx || counts[idx] > count);
        if dominant {
            seasonal_pattern = label.to_string();
            break;
        }
    }

    let mut insights = Vec::new();
    insights.push(format!(
        "Detected {} bloom event{} in the analyzed period",
        events.len(),
        if events.len() > 1 { "s" } else { "" }
    ));

    let high_intensity = events
        .iter()
        .filter(|e| e.intensity.score() >= 3)
        .count();
    if high_intensity > 0 {
        insights.push(format!(
            "{} high-intensity bloom{} observed",
            high_intensity,
            if high_intensity > 1 { "s" } else { "" }
        ));
    }

    if seasonal_pattern != "Variable" {
        insights.push(format!(
            "Clear {} blooming pattern",
            seasonal_pattern.to_lowercase()
        ));
    }

    let avg_confidence =
        events.iter().map(|e| e.confidence).sum::<f64>() / events.len() as f64;
    if avg_confidence > 70.0 {
        insights.push("High confidence in bloom detection accuracy".to_string());
    }

    PatternAnalysis {
        average_intensity,
        bloom_frequency,
        seasonal_pattern,
        insights,
    }
}
