//! Full analysis report assembly.
//!
//! Runs the four engine operations over one series and bundles the
//! results into a single serializable report, plus a plain-text
//! renderer for terminal use.

use bw_common::{BloomEvent, BloomPrediction, NdviSample, PatternAnalysis, VegetationStats};
use bw_config::Thresholds;
use serde::Serialize;
use std::fmt::Write as _;

use crate::detect::detect_bloom_events_with;
use crate::patterns::analyze_patterns;
use crate::predict::predict_bloom_events_with;
use crate::stats::calculate_stats_with;

/// Combined result of one full analysis pass over a series.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub sample_count: usize,
    pub stats: VegetationStats,
    pub events: Vec<BloomEvent>,
    pub predictions: Vec<BloomPrediction>,
    pub patterns: PatternAnalysis,
}

/// Run statistics, detection, prediction, and pattern analysis over a
/// series in one pass.
pub fn analyze_series(samples: &[NdviSample], thresholds: &Thresholds) -> AnalysisReport {
    let stats = calculate_stats_with(samples, &thresholds.stats);
    let events = detect_bloom_events_with(samples, &thresholds.detector);
    let predictions = predict_bloom_events_with(samples, thresholds);
    let patterns = analyze_patterns(&events);
    AnalysisReport {
        sample_count: samples.len(),
        stats,
        events,
        predictions,
        patterns,
    }
}

impl AnalysisReport {
    /// Render the report as a human-readable text block.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Samples analyzed: {}", self.sample_count);
        let _ = writeln!(
            out,
            "NDVI: avg {:.3}, min {:.3}, max {:.3} ({})",
            self.stats.avg_ndvi,
            self.stats.min_ndvi,
            self.stats.max_ndvi,
            bw_common::classify_ndvi(self.stats.avg_ndvi)
        );
        let _ = writeln!(
            out,
            "Trend: {} | bloom probability {:.0}%",
            self.stats.trend, self.stats.bloom_probability
        );

        if self.events.is_empty() {
            let _ = writeln!(out, "Bloom events: none");
        } else {
            let _ = writeln!(out, "Bloom events: {}", self.events.len());
            for event in &self.events {
                let end = event
                    .end_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "ongoing".to_string());
                let _ = writeln!(
                    out,
                    "  {} .. {} (peak {} at {:.3}, {} intensity, {:.0}% confidence)",
                    event.start_date,
                    end,
                    event.peak_date,
                    event.peak_ndvi,
                    event.intensity,
                    event.confidence
                );
            }
        }

        for prediction in &self.predictions {
            let _ = writeln!(
                out,
                "Next bloom: ~{} ({} likelihood, {:.0}% confidence)",
                prediction.predicted_date, prediction.likelihood, prediction.confidence
            );
            for factor in &prediction.factors {
                let _ = writeln!(out, "  - {factor}");
            }
        }

        let _ = writeln!(
            out,
            "Pattern: {} intensity, {} frequency, {}",
            self.patterns.average_intensity,
            self.patterns.bloom_frequency,
            self.patterns.seasonal_pattern
        );
        for insight in &self.patterns.insights {
            let _ = writeln!(out, "  * {insight}");
        }
        out
    }
}
