//! BloomWatch Core - NDVI time-series analytics engine.
//!
//! The engine consumes an ordered collection of NDVI samples for a
//! geographic point and derives:
//! - smoothed trend statistics ([`calculate_stats`])
//! - discrete bloom event detections ([`detect_bloom_events`])
//! - forward-looking bloom predictions ([`predict_bloom_events`])
//! - summary pattern analysis across events ([`analyze_patterns`])
//!
//! All operations are pure functions of their inputs: no I/O, no
//! shared state, and no error paths. Insufficient data is a
//! first-class silent outcome (empty collections or sentinel values),
//! never a failure. Sample acquisition and presentation are external
//! collaborators.

pub mod detect;
pub mod logging;
pub mod patterns;
pub mod predict;
pub mod report;
pub mod series;
pub mod stats;

pub use detect::{detect_bloom_events, detect_bloom_events_with};
pub use patterns::analyze_patterns;
pub use predict::{predict_bloom_events, predict_bloom_events_with};
pub use report::{analyze_series, AnalysisReport};
pub use series::{normalize, smooth_series, SmoothedPoint};
pub use stats::{calculate_stats, calculate_stats_with};
