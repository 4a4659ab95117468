//! BloomWatch configuration and reference data.
//!
//! This crate provides:
//! - Typed threshold structs for the analytics engine, with defaults
//!   matching the tuned heuristics
//! - TOML file loading
//! - Semantic validation
//! - The immutable monitoring-location reference table

pub mod locations;
pub mod thresholds;
pub mod validate;

pub use locations::{nearest_location, MonitoringLocation, MONITORING_LOCATIONS};
pub use thresholds::{DetectorParams, PredictorParams, StatsParams, Thresholds};
pub use validate::{ValidationError, ValidationResult};
