//! BloomWatch common types and errors.
//!
//! This crate provides foundational types shared across bw-core modules:
//! - NDVI sample and analysis result value objects
//! - Intensity, trend, and likelihood classifications
//! - Common error types
//! - Output format specifications

pub mod error;
pub mod output;
pub mod types;

pub use error::{Error, Result};
pub use output::OutputFormat;
pub use types::{
    classify_ndvi, BloomEvent, BloomIntensity, BloomLikelihood, BloomPrediction, NdviSample,
    PatternAnalysis, VegetationCover, VegetationStats, VegetationTrend,
};
