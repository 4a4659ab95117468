//! Core value objects for vegetation analysis.
//!
//! Every type here is a plain value object computed fresh per call: no
//! back-references to the source series, no interior mutability. Dates
//! are calendar dates (`NaiveDate`, ISO `YYYY-MM-DD` on the wire) and
//! NDVI values are treated as opaque bounded floats.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single NDVI observation for a geographic point.
///
/// Produced by the external data-fetch collaborator; immutable once
/// created. A series is a finite ordered sequence of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdviSample {
    pub date: NaiveDate,
    pub ndvi: f64,
    pub lat: f64,
    pub lon: f64,
    /// Optional human-readable location name from the fetch layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl NdviSample {
    pub fn new(date: NaiveDate, ndvi: f64, lat: f64, lon: f64) -> Self {
        Self {
            date,
            ndvi,
            lat,
            lon,
            location: None,
        }
    }
}

/// Bloom event intensity classes, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BloomIntensity {
    Low,
    Moderate,
    High,
    Extreme,
}

impl BloomIntensity {
    /// Ordinal score used by pattern analysis (low=1 .. extreme=4).
    pub fn score(self) -> u8 {
        match self {
            BloomIntensity::Low => 1,
            BloomIntensity::Moderate => 2,
            BloomIntensity::High => 3,
            BloomIntensity::Extreme => 4,
        }
    }
}

impl std::fmt::Display for BloomIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BloomIntensity::Low => write!(f, "low"),
            BloomIntensity::Moderate => write!(f, "moderate"),
            BloomIntensity::High => write!(f, "high"),
            BloomIntensity::Extreme => write!(f, "extreme"),
        }
    }
}

/// A detected period of significant vegetation green-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloomEvent {
    pub start_date: NaiveDate,
    pub peak_date: NaiveDate,
    /// Absent when the bloom is still ongoing at series end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub peak_ndvi: f64,
    pub intensity: BloomIntensity,
    /// Detection confidence, percent in [0, 100].
    pub confidence: f64,
}

/// Likelihood grade attached to a bloom forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BloomLikelihood {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for BloomLikelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BloomLikelihood::Low => write!(f, "low"),
            BloomLikelihood::Moderate => write!(f, "moderate"),
            BloomLikelihood::High => write!(f, "high"),
        }
    }
}

/// A forward-looking bloom forecast (month granularity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloomPrediction {
    pub predicted_date: NaiveDate,
    /// Forecast confidence, percent in [0, 100].
    pub confidence: f64,
    /// Human-readable contributing reasons, in fixed emission order.
    pub factors: Vec<String>,
    pub likelihood: BloomLikelihood,
}

/// Direction of the series-level vegetation trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VegetationTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl std::fmt::Display for VegetationTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VegetationTrend::Increasing => write!(f, "increasing"),
            VegetationTrend::Decreasing => write!(f, "decreasing"),
            VegetationTrend::Stable => write!(f, "stable"),
        }
    }
}

/// Aggregate descriptive statistics over a series.
///
/// Derived purely from the normalized samples; independent of event
/// detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VegetationStats {
    pub avg_ndvi: f64,
    pub min_ndvi: f64,
    pub max_ndvi: f64,
    pub trend: VegetationTrend,
    /// Short-horizon momentum heuristic, percent in [0, 100].
    pub bloom_probability: f64,
}

impl Default for VegetationStats {
    /// The explicit degenerate result for an empty series.
    fn default() -> Self {
        Self {
            avg_ndvi: 0.0,
            min_ndvi: 0.0,
            max_ndvi: 0.0,
            trend: VegetationTrend::Stable,
            bloom_probability: 0.0,
        }
    }
}

/// Categorical summary of a collection of bloom events.
///
/// Labels are strings rather than enums because the empty-input
/// sentinel ("No blooms detected", "Insufficient data", "Unknown")
/// shares these fields with the categorical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    pub average_intensity: String,
    pub bloom_frequency: String,
    pub seasonal_pattern: String,
    pub insights: Vec<String>,
}

/// Vegetation cover classes by NDVI interpretation thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VegetationCover {
    WaterOrBareSoil,
    Sparse,
    Moderate,
    Dense,
    VeryDense,
}

impl std::fmt::Display for VegetationCover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VegetationCover::WaterOrBareSoil => write!(f, "Water/Bare Soil"),
            VegetationCover::Sparse => write!(f, "Sparse Vegetation"),
            VegetationCover::Moderate => write!(f, "Moderate Vegetation"),
            VegetationCover::Dense => write!(f, "Dense Vegetation"),
            VegetationCover::VeryDense => write!(f, "Very Dense Vegetation"),
        }
    }
}

/// Interpret an NDVI value as a vegetation cover class.
pub fn classify_ndvi(ndvi: f64) -> VegetationCover {
    if ndvi < 0.1 {
        VegetationCover::WaterOrBareSoil
    } else if ndvi < 0.2 {
        VegetationCover::Sparse
    } else if ndvi < 0.5 {
        VegetationCover::Moderate
    } else if ndvi < 0.8 {
        VegetationCover::Dense
    } else {
        VegetationCover::VeryDense
    }
}
