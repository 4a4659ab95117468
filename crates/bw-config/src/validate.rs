//! Threshold validation errors and semantic validation.

use thiserror::Error;

use crate::thresholds::Thresholds;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Threshold validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

fn invalid(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate a threshold set semantically.
pub fn validate_thresholds(t: &Thresholds) -> ValidationResult<()> {
    let d = &t.detector;
    if d.smoothing_window == 0 {
        return Err(invalid("detector.smoothing_window", "must be positive"));
    }
    if d.baseline_window == 0 {
        return Err(invalid("detector.baseline_window", "must be positive"));
    }
    if d.min_series_len < 5 {
        return Err(invalid(
            "detector.min_series_len",
            "interior peak scan needs at least 5 points",
        ));
    }
    for (field, value) in [
        ("detector.min_increase", d.min_increase),
        ("detector.min_peak_ndvi", d.min_peak_ndvi),
        ("detector.start_margin", d.start_margin),
        ("detector.end_drop", d.end_drop),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(invalid(field, "must be a positive finite number"));
        }
    }
    if !(d.moderate_increase < d.high_increase && d.high_increase < d.extreme_increase) {
        return Err(invalid(
            "detector.moderate_increase",
            format!(
                "intensity cutoffs must be strictly increasing, got {} / {} / {}",
                d.moderate_increase, d.high_increase, d.extreme_increase
            ),
        ));
    }

    let s = &t.stats;
    if !s.trend_band.is_finite() || s.trend_band < 0.0 {
        return Err(invalid("stats.trend_band", "must be non-negative"));
    }
    if s.momentum_window < 2 {
        return Err(invalid(
            "stats.momentum_window",
            "needs at least 2 points to measure an increase",
        ));
    }
    if !s.momentum_scale.is_finite() || s.momentum_scale <= 0.0 {
        return Err(invalid("stats.momentum_scale", "must be positive"));
    }

    let p = &t.predictor;
    if p.recent_window == 0 {
        return Err(invalid("predictor.recent_window", "must be positive"));
    }
    if p.min_series_len < 2 * p.recent_window {
        return Err(invalid(
            "predictor.min_series_len",
            "must cover two trend windows",
        ));
    }
    if !(0.0..=100.0).contains(&p.max_confidence) {
        return Err(invalid(
            "predictor.max_confidence",
            "must be a percentage in [0, 100]",
        ));
    }
    if p.moderate_likelihood >= p.high_likelihood {
        return Err(invalid(
            "predictor.moderate_likelihood",
            "must be below the high-likelihood cutoff",
        ));
    }
    Ok(())
}
