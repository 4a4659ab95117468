//! Guard-first slice primitives over `f64` series.
//!
//! Empty or too-short inputs yield `None` or a neutral value; nothing
//! here panics or divides by zero.

/// Arithmetic mean. Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Arithmetic mean with a fallback for empty input.
pub fn mean_or(values: &[f64], default: f64) -> f64 {
    mean(values).unwrap_or(default)
}

/// Minimum and maximum in one pass. Returns `None` for empty input.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    let mut lo = first;
    let mut hi = first;
    for &v in &values[1..] {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    Some((lo, hi))
}

/// Means of the two count-halves of a series.
///
/// The second half receives the remainder element when the length is
/// odd. Returns `None` when either half would be empty (length < 2),
/// so callers can treat the comparison as undecidable instead of
/// dividing by zero.
pub fn half_means(values: &[f64]) -> Option<(f64, f64)> {
    let mid = values.len() / 2;
    let first = mean(&values[..mid])?;
    let second = mean(&values[mid..])?;
    Some((first, second))
}

/// Change over the trailing window: last value minus first value of
/// the final `window` elements (or of the whole series when shorter).
///
/// Returns 0.0 when fewer than two points are available.
pub fn tail_delta(values: &[f64], window: usize) -> f64 {
    let start = values.len().saturating_sub(window);
    let tail = &values[start..];
    match (tail.first(), tail.last()) {
        (Some(first), Some(last)) if tail.len() > 1 => last - first,
        _ => 0.0,
    }
}
