//! Moving-average smoothing.

/// Edge-shrinking centered moving average.
///
/// For each index `i` the window spans `[max(0, i - w/2),
/// min(n, i + (w+1)/2))`: boundary windows are smaller than `window`,
/// never padded. Output length equals input length. A zero window is
/// treated as 1 (identity).
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let n = values.len();
    let window = window.max(1);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let start = i.saturating_sub(window / 2);
        let end = (i + window.div_ceil(2)).min(n);
        let slice = &values[start..end];
        out.push(slice.iter().sum::<f64>() / slice.len() as f64);
    }
    out
}
