//! Scalar reductions shared by the pipeline stages.

pub fn sum_u64(values: &[u64]) -> u64 {
    let mut sum = 0u64;
    for &v in values {
        sum += v;
    }
    sum
}

/// Minimum and maximum over the finite entries; `None` if there are none.
pub fn finite_min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        seen = true;
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    if seen { Some((min, max)) } else { None }
}

/// `n + 1` equally spaced edges over `[lo, hi]`; the last edge is exactly `hi`.
pub fn linspace_edges(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / n as f64;
    let mut edges = Vec::with_capacity(n + 1);
    for i in 0..n {
        edges.push(lo + i as f64 * step);
    }
    edges.push(hi);
    edges
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx.min(n - 1)]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

#[cfg(test)]
#[path = "../tests/src_inline/numeric.rs"]
mod tests;
