use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{EfficiencyError, Result};
use crate::model::flavor::{FLAVOR_ORDER, Flavor};
use crate::numeric::{finite_min_max, linspace_edges, sum_u64};

#[derive(Debug, Clone, Serialize)]
pub struct FlavorHistogram {
    pub flavor: Flavor,
    pub counts: Vec<u64>,
    /// `count / (total * bin_width)`; all zeros when the flavor is empty.
    pub density: Vec<f64>,
    /// Binned samples, excluding overflow.
    pub total: u64,
    /// `+inf` samples; above every bin, they pass every cut.
    pub n_overflow: u64,
    /// NaN and `-inf` samples, left out entirely.
    pub n_unbinned: u64,
}

/// Per-flavor histograms of the discriminant on one shared binning.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub bin_width: f64,
    /// Set when all binned values coincided and the range was widened by 0.5.
    pub degenerate_range: bool,
    pub flavors: [FlavorHistogram; 3],
}

impl Histogram {
    pub fn n_bins(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    pub fn flavor(&self, flavor: Flavor) -> &FlavorHistogram {
        &self.flavors[flavor.index()]
    }
}

pub fn run_stage2(discriminant: &[f64], flavors: &[Flavor], n_bins: usize) -> Result<Histogram> {
    let (mut lo, mut hi) =
        finite_min_max(discriminant).ok_or(EfficiencyError::NoFiniteDiscriminant {
            n_samples: discriminant.len(),
        })?;

    let degenerate_range = lo == hi;
    if degenerate_range {
        warn!(value = lo, "discriminant range is degenerate; widening by 0.5 on each side");
        lo -= 0.5;
        hi += 0.5;
    }

    let edges = linspace_edges(lo, hi, n_bins);
    let bin_width = (hi - lo) / n_bins as f64;

    let mut counts = [vec![0u64; n_bins], vec![0u64; n_bins], vec![0u64; n_bins]];
    let mut overflow = [0u64; 3];
    let mut unbinned = [0u64; 3];
    for (&value, &flavor) in discriminant.iter().zip(flavors) {
        if value == f64::INFINITY {
            overflow[flavor.index()] += 1;
            continue;
        }
        if !value.is_finite() {
            unbinned[flavor.index()] += 1;
            continue;
        }
        let bin = bin_index(value, &edges);
        counts[flavor.index()][bin] += 1;
    }

    let [l, c, b] = FLAVOR_ORDER.map(|flavor| {
        let idx = flavor.index();
        build_flavor_histogram(
            flavor,
            std::mem::take(&mut counts[idx]),
            overflow[idx],
            unbinned[idx],
            bin_width,
        )
    });

    debug!(
        lo,
        hi,
        n_bins,
        n_light = l.total,
        n_charm = c.total,
        n_bottom = b.total,
        "discriminant histogrammed"
    );

    Ok(Histogram {
        edges,
        bin_width,
        degenerate_range,
        flavors: [l, c, b],
    })
}

/// numpy convention: bins are `[a, b)` except the last, which is `[a, b]`.
/// `value` must lie inside `[edges[0], edges[n]]`.
pub fn bin_index(value: f64, edges: &[f64]) -> usize {
    let n = edges.len() - 1;
    let lo = edges[0];
    let hi = edges[n];
    let mut idx = ((value - lo) * (n as f64 / (hi - lo))) as usize;
    if idx >= n {
        idx = n - 1;
    }
    if idx > 0 && value < edges[idx] {
        idx -= 1;
    } else if idx + 1 < n && value >= edges[idx + 1] {
        idx += 1;
    }
    idx
}

fn build_flavor_histogram(
    flavor: Flavor,
    counts: Vec<u64>,
    n_overflow: u64,
    n_unbinned: u64,
    bin_width: f64,
) -> FlavorHistogram {
    let total = sum_u64(&counts);
    let density = if total == 0 {
        if n_overflow == 0 {
            warn!(%flavor, "no binned samples for flavor; efficiency curve will be empty");
        }
        vec![0.0; counts.len()]
    } else {
        let norm = total as f64 * bin_width;
        counts.iter().map(|&c| c as f64 / norm).collect()
    };
    if n_unbinned > 0 {
        warn!(%flavor, n_unbinned, "NaN or -inf discriminant samples left out of histogram");
    }
    if n_overflow > 0 {
        warn!(%flavor, n_overflow, "+inf discriminant samples counted above the top bin");
    }
    FlavorHistogram {
        flavor,
        counts,
        density,
        total,
        n_overflow,
        n_unbinned,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_histogram.rs"]
mod tests;
