use serde::Serialize;

use crate::model::flavor::Flavor;
use crate::numeric::sum_u64;
use crate::pipeline::stage2_histogram::Histogram;

/// Cumulative efficiency of one flavor, read from the most b-like bin down.
///
/// `efficiency[k]` is the fraction of the flavor's samples whose
/// discriminant is at least `thresholds[k]`, the lower edge of the k-th bin
/// counted from the top. `+inf` samples pass every cut; NaN and `-inf`
/// samples are not counted. Empty when the flavor has no counted samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyCurve {
    pub flavor: Flavor,
    pub efficiency: Vec<f64>,
    pub thresholds: Vec<f64>,
    /// Binned plus overflow samples.
    pub n_samples: u64,
    pub n_overflow: u64,
}

impl EfficiencyCurve {
    pub fn len(&self) -> usize {
        self.efficiency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.efficiency.is_empty()
    }

    /// Efficiency for a cut `D >= threshold`, resolved to bin edges.
    ///
    /// Cuts above the top bin's lower edge keep only the overflow; `None`
    /// for an empty curve.
    pub fn efficiency_at(&self, threshold: f64) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let kept = self.thresholds.iter().take_while(|&&t| t >= threshold).count();
        if kept == 0 {
            Some(self.n_overflow as f64 / self.n_samples as f64)
        } else {
            Some(self.efficiency[kept - 1])
        }
    }

    /// First position whose efficiency reaches `target`.
    pub fn index_for_efficiency(&self, target: f64) -> Option<usize> {
        self.efficiency.iter().position(|&e| e >= target)
    }
}

/// Reversed running sum of `counts`, seeded with `overflow`, divided by the
/// grand total. The last element is exactly 1.0.
pub fn reversed_cumulative_efficiency(counts: &[u64], overflow: u64) -> Vec<f64> {
    let total = sum_u64(counts) + overflow;
    if total == 0 {
        return Vec::new();
    }
    let mut acc = overflow;
    counts
        .iter()
        .rev()
        .map(|&c| {
            acc += c;
            acc as f64 / total as f64
        })
        .collect()
}

pub fn run_stage3(histogram: &Histogram) -> [EfficiencyCurve; 3] {
    let n_bins = histogram.n_bins();
    histogram.flavors.each_ref().map(|fh| {
        let efficiency = reversed_cumulative_efficiency(&fh.counts, fh.n_overflow);
        let thresholds = if efficiency.is_empty() {
            Vec::new()
        } else {
            histogram.edges[..n_bins].iter().rev().copied().collect()
        };
        EfficiencyCurve {
            flavor: fh.flavor,
            efficiency,
            thresholds,
            n_samples: fh.total + fh.n_overflow,
            n_overflow: fh.n_overflow,
        }
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_efficiency.rs"]
mod tests;
