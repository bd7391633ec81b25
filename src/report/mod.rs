pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::flavor::{FLAVOR_ORDER, Flavor};
use crate::numeric::{median, p10, p90};
use crate::pipeline::EfficiencyCurves;

#[derive(Debug, Clone, Serialize)]
pub struct FlavorSummary {
    pub flavor: Flavor,
    pub n_samples: u64,
    pub n_overflow: u64,
    pub n_unbinned: u64,
    pub disc_median: Option<f64>,
    pub disc_p10: Option<f64>,
    pub disc_p90: Option<f64>,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_opt_6(v: Option<f64>) -> String {
    v.map(format_f64_6).unwrap_or_else(|| "NA".to_string())
}

/// Discriminant quantiles need the raw values, so they are `None` unless the
/// curves were computed with `return_discriminant`.
pub fn flavor_summaries(curves: &EfficiencyCurves) -> [FlavorSummary; 3] {
    FLAVOR_ORDER.map(|flavor| {
        let hist = curves.histogram.flavor(flavor);
        let values: Option<Vec<f64>> = curves.discriminant.as_ref().map(|disc| {
            disc.iter()
                .zip(&curves.flavors)
                .filter(|&(v, &f)| f == flavor && v.is_finite())
                .map(|(&v, _)| v)
                .collect()
        });
        let values = values.filter(|v| !v.is_empty());
        FlavorSummary {
            flavor,
            n_samples: hist.total + hist.n_overflow,
            n_overflow: hist.n_overflow,
            n_unbinned: hist.n_unbinned,
            disc_median: values.as_deref().map(median),
            disc_p10: values.as_deref().map(p10),
            disc_p90: values.as_deref().map(p90),
        }
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
