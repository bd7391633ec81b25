use serde::Serialize;

use crate::error::{EfficiencyError, Result};
use crate::model::params::EfficiencyParams;
use crate::pipeline::EfficiencyCurves;
use crate::pipeline::stage2_histogram::Histogram;
use crate::pipeline::stage3_efficiency::EfficiencyCurve;
use crate::pipeline::stage4_working_points::WorkingPoint;
use crate::report::{FlavorSummary, flavor_summaries};

#[derive(Debug, Serialize)]
struct CurvesDocument<'a> {
    tool: &'static str,
    version: &'static str,
    params: &'a EfficiencyParams,
    summary: [FlavorSummary; 3],
    histogram: &'a Histogram,
    curves: &'a [EfficiencyCurve; 3],
    working_points: &'a [WorkingPoint],
    #[serde(skip_serializing_if = "Option::is_none")]
    discriminant: Option<&'a [f64]>,
}

/// JSON hand-off for plotting layers. Non-finite numbers serialize as `null`.
pub fn render_curves_json(curves: &EfficiencyCurves, params: &EfficiencyParams) -> Result<String> {
    let doc = CurvesDocument {
        tool: "kira-flavoreff",
        version: env!("CARGO_PKG_VERSION"),
        params,
        summary: flavor_summaries(curves),
        histogram: &curves.histogram,
        curves: &curves.curves,
        working_points: &curves.working_points,
        discriminant: curves.discriminant.as_deref(),
    };
    serde_json::to_string_pretty(&doc).map_err(EfficiencyError::Serialization)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
