use serde::Serialize;
use tracing::warn;

use crate::model::flavor::Flavor;
use crate::pipeline::stage3_efficiency::EfficiencyCurve;

/// Background efficiencies at the cut where the b-efficiency reaches a target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkingPoint {
    pub target: f64,
    pub index: usize,
    pub threshold: f64,
    pub b_efficiency: f64,
    pub c_efficiency: Option<f64>,
    pub l_efficiency: Option<f64>,
    /// `1 / c_efficiency`; `None` when no charm sample passes or there are none.
    pub c_rejection: Option<f64>,
    pub l_rejection: Option<f64>,
}

pub fn run_stage4(curves: &[EfficiencyCurve; 3], targets: &[f64]) -> Vec<WorkingPoint> {
    let bottom = &curves[Flavor::Bottom.index()];
    if bottom.is_empty() {
        if !targets.is_empty() {
            warn!("no b-jets in sample; working points skipped");
        }
        return Vec::new();
    }
    let charm = &curves[Flavor::Charm.index()];
    let light = &curves[Flavor::Light.index()];

    let mut out = Vec::with_capacity(targets.len());
    for &target in targets {
        let Some(index) = bottom.index_for_efficiency(target) else {
            continue;
        };
        let c_efficiency = charm.efficiency.get(index).copied();
        let l_efficiency = light.efficiency.get(index).copied();
        out.push(WorkingPoint {
            target,
            index,
            threshold: bottom.thresholds[index],
            b_efficiency: bottom.efficiency[index],
            c_efficiency,
            l_efficiency,
            c_rejection: rejection(c_efficiency),
            l_rejection: rejection(l_efficiency),
        });
    }
    out
}

fn rejection(efficiency: Option<f64>) -> Option<f64> {
    efficiency.filter(|&e| e > 0.0).map(|e| 1.0 / e)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_working_points.rs"]
mod tests;
