pub mod stage1_discriminant;
pub mod stage2_histogram;
pub mod stage3_efficiency;
pub mod stage4_working_points;

use serde::Serialize;
use tracing::info;

use crate::error::{EfficiencyError, Result};
use crate::model::flavor::Flavor;
use crate::model::params::EfficiencyParams;
use crate::model::predictions::PredictionMatrix;
use crate::model::truth::TruthLabels;
use stage1_discriminant::run_stage1;
use stage2_histogram::{Histogram, run_stage2};
use stage3_efficiency::{EfficiencyCurve, run_stage3};
use stage4_working_points::{WorkingPoint, run_stage4};

#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyCurves {
    /// In flavor order `[light, charm, bottom]`.
    pub curves: [EfficiencyCurve; 3],
    pub histogram: Histogram,
    pub working_points: Vec<WorkingPoint>,
    pub discriminant: Option<Vec<f64>>,
    /// Per-sample flavor as resolved from the truth labels.
    #[serde(skip)]
    pub flavors: Vec<Flavor>,
}

impl EfficiencyCurves {
    pub fn curve(&self, flavor: Flavor) -> &EfficiencyCurve {
        &self.curves[flavor.index()]
    }
}

/// Reusable holder of validated parameters.
#[derive(Debug, Clone)]
pub struct EfficiencyCurveComputer {
    params: EfficiencyParams,
}

impl EfficiencyCurveComputer {
    pub fn new(params: EfficiencyParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &EfficiencyParams {
        &self.params
    }

    pub fn compute(
        &self,
        predictions: &PredictionMatrix,
        truth: &TruthLabels,
    ) -> Result<EfficiencyCurves> {
        run_pipeline(predictions, truth, &self.params)
    }
}

pub fn compute_efficiency_curves(
    predictions: &PredictionMatrix,
    truth: &TruthLabels,
    params: &EfficiencyParams,
) -> Result<EfficiencyCurves> {
    params.validate()?;
    run_pipeline(predictions, truth, params)
}

fn run_pipeline(
    predictions: &PredictionMatrix,
    truth: &TruthLabels,
    params: &EfficiencyParams,
) -> Result<EfficiencyCurves> {
    if predictions.len() != truth.len() {
        return Err(EfficiencyError::ShapeMismatch {
            predictions: predictions.len(),
            truth: truth.len(),
        });
    }
    if predictions.is_empty() {
        return Err(EfficiencyError::EmptyInput);
    }

    let stage1 = run_stage1(predictions, params.fc_weight, params.denominator_policy)?;
    let flavors = truth.flavors();
    let histogram = run_stage2(&stage1.discriminant, &flavors, params.n_bins)?;
    let curves = run_stage3(&histogram);
    let working_points = run_stage4(&curves, &params.working_points);

    info!(
        n_samples = predictions.len(),
        n_light = curves[0].n_samples,
        n_charm = curves[1].n_samples,
        n_bottom = curves[2].n_samples,
        n_working_points = working_points.len(),
        "efficiency curves computed"
    );

    Ok(EfficiencyCurves {
        curves,
        histogram,
        working_points,
        discriminant: params.return_discriminant.then_some(stage1.discriminant),
        flavors,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
