use tracing::debug;

use crate::error::{EfficiencyError, Result};
use crate::model::params::DenominatorPolicy;
use crate::model::predictions::PredictionMatrix;

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub discriminant: Vec<f64>,
    /// Samples carrying inf/NaN; always zero under `Reject`.
    pub n_non_finite: usize,
}

/// `fc * p_c + (1 - fc) * p_l`
#[inline]
pub fn denominator(row: &[f64; 3], fc: f64) -> f64 {
    fc * row[1] + (1.0 - fc) * row[0]
}

/// `ln(p_b / (fc * p_c + (1 - fc) * p_l))` with plain IEEE arithmetic.
#[inline]
pub fn discriminant_value(row: &[f64; 3], fc: f64) -> f64 {
    (row[2] / denominator(row, fc)).ln()
}

pub fn run_stage1(
    predictions: &PredictionMatrix,
    fc: f64,
    policy: DenominatorPolicy,
) -> Result<Stage1Output> {
    let mut discriminant = Vec::with_capacity(predictions.len());
    let mut n_non_finite = 0usize;

    for (sample, row) in predictions.rows().iter().enumerate() {
        let value = discriminant_value(row, fc);
        if policy == DenominatorPolicy::Reject {
            let denom = denominator(row, fc);
            // a negative denominator with a negative p_b still gives a finite log
            if !(denom > 0.0) || !value.is_finite() {
                return Err(EfficiencyError::Numeric {
                    sample,
                    reason: rejection_reason(row, denom, value),
                });
            }
        } else if !value.is_finite() {
            n_non_finite += 1;
        }
        discriminant.push(value);
    }

    debug!(
        n_samples = discriminant.len(),
        n_non_finite, fc, "discriminant computed"
    );
    Ok(Stage1Output {
        discriminant,
        n_non_finite,
    })
}

fn rejection_reason(row: &[f64; 3], denom: f64, value: f64) -> String {
    let [p_l, p_c, p_b] = *row;
    if denom.is_nan() || p_b.is_nan() {
        format!("NaN probability in row [{p_l}, {p_c}, {p_b}]")
    } else if denom <= 0.0 {
        format!("denominator fc*p_c + (1-fc)*p_l = {denom} is not positive")
    } else if p_b <= 0.0 {
        format!("log of non-positive ratio (p_b = {p_b})")
    } else {
        format!("discriminant is {value}")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_discriminant.rs"]
mod tests;
