use serde::{Deserialize, Serialize};

use crate::error::{EfficiencyError, Result};

/// What to do with samples whose discriminant is not a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DenominatorPolicy {
    /// Fail with `EfficiencyError::Numeric` on the first sample with a
    /// non-positive denominator or a non-finite discriminant.
    Reject,
    /// Keep IEEE inf/NaN in the discriminant. `+inf` passes every cut, NaN
    /// and `-inf` are left out of the histograms.
    Propagate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EfficiencyParams {
    /// Weight of the charm probability in the discriminant denominator.
    pub fc_weight: f64,
    pub n_bins: usize,
    pub return_discriminant: bool,
    pub denominator_policy: DenominatorPolicy,
    /// Target b-efficiencies reported as working points.
    pub working_points: Vec<f64>,
}

impl EfficiencyParams {
    /// fc = 0.07 is the c-jet fraction of the ttbar background.
    pub fn ttbar_v1() -> Self {
        Self {
            fc_weight: 0.07,
            n_bins: 200,
            return_discriminant: false,
            denominator_policy: DenominatorPolicy::Reject,
            working_points: vec![0.60, 0.70, 0.77, 0.85],
        }
    }

    pub fn with_fc(mut self, fc_weight: f64) -> Self {
        self.fc_weight = fc_weight;
        self
    }

    pub fn with_discriminant(mut self) -> Self {
        self.return_discriminant = true;
        self
    }

    pub fn with_policy(mut self, policy: DenominatorPolicy) -> Self {
        self.denominator_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.fc_weight > 0.0 && self.fc_weight < 1.0) {
            return Err(EfficiencyError::InvalidParameter(format!(
                "fc_weight must be in (0, 1), got {}",
                self.fc_weight
            )));
        }
        if self.n_bins == 0 {
            return Err(EfficiencyError::InvalidParameter(
                "n_bins must be positive".to_string(),
            ));
        }
        for &wp in &self.working_points {
            if !(wp > 0.0 && wp <= 1.0) {
                return Err(EfficiencyError::InvalidParameter(format!(
                    "working point must be in (0, 1], got {wp}"
                )));
            }
        }
        Ok(())
    }

    /// Parses a JSON object; missing fields fall back to `ttbar_v1`.
    pub fn from_json(text: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(text).map_err(EfficiencyError::Config)?;
        params.validate()?;
        Ok(params)
    }
}

impl Default for EfficiencyParams {
    fn default() -> Self {
        Self::ttbar_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/params.rs"]
mod tests;
