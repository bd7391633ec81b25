use crate::error::{EfficiencyError, Result};
use crate::model::flavor::Flavor;

/// Classifier outputs, one `[p_l, p_c, p_b]` row per sample.
///
/// Rows are not required to sum to one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionMatrix {
    rows: Vec<[f64; 3]>,
}

impl PredictionMatrix {
    pub fn from_rows(rows: Vec<[f64; 3]>) -> Self {
        Self { rows }
    }

    pub fn from_f32_rows(rows: &[[f32; 3]]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|r| [r[0] as f64, r[1] as f64, r[2] as f64])
                .collect(),
        }
    }

    /// Row-major `N x 3` buffer.
    pub fn from_flat(values: &[f64]) -> Result<Self> {
        if values.len() % 3 != 0 {
            return Err(EfficiencyError::InvalidShape(format!(
                "flat prediction buffer of length {} is not a multiple of 3",
                values.len()
            )));
        }
        let rows = values
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[[f64; 3]] {
        &self.rows
    }

    pub fn probability(&self, sample: usize, flavor: Flavor) -> Option<f64> {
        self.rows.get(sample).map(|r| r[flavor.index()])
    }
}

impl From<Vec<[f64; 3]>> for PredictionMatrix {
    fn from(rows: Vec<[f64; 3]>) -> Self {
        Self::from_rows(rows)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/predictions.rs"]
mod tests;
