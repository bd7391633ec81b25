use crate::error::{EfficiencyError, Result};
use crate::model::flavor::Flavor;

/// True flavor of each sample, either one-hot rows or class indices.
#[derive(Debug, Clone, PartialEq)]
pub enum TruthLabels {
    /// Flavor is the argmax of the row.
    OneHot(Vec<[f64; 3]>),
    Index(Vec<Flavor>),
}

impl TruthLabels {
    pub fn one_hot(rows: Vec<[f64; 3]>) -> Self {
        TruthLabels::OneHot(rows)
    }

    pub fn from_indices(indices: &[usize]) -> Result<Self> {
        let mut flavors = Vec::with_capacity(indices.len());
        for (sample, &value) in indices.iter().enumerate() {
            let flavor = Flavor::from_index(value)
                .ok_or(EfficiencyError::InvalidLabel { sample, value })?;
            flavors.push(flavor);
        }
        Ok(TruthLabels::Index(flavors))
    }

    pub fn len(&self) -> usize {
        match self {
            TruthLabels::OneHot(rows) => rows.len(),
            TruthLabels::Index(flavors) => flavors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn flavor_of(&self, sample: usize) -> Option<Flavor> {
        match self {
            TruthLabels::OneHot(rows) => rows.get(sample).map(Flavor::argmax),
            TruthLabels::Index(flavors) => flavors.get(sample).copied(),
        }
    }

    pub fn flavors(&self) -> Vec<Flavor> {
        match self {
            TruthLabels::OneHot(rows) => rows.iter().map(Flavor::argmax).collect(),
            TruthLabels::Index(flavors) => flavors.clone(),
        }
    }
}

impl From<Vec<Flavor>> for TruthLabels {
    fn from(flavors: Vec<Flavor>) -> Self {
        TruthLabels::Index(flavors)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/truth.rs"]
mod tests;
