use serde::{Deserialize, Serialize};

/// True jet flavor, indexed like the classifier output columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Light,
    Charm,
    Bottom,
}

pub const FLAVOR_ORDER: [Flavor; 3] = [Flavor::Light, Flavor::Charm, Flavor::Bottom];

impl Flavor {
    pub fn index(self) -> usize {
        match self {
            Flavor::Light => 0,
            Flavor::Charm => 1,
            Flavor::Bottom => 2,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        FLAVOR_ORDER.get(idx).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Flavor::Light => "l",
            Flavor::Charm => "c",
            Flavor::Bottom => "b",
        }
    }

    /// First maximum wins, NaN entries never win.
    pub fn argmax(row: &[f64; 3]) -> Self {
        let mut best = 0usize;
        for idx in 1..3 {
            if row[idx] > row[best] || (row[best].is_nan() && !row[idx].is_nan()) {
                best = idx;
            }
        }
        FLAVOR_ORDER[best]
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-jets", self.label())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/flavor.rs"]
mod tests;
