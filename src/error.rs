use thiserror::Error;

#[derive(Debug, Error)]
pub enum EfficiencyError {
    #[error("shape mismatch: predictions have {predictions} rows, truth labels have {truth}")]
    ShapeMismatch { predictions: usize, truth: usize },

    #[error("empty input: no samples")]
    EmptyInput,

    #[error("numeric error at sample {sample}: {reason}")]
    Numeric { sample: usize, reason: String },

    #[error("no finite discriminant values among {n_samples} samples")]
    NoFiniteDiscriminant { n_samples: usize },

    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("invalid truth label at sample {sample}: {value} (expected 0, 1 or 2)")]
    InvalidLabel { sample: usize, value: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("config error: {0}")]
    Config(#[source] serde_json::Error),

    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EfficiencyError>;

#[cfg(test)]
#[path = "../tests/src_inline/error.rs"]
mod tests;
