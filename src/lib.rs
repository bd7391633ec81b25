//! Per-flavor tagging efficiency curves for three-class jet-flavor classifiers.
//!
//! Predictions `[p_l, p_c, p_b]` are folded into the log-likelihood-ratio
//! discriminant `D = ln(p_b / (fc * p_c + (1 - fc) * p_l))`, histogrammed per
//! true flavor on a shared range, and each histogram is turned into a
//! cumulative efficiency curve summed from the most b-like bin downwards.

pub mod error;
pub mod logging;
pub mod model;
pub mod numeric;
pub mod pipeline;
pub mod report;

pub use error::{EfficiencyError, Result};
pub use model::flavor::Flavor;
pub use model::params::{DenominatorPolicy, EfficiencyParams};
pub use model::predictions::PredictionMatrix;
pub use model::truth::TruthLabels;
pub use pipeline::{EfficiencyCurveComputer, EfficiencyCurves, compute_efficiency_curves};
pub use pipeline::stage2_histogram::{FlavorHistogram, Histogram};
pub use pipeline::stage3_efficiency::EfficiencyCurve;
pub use pipeline::stage4_working_points::WorkingPoint;
