use super::*;
use crate::model::params::EfficiencyParams;
use crate::model::predictions::PredictionMatrix;
use crate::model::truth::TruthLabels;
use crate::pipeline::compute_efficiency_curves;

fn sample_curves(with_disc: bool) -> EfficiencyCurves {
    let predictions = PredictionMatrix::from_rows(vec![
        [0.8, 0.1, 0.1],
        [0.7, 0.2, 0.1],
        [0.2, 0.6, 0.2],
        [0.1, 0.1, 0.8],
        [0.05, 0.15, 0.8],
    ]);
    let truth = TruthLabels::from_indices(&[0, 0, 1, 2, 2]).unwrap();
    let mut params = EfficiencyParams::default();
    params.return_discriminant = with_disc;
    compute_efficiency_curves(&predictions, &truth, &params).unwrap()
}

#[test]
fn test_format() {
    assert_eq!(format_f64_6(0.5), "0.500000");
    assert_eq!(format_opt_6(None), "NA");
    assert_eq!(format_opt_6(Some(2.0)), "2.000000");
}

#[test]
fn test_flavor_summaries_with_discriminant() {
    let curves = sample_curves(true);
    let summaries = flavor_summaries(&curves);
    assert_eq!(summaries[0].n_samples, 2);
    assert_eq!(summaries[1].n_samples, 1);
    assert_eq!(summaries[2].n_samples, 2);
    let b = &summaries[2];
    assert!(b.disc_median.unwrap() > summaries[0].disc_median.unwrap());
    assert!(b.disc_p10.unwrap() <= b.disc_p90.unwrap());
}

#[test]
fn test_flavor_summaries_without_discriminant() {
    let curves = sample_curves(false);
    let summaries = flavor_summaries(&curves);
    assert!(summaries.iter().all(|s| s.disc_median.is_none()));
    assert_eq!(summaries[2].n_samples, 2);
}
