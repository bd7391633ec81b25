use super::*;
use crate::model::predictions::PredictionMatrix;
use crate::model::truth::TruthLabels;
use crate::pipeline::compute_efficiency_curves;

#[test]
fn test_render_summary_text() {
    let predictions = PredictionMatrix::from_rows(vec![
        [0.8, 0.1, 0.1],
        [0.2, 0.6, 0.2],
        [0.1, 0.1, 0.8],
        [0.3, 0.1, 0.6],
    ]);
    let truth = TruthLabels::from_indices(&[0, 1, 2, 2]).unwrap();
    let params = EfficiencyParams::default().with_discriminant();
    let curves = compute_efficiency_curves(&predictions, &truth, &params).unwrap();
    let text = render_summary_text(&curves, &params);

    assert!(text.starts_with("Flavor Tagging Efficiency Summary"));
    assert!(text.contains("fc: 0.070000"));
    assert!(text.contains("Bins: 200 over"));
    assert!(text.contains("b\t2\t0\t0\t"));
    assert!(text.contains("flavor\tn\toverflow\tunbinned"));
    assert!(text.contains("target\tcut\teff_b"));
    assert_eq!(text.lines().filter(|l| l.starts_with("0.")).count(), 4);
}

#[test]
fn test_render_summary_text_without_b_jets() {
    let predictions = PredictionMatrix::from_rows(vec![[0.8, 0.1, 0.1], [0.2, 0.6, 0.2]]);
    let truth = TruthLabels::from_indices(&[0, 1]).unwrap();
    let params = EfficiencyParams::default();
    let curves = compute_efficiency_curves(&predictions, &truth, &params).unwrap();
    let text = render_summary_text(&curves, &params);
    assert!(text.contains("No working points"));
    assert!(text.contains("l\t1\t0\t0\tNA\tNA\tNA"));
}
