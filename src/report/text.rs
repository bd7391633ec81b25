use crate::model::params::EfficiencyParams;
use crate::pipeline::EfficiencyCurves;
use crate::report::{flavor_summaries, format_f64_6, format_opt_6};

pub fn render_summary_text(curves: &EfficiencyCurves, params: &EfficiencyParams) -> String {
    let mut out = String::new();

    out.push_str("Flavor Tagging Efficiency Summary\n");
    out.push_str("=================================\n\n");
    out.push_str("D = ln[p_b / (fc * p_c + (1 - fc) * p_l)]\n");
    out.push_str(&format!("fc: {}\n", format_f64_6(params.fc_weight)));
    let (lo, hi) = curves.histogram.range();
    out.push_str(&format!(
        "Bins: {} over [{}, {}]\n",
        curves.histogram.n_bins(),
        format_f64_6(lo),
        format_f64_6(hi)
    ));
    if curves.histogram.degenerate_range {
        out.push_str("Note: all discriminant values coincide; range widened by 0.5.\n");
    }
    out.push('\n');

    out.push_str("flavor\tn\toverflow\tunbinned\tD_median\tD_p10\tD_p90\n");
    for s in flavor_summaries(curves) {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            s.flavor.label(),
            s.n_samples,
            s.n_overflow,
            s.n_unbinned,
            format_opt_6(s.disc_median),
            format_opt_6(s.disc_p10),
            format_opt_6(s.disc_p90)
        ));
    }
    out.push('\n');

    if curves.working_points.is_empty() {
        out.push_str("No working points (no b-jets).\n");
        return out;
    }
    out.push_str("target\tcut\teff_b\teff_c\teff_l\trej_c\trej_l\n");
    for wp in &curves.working_points {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            format_f64_6(wp.target),
            format_f64_6(wp.threshold),
            format_f64_6(wp.b_efficiency),
            format_opt_6(wp.c_efficiency),
            format_opt_6(wp.l_efficiency),
            format_opt_6(wp.c_rejection),
            format_opt_6(wp.l_rejection)
        ));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
