use super::*;

#[test]
fn test_bin_index_edges() {
    let edges = linspace_edges(0.0, 4.0, 4);
    assert_eq!(bin_index(0.0, &edges), 0);
    assert_eq!(bin_index(0.999, &edges), 0);
    assert_eq!(bin_index(1.0, &edges), 1);
    assert_eq!(bin_index(3.5, &edges), 3);
    assert_eq!(bin_index(4.0, &edges), 3);
}

#[test]
fn test_bin_index_consistent_with_edges() {
    let edges = linspace_edges(-3.7, 5.3, 200);
    for i in 0..=1000 {
        let v = -3.7 + 9.0 * i as f64 / 1000.0;
        let v = v.min(5.3);
        let b = bin_index(v, &edges);
        assert!(edges[b] <= v);
        if b < 199 {
            assert!(v < edges[b + 1]);
        }
    }
}

#[test]
fn test_counts_and_density() {
    let disc = [0.0, 1.0, 2.0, 3.0, 4.0, 4.0];
    let flavors = [
        Flavor::Light,
        Flavor::Light,
        Flavor::Charm,
        Flavor::Bottom,
        Flavor::Bottom,
        Flavor::Bottom,
    ];
    let h = run_stage2(&disc, &flavors, 4).unwrap();
    assert_eq!(h.n_bins(), 4);
    assert_eq!(h.range(), (0.0, 4.0));
    assert_eq!(h.bin_width, 1.0);
    assert!(!h.degenerate_range);
    assert_eq!(h.flavor(Flavor::Light).counts, vec![1, 1, 0, 0]);
    assert_eq!(h.flavor(Flavor::Charm).counts, vec![0, 0, 1, 0]);
    assert_eq!(h.flavor(Flavor::Bottom).counts, vec![0, 0, 0, 3]);
    assert_eq!(h.flavor(Flavor::Light).density, vec![0.5, 0.5, 0.0, 0.0]);
    assert_eq!(h.flavor(Flavor::Bottom).density, vec![0.0, 0.0, 0.0, 1.0]);

    for fh in &h.flavors {
        let integral: f64 = fh.density.iter().map(|d| d * h.bin_width).sum();
        assert!((integral - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_degenerate_range_widened() {
    let disc = [1.5, 1.5, 1.5];
    let flavors = [Flavor::Bottom, Flavor::Bottom, Flavor::Light];
    let h = run_stage2(&disc, &flavors, 200).unwrap();
    assert!(h.degenerate_range);
    assert_eq!(h.range(), (1.0, 2.0));
    let b = h.flavor(Flavor::Bottom);
    assert_eq!(b.total, 2);
    assert_eq!(b.counts[100], 2);
    assert_eq!(sum_u64(&b.counts), 2);
}

#[test]
fn test_empty_flavor_has_zero_density() {
    let disc = [0.0, 1.0];
    let flavors = [Flavor::Bottom, Flavor::Bottom];
    let h = run_stage2(&disc, &flavors, 10).unwrap();
    let light = h.flavor(Flavor::Light);
    assert_eq!(light.total, 0);
    assert!(light.density.iter().all(|&d| d == 0.0));
}

#[test]
fn test_non_finite_values_overflow_and_unbinned() {
    let disc = [0.0, f64::INFINITY, 1.0, f64::NAN, f64::NEG_INFINITY];
    let flavors = [
        Flavor::Light,
        Flavor::Bottom,
        Flavor::Bottom,
        Flavor::Charm,
        Flavor::Light,
    ];
    let h = run_stage2(&disc, &flavors, 2).unwrap();
    assert_eq!(h.range(), (0.0, 1.0));
    let b = h.flavor(Flavor::Bottom);
    assert_eq!(b.total, 1);
    assert_eq!(b.n_overflow, 1);
    assert_eq!(b.n_unbinned, 0);
    assert_eq!(h.flavor(Flavor::Charm).n_unbinned, 1);
    assert_eq!(h.flavor(Flavor::Light).n_unbinned, 1);
    assert_eq!(h.flavor(Flavor::Light).n_overflow, 0);
}

#[test]
fn test_all_non_finite_has_no_sample_index() {
    let disc = [f64::NAN, f64::INFINITY];
    let flavors = [Flavor::Light, Flavor::Bottom];
    assert!(matches!(
        run_stage2(&disc, &flavors, 10),
        Err(EfficiencyError::NoFiniteDiscriminant { n_samples: 2 })
    ));
}
