use latentscope::{generate_dataset, generate_latent_points, DATASET_ROWS, SAMPLES_PER_ROW};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn dataset_has_fixed_shape_and_open_unit_range() {
    let mut rng = StdRng::seed_from_u64(1);
    let ds = generate_dataset(&mut rng);
    assert_eq!(ds.len(), DATASET_ROWS);
    for row in &ds.rows {
        assert_eq!(row.len(), SAMPLES_PER_ROW);
        for &v in row {
            assert!(v > 0.0 && v <= 1.0, "bump values must lie in (0, 1], got {v}");
        }
    }
}

#[test]
fn every_row_peaks_near_one_somewhere() {
    // The bump maximum over x in [0,1] is exp of a non-positive exponent close
    // to zero whenever the mean falls inside the sampled range, so each row
    // should carry at least one clearly large sample.
    let mut rng = StdRng::seed_from_u64(7);
    let ds = generate_dataset(&mut rng);
    for (i, row) in ds.rows.iter().enumerate() {
        let max = row.iter().cloned().fold(f64::MIN, f64::max);
        assert!(max > 0.5, "row {i} has suspiciously flat peak {max}");
    }
}

#[test]
fn latent_points_are_two_dimensional_and_paired() {
    let mut rng = StdRng::seed_from_u64(2);
    let points = generate_latent_points(&mut rng);
    assert_eq!(points.len(), DATASET_ROWS);
    for p in &points.points {
        assert_eq!(p.coords[2], 0.0, "generated points are 2D");
        assert!(p.cluster.is_none() && p.label.is_none());
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    assert_eq!(generate_dataset(&mut a), generate_dataset(&mut b));
    assert_eq!(generate_latent_points(&mut a), generate_latent_points(&mut b));
}

#[test]
fn regenerate_pairs_dataset_and_points() {
    let mut rng = StdRng::seed_from_u64(3);
    let snapshot = latentscope::regenerate(&mut rng);
    assert_eq!(snapshot.dataset.len(), snapshot.latent.len());
}
