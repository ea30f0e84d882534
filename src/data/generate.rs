//! Synthetic data generation: random Gaussian-bump signal rows and a
//! two-cluster 2D latent point set.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::data::dataset::{
    Dataset, LatentPoint, LatentPointSet, Snapshot, DATASET_ROWS, SAMPLES_PER_ROW,
};

/// Generate [`DATASET_ROWS`] rows of [`SAMPLES_PER_ROW`] samples each.
///
/// Each row is a Gaussian bump `exp(-(x - mean)^2 / (2 sigma^2))` sampled on
/// x linearly spaced over [0, 1], with `mean ~ U[0, 1)` and
/// `sigma ~ U[0.1, 0.5)` drawn independently per row. All values fall in
/// (0, 1].
pub fn generate_dataset<R: Rng + ?Sized>(rng: &mut R) -> Dataset {
    let mut rows = Vec::with_capacity(DATASET_ROWS);
    for _ in 0..DATASET_ROWS {
        let mean = rng.gen_range(0.0..1.0);
        let sigma = rng.gen_range(0.1..0.5);
        let row = (0..SAMPLES_PER_ROW)
            .map(|i| {
                let x = i as f64 / (SAMPLES_PER_ROW - 1) as f64;
                let d = x - mean;
                (-(d * d) / (2.0 * sigma * sigma)).exp()
            })
            .collect();
        rows.push(row);
    }
    Dataset::new(rows)
}

/// Generate [`DATASET_ROWS`] latent points: half from a unit-variance 2D
/// normal centered at (0, 0), half from one centered at (2, 2).
///
/// Points carry no cluster or label assignment; callers attach those
/// afterwards when they want grouped rendering.
pub fn generate_latent_points<R: Rng + ?Sized>(rng: &mut R) -> LatentPointSet {
    let origin = Normal::new(0.0, 1.0).unwrap();
    let offset = Normal::new(2.0, 1.0).unwrap();

    let half = DATASET_ROWS / 2;
    let mut points = Vec::with_capacity(DATASET_ROWS);
    for _ in 0..half {
        points.push(LatentPoint::new(origin.sample(rng), origin.sample(rng)));
    }
    for _ in 0..(DATASET_ROWS - half) {
        points.push(LatentPoint::new(offset.sample(rng), offset.sample(rng)));
    }
    LatentPointSet::new(points)
}

/// Generate a fresh dataset / latent-point pair as one atomic snapshot.
pub fn regenerate<R: Rng + ?Sized>(rng: &mut R) -> Snapshot {
    Snapshot::new(generate_dataset(rng), generate_latent_points(rng))
}
