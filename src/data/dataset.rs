//! Core data types: dataset rows, latent points, and the snapshot pair the
//! explorer renders from.

/// Number of rows in a generated dataset (and latent points paired with it).
pub const DATASET_ROWS: usize = 20;
/// Number of samples per dataset row.
pub const SAMPLES_PER_ROW: usize = 100;

/// An ordered set of signal rows.
///
/// The positional index 0..N-1 is the stable identity that selections and
/// latent points refer back to; rows are never reordered in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub rows: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at `index`, or `None` when the index is out of bounds.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(|r| r.as_slice())
    }
}

/// A low-dimensional embedding coordinate for one dataset row.
///
/// `coords` always carries three slots; the third is meaningful only when the
/// projection runs with three components. `cluster` and `label` are optional
/// integer group ids used for partitioning and filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatentPoint {
    pub coords: [f64; 3],
    pub cluster: Option<i64>,
    pub label: Option<i64>,
}

impl LatentPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: [x, y, 0.0],
            cluster: None,
            label: None,
        }
    }

    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self {
            coords: [x, y, z],
            cluster: None,
            label: None,
        }
    }

    pub fn with_cluster(mut self, cluster: i64) -> Self {
        self.cluster = Some(cluster);
        self
    }

    pub fn with_label(mut self, label: i64) -> Self {
        self.label = Some(label);
        self
    }
}

/// An ordered set of latent points, index-aligned 1:1 with a [`Dataset`]
/// (point i corresponds to row i).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatentPointSet {
    pub points: Vec<LatentPoint>,
}

impl LatentPointSet {
    pub fn new(points: Vec<LatentPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<&LatentPoint> {
        self.points.get(index)
    }
}

/// The dataset / latent-point pair currently on display.
///
/// A snapshot is immutable: regeneration builds a fresh pair and replaces the
/// whole snapshot, it never mutates rows or points in place. Selections taken
/// against an older snapshot are therefore stale by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub dataset: Dataset,
    pub latent: LatentPointSet,
}

impl Snapshot {
    pub fn new(dataset: Dataset, latent: LatentPointSet) -> Self {
        Self { dataset, latent }
    }
}
