//! Partitioning latent points into named scatter groups.
//!
//! Each rendered group keeps the absolute index of every member point as
//! cross-reference metadata; the selection resolver reads those indices back
//! from interaction events. This module is a pure data transform — legend and
//! color handling live with the renderer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::dataset::{LatentPoint, LatentPointSet};

/// Sentinel id for points with no label ("Unlabeled"); on the label filter
/// axis the same value acts as a wildcard that matches every label.
pub const UNLABELED: i64 = -1;

/// Which point attribute partitions the scatter into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupBy {
    #[default]
    Label,
    Cluster,
}

impl GroupBy {
    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Label => "Label",
            GroupBy::Cluster => "Cluster",
        }
    }
}

/// The grouping value for a point under the given key; missing assignments
/// fall back to [`UNLABELED`].
pub fn grouping_value(point: &LatentPoint, group_by: GroupBy) -> i64 {
    match group_by {
        GroupBy::Label => point.label.unwrap_or(UNLABELED),
        GroupBy::Cluster => point.cluster.unwrap_or(UNLABELED),
    }
}

/// Mapping from small integer group ids to display names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameMap {
    names: BTreeMap<i64, String>,
}

impl NameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>>(&mut self, id: i64, name: S) {
        self.names.insert(id, name.into());
    }

    /// Display name for an id: the mapped name, "Unlabeled" for the sentinel,
    /// or the bare id.
    pub fn display_name(&self, id: i64) -> String {
        if let Some(name) = self.names.get(&id) {
            name.clone()
        } else if id == UNLABELED {
            "Unlabeled".to_string()
        } else {
            id.to_string()
        }
    }

    /// Known ids in ascending order (for filter combo boxes).
    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.names.keys().copied()
    }
}

/// Restricts which points are projected.
///
/// `None` on an axis means "all". A label filter of [`UNLABELED`] also
/// matches every label — it is the "Unlabeled/All" slot of the label combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScatterFilter {
    pub cluster: Option<i64>,
    pub label: Option<i64>,
}

impl ScatterFilter {
    /// All clusters and all labels.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_cluster(mut self, cluster: i64) -> Self {
        self.cluster = Some(cluster);
        self
    }

    pub fn with_label(mut self, label: i64) -> Self {
        self.label = Some(label);
        self
    }

    pub fn matches(&self, point: &LatentPoint) -> bool {
        if let Some(cluster) = self.cluster {
            if point.cluster.unwrap_or(UNLABELED) != cluster {
                return false;
            }
        }
        match self.label {
            None => true,
            Some(UNLABELED) => true,
            Some(label) => point.label.unwrap_or(UNLABELED) == label,
        }
    }
}

/// One renderable scatter series: a named set of coordinates plus the
/// absolute index of each member point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointGroup {
    pub name: String,
    /// The grouping value (label or cluster id) shared by every member.
    pub value: i64,
    pub coords: Vec<[f64; 3]>,
    pub original_indices: Vec<usize>,
}

impl PointGroup {
    pub fn len(&self) -> usize {
        self.original_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original_indices.is_empty()
    }
}

/// Partition `points` into one group per distinct grouping value, after
/// applying `filter`.
///
/// Groups come back sorted by grouping value ascending, and only groups with
/// at least one member are emitted — a filter matching nothing yields an
/// empty vec. `n_components` (2 or 3) selects how many coordinate components
/// are meaningful to the renderer; the partitioning itself is identical.
pub fn project(
    points: &LatentPointSet,
    n_components: usize,
    group_by: GroupBy,
    filter: ScatterFilter,
    names: &NameMap,
) -> Vec<PointGroup> {
    debug_assert!(n_components == 2 || n_components == 3);

    let mut groups: BTreeMap<i64, PointGroup> = BTreeMap::new();
    for (index, point) in points.points.iter().enumerate() {
        if !filter.matches(point) {
            continue;
        }
        let value = grouping_value(point, group_by);
        let group = groups.entry(value).or_insert_with(|| PointGroup {
            name: names.display_name(value),
            value,
            coords: Vec::new(),
            original_indices: Vec::new(),
        });
        let mut coords = point.coords;
        if n_components == 2 {
            coords[2] = 0.0;
        }
        group.coords.push(coords);
        group.original_indices.push(index);
    }
    groups.into_values().collect()
}
