//! Selection events and their resolution against the current dataset.
//!
//! Selections are always expressed in absolute row/point indices — the index
//! metadata the scatter panel tags every rendered point with — never in
//! positions within a filtered subset.

use crate::data::dataset::Dataset;
use crate::error::ExplorerError;

/// A user interaction on the scatter plot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionEvent {
    /// No selection active.
    #[default]
    None,
    /// A single click on one point.
    Click(usize),
    /// A sweep (box/lasso) selection over zero or more points, in the order
    /// the points were gathered.
    Lasso(Vec<usize>),
}

impl SelectionEvent {
    /// `true` when resolving this event yields an empty subset.
    pub fn is_empty(&self) -> bool {
        match self {
            SelectionEvent::None => true,
            SelectionEvent::Click(_) => false,
            SelectionEvent::Lasso(indices) => indices.is_empty(),
        }
    }

    /// Number of points this event refers to.
    pub fn len(&self) -> usize {
        match self {
            SelectionEvent::None => 0,
            SelectionEvent::Click(_) => 1,
            SelectionEvent::Lasso(indices) => indices.len(),
        }
    }
}

/// The dataset rows a selection resolves to.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Subset {
    /// Nothing selected; shapes into a blank plot.
    #[default]
    Empty,
    /// A single unwrapped row, from a click. The shaper returns it verbatim
    /// regardless of display mode.
    Single(Vec<f64>),
    /// One or more full rows, in selection order.
    Rows(Vec<Vec<f64>>),
}

impl Subset {
    pub fn is_empty(&self) -> bool {
        matches!(self, Subset::Empty)
    }
}

/// Resolve a selection event to the concrete rows it refers to.
///
/// An out-of-bounds index is an error, never silently dropped: under correct
/// UI wiring it cannot happen, but a selection taken before a regeneration
/// can legitimately reference rows the new snapshot no longer has. Callers
/// render that case as a blank plot.
pub fn resolve(event: &SelectionEvent, dataset: &Dataset) -> Result<Subset, ExplorerError> {
    let fetch = |index: usize| {
        dataset
            .row(index)
            .map(|r| r.to_vec())
            .ok_or(ExplorerError::IndexOutOfRange {
                index,
                len: dataset.len(),
            })
    };

    match event {
        SelectionEvent::Lasso(indices) if !indices.is_empty() => {
            let mut rows = Vec::with_capacity(indices.len());
            for &i in indices {
                rows.push(fetch(i)?);
            }
            Ok(Subset::Rows(rows))
        }
        SelectionEvent::Click(index) => Ok(Subset::Single(fetch(*index)?)),
        _ => Ok(Subset::Empty),
    }
}
