//! Error type for explorer computations.

use thiserror::Error;

/// Errors produced by the selection resolver and series shaper.
///
/// None of these is fatal to the application: the UI surfaces them as a blank
/// companion plot. `IndexOutOfRange` in particular means a stale selection
/// was applied after the snapshot it referred to was regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    #[error("selection index {index} is out of range for a dataset of {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("raw display requires exactly one selected row, got {rows}")]
    RawRequiresSingleRow { rows: usize },
}
