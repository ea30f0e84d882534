//! Shaping a resolved row subset into the companion series plot.

use serde::{Deserialize, Serialize};

use crate::data::selection::Subset;
use crate::error::ExplorerError;

/// How a multi-row selection collapses into a single plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// The selected row's values, unmodified. Only defined for a single row.
    Raw,
    /// Elementwise arithmetic mean across the selected rows.
    #[default]
    Mean,
    /// Elementwise population standard deviation across the selected rows.
    Sigma,
}

impl DisplayMode {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Raw => "Raw",
            DisplayMode::Mean => "Mean",
            DisplayMode::Sigma => "Sigma",
        }
    }

    /// All modes, for combo/radio UIs.
    pub fn all() -> [DisplayMode; 3] {
        [DisplayMode::Raw, DisplayMode::Mean, DisplayMode::Sigma]
    }
}

/// The values to render in the companion plot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SeriesData {
    /// Nothing to plot; renders as a blank plot with only layout set.
    #[default]
    Empty,
    /// One series of y-values; x-values are the integer sample positions.
    Values(Vec<f64>),
}

impl SeriesData {
    pub fn is_empty(&self) -> bool {
        matches!(self, SeriesData::Empty)
    }

    /// Plot points with x = 0..len integer positions.
    pub fn points(&self) -> Vec<[f64; 2]> {
        match self {
            SeriesData::Empty => Vec::new(),
            SeriesData::Values(values) => values
                .iter()
                .enumerate()
                .map(|(i, &y)| [i as f64, y])
                .collect(),
        }
    }
}

/// Collapse a subset of rows into one series according to `mode`.
///
/// A single unwrapped row passes through verbatim for every mode. Raw is
/// defined only when exactly one row is selected; the UI never produces a
/// multi-row raw request, but the guard keeps the contract explicit.
pub fn shape(subset: &Subset, mode: DisplayMode) -> Result<SeriesData, ExplorerError> {
    match subset {
        Subset::Empty => Ok(SeriesData::Empty),
        Subset::Single(row) => Ok(SeriesData::Values(row.clone())),
        Subset::Rows(rows) => {
            if rows.is_empty() {
                return Ok(SeriesData::Empty);
            }
            match mode {
                DisplayMode::Raw => {
                    if rows.len() == 1 {
                        Ok(SeriesData::Values(rows[0].clone()))
                    } else {
                        Err(ExplorerError::RawRequiresSingleRow { rows: rows.len() })
                    }
                }
                DisplayMode::Mean => Ok(SeriesData::Values(elementwise_mean(rows))),
                DisplayMode::Sigma => Ok(SeriesData::Values(elementwise_sigma(rows))),
            }
        }
    }
}

fn series_len(rows: &[Vec<f64>]) -> usize {
    rows.iter().map(|r| r.len()).min().unwrap_or(0)
}

fn elementwise_mean(rows: &[Vec<f64>]) -> Vec<f64> {
    let n = rows.len() as f64;
    (0..series_len(rows))
        .map(|j| rows.iter().map(|r| r[j]).sum::<f64>() / n)
        .collect()
}

fn elementwise_sigma(rows: &[Vec<f64>]) -> Vec<f64> {
    let n = rows.len() as f64;
    let means = elementwise_mean(rows);
    means
        .iter()
        .enumerate()
        .map(|(j, &m)| {
            let var = rows.iter().map(|r| (r[j] - m) * (r[j] - m)).sum::<f64>() / n;
            var.sqrt()
        })
        .collect()
}
