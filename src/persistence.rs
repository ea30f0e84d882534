//! View-state persistence: save and load explorer view settings as JSON.
//!
//! Only view settings are persisted — the data itself (rows and latent
//! points) is regenerated on demand and never written to disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::projection::{GroupBy, ScatterFilter};
use crate::data::series::DisplayMode;
use crate::panels::ExplorerPanel;

// ---------- Serializable mirror types ----------

/// Serializable mirror of the explorer's view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewStateSerde {
    pub mode: DisplayMode,
    pub group_by: GroupBy,
    pub filter: ScatterFilter,
    pub n_components: usize,
    pub show_legend: bool,
    pub point_size: f32,
}

impl From<&ExplorerPanel> for ViewStateSerde {
    fn from(panel: &ExplorerPanel) -> Self {
        Self {
            mode: panel.mode,
            group_by: panel.group_by,
            filter: panel.filter,
            n_components: panel.n_components,
            show_legend: panel.show_legend,
            point_size: panel.point_size,
        }
    }
}

impl ViewStateSerde {
    /// Apply stored settings to an explorer panel.
    pub fn apply_to(self, panel: &mut ExplorerPanel) {
        panel.mode = self.mode;
        panel.group_by = self.group_by;
        panel.filter = self.filter;
        panel.n_components = self.n_components;
        panel.show_legend = self.show_legend;
        panel.point_size = self.point_size;
    }
}

// ---------- Public API ----------

/// Serialize the view state as pretty JSON.
pub fn view_state_to_json(state: &ViewStateSerde) -> Result<String, String> {
    serde_json::to_string_pretty(state).map_err(|e| e.to_string())
}

/// Deserialize view state from JSON.
pub fn view_state_from_json(json: &str) -> Result<ViewStateSerde, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Save the view state to a JSON file at the given path.
pub fn save_view_state_to_path(state: &ViewStateSerde, path: &Path) -> Result<(), String> {
    let txt = view_state_to_json(state)?;
    std::fs::write(path, txt).map_err(|e| e.to_string())
}

/// Load the view state from a JSON file at the given path.
pub fn load_view_state_from_path(path: &Path) -> Result<ViewStateSerde, String> {
    let txt = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    view_state_from_json(&txt)
}
