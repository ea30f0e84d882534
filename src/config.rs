//! Configuration types shared across the explorer UI.

use crate::data::projection::{GroupBy, ScatterFilter};
use crate::data::series::DisplayMode;
use crate::events::EventController;

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off.
///
/// All features default to `true` (enabled). Disable features to create a
/// minimal, focused UI for embedded dashboards.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Show the controls strip above the plots.
    pub controls: bool,
    /// Show the regenerate button.
    pub regenerate: bool,
    /// Show the display mode (raw/mean/sigma) selector.
    pub mode_selector: bool,
    /// Show the group-by selector.
    pub grouping: bool,
    /// Show the cluster/label filter combos.
    pub filters: bool,
    /// Show the scatter plot legend.
    pub legend: bool,
    /// Show the point-size slider.
    pub point_size: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            controls: true,
            regenerate: true,
            mode_selector: true,
            grouping: true,
            filters: true,
            legend: true,
            point_size: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Controllers sub-config
// ─────────────────────────────────────────────────────────────────────────────

/// Optional programmatic controllers attached to the explorer.
#[derive(Clone, Default)]
pub struct Controllers {
    pub event: Option<EventController>,
}

// ─────────────────────────────────────────────────────────────────────────────
// ExplorerConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the explorer window.
#[derive(Clone)]
pub struct ExplorerConfig {
    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the plots.
    pub headline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Initial view state ───────────────────────────────────────────────────
    /// Projection dimensionality (2 or 3 meaningful coordinate components).
    pub n_components: usize,
    /// Display mode the series plot starts in.
    pub mode: DisplayMode,
    /// Grouping key the scatter starts with.
    pub group_by: GroupBy,
    /// Initial cluster/label filter.
    pub filter: ScatterFilter,
    /// Seed for the first generated snapshot; `None` seeds from entropy.
    pub seed: Option<u64>,

    // ── Feature flags ────────────────────────────────────────────────────────
    /// Toggle individual UI features on/off.
    pub features: FeatureFlags,

    // ── Programmatic controllers ─────────────────────────────────────────────
    /// External controllers for programmatic interaction.
    pub controllers: Controllers,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            title: "LatentScope".to_string(),
            headline: None,
            native_options: None,

            n_components: 2,
            mode: DisplayMode::default(),
            group_by: GroupBy::default(),
            filter: ScatterFilter::all(),
            seed: None,

            features: FeatureFlags::default(),
            controllers: Controllers::default(),
        }
    }
}
