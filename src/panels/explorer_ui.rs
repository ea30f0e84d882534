//! The central explorer widget.
//!
//! `ExplorerPanel` owns the current snapshot and all view state, and renders
//! the controls strip plus the scatter / series plot pair. It can be used:
//!
//! * **Standalone** – wrapped inside [`ExplorerApp`](crate::app::ExplorerApp)
//!   and driven by the eframe event loop.
//! * **Embedded** – placed inside a parent egui application by calling
//!   [`ExplorerPanel::update`] from the host's frame code.

use std::collections::{BTreeSet, HashMap};

use eframe::egui;
use egui_phosphor::regular::{ARROWS_CLOCKWISE, BROOM};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ExplorerConfig, FeatureFlags};
use crate::data::dataset::Snapshot;
use crate::data::generate;
use crate::data::group_look::GroupLook;
use crate::data::projection::{
    self, GroupBy, NameMap, PointGroup, ScatterFilter, UNLABELED,
};
use crate::data::selection::{self, SelectionEvent};
use crate::data::series::{self, DisplayMode, SeriesData};
use crate::events::{EventController, EventKind, ExplorerEvent};
use crate::panels::scatter_ui::ScatterPanel;
use crate::panels::series_ui::SeriesPanel;

pub struct ExplorerPanel {
    snapshot: Snapshot,
    selection: SelectionEvent,

    // View state (mirrored by persistence::ViewStateSerde).
    pub mode: DisplayMode,
    pub group_by: GroupBy,
    pub filter: ScatterFilter,
    pub n_components: usize,
    pub show_legend: bool,
    pub point_size: f32,

    pub cluster_names: NameMap,
    pub label_names: NameMap,
    pub features: FeatureFlags,

    looks: HashMap<i64, GroupLook>,
    events: Option<EventController>,
    rng: StdRng,
    scatter: ScatterPanel,
    series: SeriesPanel,
}

impl Default for ExplorerPanel {
    fn default() -> Self {
        Self::from_config(&ExplorerConfig::default())
    }
}

impl ExplorerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: &ExplorerConfig) -> Self {
        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let snapshot = generate::regenerate(&mut rng);
        Self {
            snapshot,
            selection: SelectionEvent::None,
            mode: cfg.mode,
            group_by: cfg.group_by,
            filter: cfg.filter,
            n_components: cfg.n_components,
            show_legend: true,
            point_size: 4.0,
            cluster_names: NameMap::new(),
            label_names: NameMap::new(),
            features: cfg.features.clone(),
            looks: HashMap::new(),
            events: cfg.controllers.event.clone(),
            rng,
            scatter: ScatterPanel::default(),
            series: SeriesPanel::default(),
        }
    }

    // ── Snapshot & selection ─────────────────────────────────────────────────

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn selection(&self) -> &SelectionEvent {
        &self.selection
    }

    /// Replace the snapshot with a freshly generated pair and drop the
    /// current selection (its indices refer to the old snapshot).
    pub fn regenerate(&mut self) {
        self.snapshot = generate::regenerate(&mut self.rng);
        log::info!(
            "regenerated snapshot: {} rows, {} latent points",
            self.snapshot.dataset.len(),
            self.snapshot.latent.len()
        );
        let had_selection = !self.selection.is_empty();
        self.selection = SelectionEvent::None;

        let mut kinds = EventKind::REGENERATED;
        if had_selection {
            kinds |= EventKind::SELECTION_CLEARED;
        }
        let mut ev = ExplorerEvent::new(kinds);
        ev.snapshot_len = Some(self.snapshot.dataset.len());
        self.emit(ev);
    }

    /// Install an externally built snapshot (e.g. labeled points from a demo
    /// or a host application). Clears the selection like a regeneration.
    pub fn set_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.selection = SelectionEvent::None;
        let mut ev = ExplorerEvent::new(EventKind::REGENERATED);
        ev.snapshot_len = Some(self.snapshot.dataset.len());
        self.emit(ev);
    }

    /// Apply a selection, as produced by the scatter panel or an embedding
    /// caller. A multi-row selection cannot be displayed raw, so an active
    /// Raw mode falls over to Mean first.
    pub fn set_selection(&mut self, event: SelectionEvent) {
        if event.len() > 1 && self.mode == DisplayMode::Raw {
            self.set_mode(DisplayMode::Mean);
        }

        let kinds = match &event {
            SelectionEvent::None => EventKind::SELECTION_CLEARED,
            SelectionEvent::Click(_) => EventKind::CLICK | EventKind::SELECTION_CHANGED,
            SelectionEvent::Lasso(indices) if indices.is_empty() => {
                EventKind::SWEEP | EventKind::SELECTION_CLEARED
            }
            SelectionEvent::Lasso(_) => EventKind::SWEEP | EventKind::SELECTION_CHANGED,
        };
        self.selection = event;

        let mut ev = ExplorerEvent::new(kinds);
        ev.selection = Some(self.selection.clone());
        self.emit(ev);
    }

    pub fn clear_selection(&mut self) {
        self.set_selection(SelectionEvent::None);
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        let mut ev = ExplorerEvent::new(EventKind::MODE_CHANGED);
        ev.mode = Some(mode);
        self.emit(ev);
    }

    // ── Derived plot data ────────────────────────────────────────────────────

    /// The scatter groups for the current snapshot, grouping and filter.
    pub fn groups(&self) -> Vec<PointGroup> {
        let names = match self.group_by {
            GroupBy::Label => &self.label_names,
            GroupBy::Cluster => &self.cluster_names,
        };
        projection::project(
            &self.snapshot.latent,
            self.n_components,
            self.group_by,
            self.filter,
            names,
        )
    }

    /// The companion series for the current selection and mode.
    ///
    /// A stale selection (indices outside the current dataset) resolves to
    /// the blank series rather than an error surface.
    pub fn series_data(&self) -> SeriesData {
        let subset = match selection::resolve(&self.selection, &self.snapshot.dataset) {
            Ok(subset) => subset,
            Err(err) => {
                log::debug!("dropping stale selection: {err}");
                return SeriesData::Empty;
            }
        };
        match series::shape(&subset, self.mode) {
            Ok(data) => data,
            Err(err) => {
                log::debug!("cannot shape selection: {err}");
                SeriesData::Empty
            }
        }
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    /// Render the whole explorer into the given `Ui`.
    pub fn update(&mut self, ui: &mut egui::Ui) {
        if self.features.controls {
            self.render_controls(ui);
            ui.separator();
        }

        let groups = self.groups();
        self.ensure_looks(&groups);
        let series_data = self.series_data();

        let mut new_selection = None;
        {
            let looks = &self.looks;
            let scatter = &mut self.scatter;
            let series_panel = &mut self.series;
            let selection = &self.selection;
            let show_legend = self.features.legend && self.show_legend;
            let point_size = self.point_size;
            let mode = self.mode;
            ui.columns(2, |cols| {
                new_selection =
                    scatter.render(&mut cols[0], &groups, looks, selection, show_legend, point_size);
                series_panel.render(&mut cols[1], &series_data, mode);
            });
        }
        if let Some(event) = new_selection {
            if event != self.selection {
                self.set_selection(event);
            }
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            if self.features.regenerate {
                let btn = ui
                    .button(format!("{ARROWS_CLOCKWISE} Regenerate"))
                    .on_hover_text("Replace the dataset and latent points with a fresh random pair");
                if btn.clicked() {
                    self.regenerate();
                }
                ui.separator();
            }

            if self.features.mode_selector {
                ui.label("Display:");
                let multi = self.selection.len() > 1;
                for mode in DisplayMode::all() {
                    let enabled = !(mode == DisplayMode::Raw && multi);
                    let resp = ui.add_enabled(
                        enabled,
                        egui::RadioButton::new(self.mode == mode, mode.label()),
                    );
                    if resp.clicked() {
                        self.set_mode(mode);
                    }
                }
                ui.separator();
            }

            if self.features.grouping {
                self.render_grouping_combo(ui);
            }
            if self.features.filters {
                self.render_filter_combos(ui);
            }

            if self.features.legend {
                ui.checkbox(&mut self.show_legend, "Legend");
            }
            if self.features.point_size {
                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.point_size, 1.0..=10.0));
            }

            if !self.selection.is_empty() {
                ui.separator();
                ui.label(format!("{} selected", self.selection.len()));
                if ui.button(format!("{BROOM} Clear")).clicked() {
                    self.clear_selection();
                }
            }
        });
    }

    fn render_grouping_combo(&mut self, ui: &mut egui::Ui) {
        let group_by = &mut self.group_by;
        let mut changed = false;
        egui::ComboBox::from_label("Group by")
            .selected_text(group_by.label())
            .show_ui(ui, |ui| {
                for option in [GroupBy::Label, GroupBy::Cluster] {
                    changed |= ui
                        .selectable_value(group_by, option, option.label())
                        .changed();
                }
            });
        if changed {
            self.emit(ExplorerEvent::new(EventKind::PROJECTION_CHANGED));
        }
    }

    fn render_filter_combos(&mut self, ui: &mut egui::Ui) {
        let clusters = distinct_values(self.snapshot.latent.points.iter().map(|p| p.cluster));
        let labels = distinct_values(self.snapshot.latent.points.iter().map(|p| p.label));
        let mut changed = false;

        if clusters.iter().any(|&v| v != UNLABELED) {
            let entries: Vec<(i64, String)> = clusters
                .iter()
                .map(|&id| (id, self.cluster_names.display_name(id)))
                .collect();
            let selected_text = match self.filter.cluster {
                None => "All".to_string(),
                Some(id) => self.cluster_names.display_name(id),
            };
            let filter = &mut self.filter;
            egui::ComboBox::from_label("Cluster")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    changed |= ui.selectable_value(&mut filter.cluster, None, "All").changed();
                    for (id, name) in &entries {
                        changed |= ui
                            .selectable_value(&mut filter.cluster, Some(*id), name)
                            .changed();
                    }
                });
        }

        if labels.iter().any(|&v| v != UNLABELED) {
            let entries: Vec<(i64, String)> = labels
                .iter()
                .map(|&id| (id, self.label_names.display_name(id)))
                .collect();
            let selected_text = match self.filter.label {
                None => "All".to_string(),
                Some(id) => self.label_names.display_name(id),
            };
            let filter = &mut self.filter;
            egui::ComboBox::from_label("Label")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    changed |= ui.selectable_value(&mut filter.label, None, "All").changed();
                    for (id, name) in &entries {
                        changed |= ui
                            .selectable_value(&mut filter.label, Some(*id), name)
                            .changed();
                    }
                });
        }

        if changed {
            self.emit(ExplorerEvent::new(EventKind::PROJECTION_CHANGED));
        }
    }

    fn ensure_looks(&mut self, groups: &[PointGroup]) {
        for group in groups {
            if !self.looks.contains_key(&group.value) {
                let look = GroupLook::new(self.looks.len());
                self.looks.insert(group.value, look);
            }
        }
    }

    /// Mutable access to a group's look (color, visibility, marker).
    pub fn look_mut(&mut self, value: i64) -> &mut GroupLook {
        self.looks.entry(value).or_insert_with(GroupLook::default)
    }

    fn emit(&self, event: ExplorerEvent) {
        if let Some(ctrl) = &self.events {
            ctrl.emit(event);
        }
    }
}

fn distinct_values(values: impl Iterator<Item = Option<i64>>) -> Vec<i64> {
    let set: BTreeSet<i64> = values.map(|v| v.unwrap_or(UNLABELED)).collect();
    set.into_iter().collect()
}
