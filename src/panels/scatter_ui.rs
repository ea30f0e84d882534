//! Scatter plot panel for the latent space.
//!
//! Renders one marker series per point group and turns pointer interaction
//! into [`SelectionEvent`]s:
//! - primary click snaps to the nearest rendered point (within a small
//!   screen-space pick radius); a click on empty space clears the selection
//! - dragging with the secondary button sweeps a selection rectangle

use std::collections::HashMap;

use egui::{Color32, Ui};
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint, Points};

use crate::data::group_look::GroupLook;
use crate::data::projection::PointGroup;
use crate::data::selection::SelectionEvent;

pub struct ScatterPanel {
    /// Maximum screen distance (px) for a click to snap to a point.
    pub pick_radius: f32,

    // Sweep-selection state, in plot coordinates.
    drag_anchor: Option<[f64; 2]>,
    drag_current: Option<[f64; 2]>,
}

impl Default for ScatterPanel {
    fn default() -> Self {
        Self {
            pick_radius: 12.0,
            drag_anchor: None,
            drag_current: None,
        }
    }
}

impl ScatterPanel {
    /// Render the scatter plot and return the selection produced by this
    /// frame's interaction, if any.
    pub fn render(
        &mut self,
        ui: &mut Ui,
        groups: &[PointGroup],
        looks: &HashMap<i64, GroupLook>,
        selection: &SelectionEvent,
        show_legend: bool,
        point_size: f32,
    ) -> Option<SelectionEvent> {
        let mut plot = Plot::new("latent_scatter")
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .data_aspect(1.0);
        if show_legend {
            plot = plot.legend(Legend::default());
        }

        let sweep = self.sweep_corners();
        let selected: Vec<usize> = match selection {
            SelectionEvent::None => Vec::new(),
            SelectionEvent::Click(i) => vec![*i],
            SelectionEvent::Lasso(indices) => indices.clone(),
        };

        let plot_resp = plot.show(ui, |plot_ui| {
            for group in groups {
                let look = looks.get(&group.value).cloned().unwrap_or_default();
                if !look.visible {
                    continue;
                }
                let pts: Vec<[f64; 2]> = group.coords.iter().map(|c| [c[0], c[1]]).collect();
                let points = Points::new(group.name.clone(), pts)
                    .radius(point_size)
                    .shape(look.marker)
                    .color(look.color);
                plot_ui.points(points);
            }

            // Ring markers over the currently selected points.
            if !selected.is_empty() {
                let mut pts: Vec<[f64; 2]> = Vec::with_capacity(selected.len());
                for group in groups {
                    for (coord, index) in group.coords.iter().zip(&group.original_indices) {
                        if selected.contains(index) {
                            pts.push([coord[0], coord[1]]);
                        }
                    }
                }
                if !pts.is_empty() {
                    let ring = Points::new("", pts)
                        .radius(point_size + 2.5)
                        .shape(MarkerShape::Circle)
                        .filled(false)
                        .color(Color32::WHITE);
                    plot_ui.points(ring);
                }
            }

            // Sweep rectangle feedback while dragging.
            if let Some((a, b)) = sweep {
                let corners = vec![
                    [a[0], a[1]],
                    [b[0], a[1]],
                    [b[0], b[1]],
                    [a[0], b[1]],
                    [a[0], a[1]],
                ];
                let outline = Line::new("", corners)
                    .color(Color32::LIGHT_BLUE)
                    .width(1.0)
                    .style(LineStyle::Dashed { length: 4.0 });
                plot_ui.line(outline);
            }
        });

        let response = &plot_resp.response;
        let transform = plot_resp.transform;

        // Sweep selection with the secondary button.
        if response.drag_started_by(egui::PointerButton::Secondary) {
            if let Some(pos) = response.interact_pointer_pos() {
                let p = transform.value_from_position(pos);
                self.drag_anchor = Some([p.x, p.y]);
                self.drag_current = self.drag_anchor;
            }
        } else if response.dragged_by(egui::PointerButton::Secondary) {
            if let Some(pos) = response.interact_pointer_pos() {
                let p = transform.value_from_position(pos);
                self.drag_current = Some([p.x, p.y]);
            }
        } else if response.drag_stopped_by(egui::PointerButton::Secondary) {
            if let (Some(a), Some(b)) = (self.drag_anchor.take(), self.drag_current.take()) {
                return Some(SelectionEvent::Lasso(points_in_rect(groups, looks, a, b)));
            }
        }

        // Click selection with nearest-point snapping (screen space).
        if response.clicked() {
            if let Some(screen_pos) = response.interact_pointer_pos() {
                let mut best_index = None;
                let mut best_d2 = f32::INFINITY;
                for group in groups {
                    let visible = looks.get(&group.value).map(|l| l.visible).unwrap_or(true);
                    if !visible {
                        continue;
                    }
                    for (coord, &index) in group.coords.iter().zip(&group.original_indices) {
                        let sp = transform.position_from_point(&PlotPoint::new(coord[0], coord[1]));
                        let d2 = (sp - screen_pos).length_sq();
                        if d2 < best_d2 {
                            best_d2 = d2;
                            best_index = Some(index);
                        }
                    }
                }
                return match best_index {
                    Some(index) if best_d2.sqrt() <= self.pick_radius => {
                        Some(SelectionEvent::Click(index))
                    }
                    _ => Some(SelectionEvent::None),
                };
            }
        }

        None
    }

    fn sweep_corners(&self) -> Option<([f64; 2], [f64; 2])> {
        match (self.drag_anchor, self.drag_current) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }
}

/// Absolute indices of all visible points inside the rectangle spanned by two
/// opposite corners, in group order.
fn points_in_rect(
    groups: &[PointGroup],
    looks: &HashMap<i64, GroupLook>,
    a: [f64; 2],
    b: [f64; 2],
) -> Vec<usize> {
    let (x_min, x_max) = (a[0].min(b[0]), a[0].max(b[0]));
    let (y_min, y_max) = (a[1].min(b[1]), a[1].max(b[1]));
    let mut indices = Vec::new();
    for group in groups {
        let visible = looks.get(&group.value).map(|l| l.visible).unwrap_or(true);
        if !visible {
            continue;
        }
        for (coord, &index) in group.coords.iter().zip(&group.original_indices) {
            if coord[0] >= x_min && coord[0] <= x_max && coord[1] >= y_min && coord[1] <= y_max {
                indices.push(index);
            }
        }
    }
    indices
}
