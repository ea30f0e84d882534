//! Companion series panel: the selected row, or its mean/sigma aggregate.

use egui::{Color32, Ui};
use egui_plot::{Line, Plot};

use crate::data::series::{DisplayMode, SeriesData};

pub struct SeriesPanel {
    pub color: Color32,
    pub width: f32,
}

impl Default for SeriesPanel {
    fn default() -> Self {
        Self {
            color: Color32::from_rgb(31, 119, 180),
            width: 1.5,
        }
    }
}

impl SeriesPanel {
    /// Render the shaped series as a line over integer sample positions.
    ///
    /// An empty series still shows the plot frame, just with nothing in it —
    /// the blank-plot rendering of a cleared or stale selection.
    pub fn render(&mut self, ui: &mut Ui, series: &SeriesData, mode: DisplayMode) {
        let plot = Plot::new("selection_series")
            .allow_scroll(false)
            .x_axis_formatter(|x, _range| {
                let v = x.value;
                if v < 0.0 || v.fract() != 0.0 {
                    String::new()
                } else {
                    format!("{}", v as i64)
                }
            });

        plot.show(ui, |plot_ui| {
            if let SeriesData::Values(_) = series {
                let line = Line::new(mode.label(), series.points())
                    .color(self.color)
                    .width(self.width);
                plot_ui.line(line);
            }
        });
    }
}
