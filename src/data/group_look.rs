//! GroupLook: visual styling for scatter groups.

use eframe::egui;
use egui_plot::MarkerShape;

/// The visual presentation of one scatter group (color, visibility, markers).
#[derive(Debug, Clone)]
pub struct GroupLook {
    pub color: egui::Color32,
    pub visible: bool,
    pub point_size: f32,
    pub marker: MarkerShape,
}

impl Default for GroupLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            visible: true,
            point_size: 4.0,
            marker: MarkerShape::Circle,
        }
    }
}

impl GroupLook {
    /// Create a new GroupLook with a color allocated from the group index.
    pub fn new(index: usize) -> Self {
        Self {
            color: Self::alloc_color(index),
            ..Default::default()
        }
    }

    /// Allocate a distinct color for the given group index.
    pub fn alloc_color(index: usize) -> egui::Color32 {
        const PALETTE: [egui::Color32; 10] = [
            egui::Color32::from_rgb(31, 119, 180),
            egui::Color32::from_rgb(255, 127, 14),
            egui::Color32::from_rgb(44, 160, 44),
            egui::Color32::from_rgb(214, 39, 40),
            egui::Color32::from_rgb(148, 103, 189),
            egui::Color32::from_rgb(140, 86, 75),
            egui::Color32::from_rgb(227, 119, 194),
            egui::Color32::from_rgb(127, 127, 127),
            egui::Color32::from_rgb(188, 189, 34),
            egui::Color32::from_rgb(23, 190, 207),
        ];
        PALETTE[index % PALETTE.len()]
    }
}
