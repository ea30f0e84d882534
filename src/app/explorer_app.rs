//! Standalone eframe wrapper around [`ExplorerPanel`].

use eframe::egui;

use crate::config::ExplorerConfig;
use crate::panels::ExplorerPanel;

/// The explorer as a self-contained eframe application.
///
/// Embedding callers that already run their own eframe app should use
/// [`ExplorerPanel`] directly instead.
pub struct ExplorerApp {
    panel: ExplorerPanel,
    headline: Option<String>,
}

impl ExplorerApp {
    pub fn new(cfg: &ExplorerConfig) -> Self {
        Self {
            panel: ExplorerPanel::from_config(cfg),
            headline: cfg.headline.clone(),
        }
    }

    pub fn panel(&self) -> &ExplorerPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut ExplorerPanel {
        &mut self.panel
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(headline) = &self.headline {
                ui.heading(headline);
                ui.add_space(4.0);
            }
            self.panel.update(ui);
        });
    }
}
