//! Top-level entry point for running the explorer as a native window.

use eframe::egui;

use super::explorer_app::ExplorerApp;
use crate::config::ExplorerConfig;

/// Launch the explorer in a native window.
///
/// This is the main entry point for standalone use. It constructs an
/// [`ExplorerApp`] from the configuration, opens a native window, and enters
/// the eframe event loop. The call blocks until the window is closed.
pub fn run_explorer(mut cfg: ExplorerConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a reasonable default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1200.0, 700.0));
    }

    let app = ExplorerApp::new(&cfg);
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
