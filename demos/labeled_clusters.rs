//! Demo: embedding the explorer with your own labeled snapshot
//!
//! What it demonstrates
//! - Building an `ExplorerApp` by hand instead of calling `run_explorer()`.
//! - Installing a custom snapshot with cluster/label assignments and display
//!   names, then grouping the scatter by cluster.
//!
//! How to run
//! ```bash
//! cargo run --example labeled_clusters
//! ```

use eframe::egui;
use latentscope::{
    generate_dataset, generate_latent_points, ExplorerApp, ExplorerConfig, GroupBy, Snapshot,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> eframe::Result<()> {
    env_logger::init();

    // A reproducible snapshot with the two generator clusters made explicit.
    let mut rng = StdRng::seed_from_u64(7);
    let dataset = generate_dataset(&mut rng);
    let mut latent = generate_latent_points(&mut rng);
    let half = latent.len() / 2;
    for (i, point) in latent.points.iter_mut().enumerate() {
        point.cluster = Some(if i < half { 0 } else { 1 });
        // Sparse labels: most points stay unlabeled.
        if rng.gen_bool(0.3) {
            point.label = Some(rng.gen_range(1..=2));
        }
    }
    let snapshot = Snapshot::new(dataset, latent);

    let cfg = ExplorerConfig {
        title: "LatentScope — labeled clusters".to_string(),
        group_by: GroupBy::Cluster,
        ..ExplorerConfig::default()
    };

    let mut app = ExplorerApp::new(&cfg);
    {
        let panel = app.panel_mut();
        panel.cluster_names.insert(0, "origin cloud");
        panel.cluster_names.insert(1, "offset cloud");
        panel.label_names.insert(1, "reviewed");
        panel.label_names.insert(2, "flagged");
        panel.set_snapshot(snapshot);
    }

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1200.0, 700.0)),
        ..Default::default()
    };
    eframe::run_native(
        &cfg.title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
