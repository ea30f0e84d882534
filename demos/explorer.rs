//! Demo: the explorer with freshly generated random data
//!
//! What it demonstrates
//! - Launching the explorer window with `run_explorer()` and a default config.
//! - Subscribing to selection events through an `EventController`.
//!
//! How to run
//! ```bash
//! cargo run --example explorer
//! ```
//! Click a point in the scatter plot to see its curve; sweep a rectangle with
//! the right mouse button to aggregate several curves; press Regenerate for a
//! fresh random snapshot.

use latentscope::events::EventFilter;
use latentscope::{run_explorer, EventController, EventKind, ExplorerConfig};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let events = EventController::new();
    let rx = events.subscribe(EventFilter::only(
        EventKind::SELECTION_CHANGED | EventKind::REGENERATED,
    ));

    // Observer: print what the user does.
    std::thread::spawn(move || {
        while let Ok(ev) = rx.recv() {
            if let Some(selection) = &ev.selection {
                println!("selection changed: {} point(s)", selection.len());
            } else if let Some(len) = ev.snapshot_len {
                println!("regenerated: {len} rows");
            }
        }
    });

    let mut cfg = ExplorerConfig {
        headline: Some("Latent-space explorer".to_string()),
        ..ExplorerConfig::default()
    };
    cfg.controllers.event = Some(events);

    run_explorer(cfg)
}
