use latentscope::config::Controllers;
use latentscope::events::EventFilter;
use latentscope::{
    DisplayMode, EventController, EventKind, ExplorerConfig, ExplorerPanel, SelectionEvent,
    SeriesData,
};

fn seeded_panel() -> ExplorerPanel {
    ExplorerPanel::from_config(&ExplorerConfig {
        seed: Some(1234),
        ..ExplorerConfig::default()
    })
}

#[test]
fn click_selection_shapes_the_clicked_row() {
    let mut panel = seeded_panel();
    panel.set_selection(SelectionEvent::Click(4));

    let expected = panel.snapshot().dataset.rows[4].clone();
    assert_eq!(panel.series_data(), SeriesData::Values(expected));
}

#[test]
fn stale_selection_renders_blank_instead_of_failing() {
    let mut panel = seeded_panel();
    // An index beyond the fixed dataset size can only come from a selection
    // taken against some other snapshot.
    panel.set_selection(SelectionEvent::Click(10_000));
    assert_eq!(panel.series_data(), SeriesData::Empty);
}

#[test]
fn regenerate_replaces_the_snapshot_and_clears_the_selection() {
    let mut panel = seeded_panel();
    let before = panel.snapshot().clone();
    panel.set_selection(SelectionEvent::Lasso(vec![0, 1, 2]));

    panel.regenerate();
    assert_ne!(panel.snapshot(), &before);
    assert_eq!(panel.selection(), &SelectionEvent::None);
    assert_eq!(panel.series_data(), SeriesData::Empty);
}

#[test]
fn multi_row_selection_forces_raw_over_to_mean() {
    let mut panel = seeded_panel();
    panel.set_mode(DisplayMode::Raw);

    panel.set_selection(SelectionEvent::Lasso(vec![1, 2]));
    assert_eq!(panel.mode, DisplayMode::Mean);
    assert!(matches!(panel.series_data(), SeriesData::Values(_)));
}

#[test]
fn panel_emits_events_to_subscribers() {
    let ctrl = EventController::new();
    let rx = ctrl.subscribe(EventFilter::only(
        EventKind::REGENERATED | EventKind::SELECTION_CHANGED,
    ));

    let mut panel = ExplorerPanel::from_config(&ExplorerConfig {
        seed: Some(5),
        controllers: Controllers { event: Some(ctrl) },
        ..ExplorerConfig::default()
    });

    panel.set_selection(SelectionEvent::Click(0));
    let got = rx.try_recv().expect("selection event");
    assert!(got.kinds.contains(EventKind::SELECTION_CHANGED));
    assert!(got.kinds.contains(EventKind::CLICK));
    assert_eq!(got.selection, Some(SelectionEvent::Click(0)));

    panel.regenerate();
    let got = rx.try_recv().expect("regenerated event");
    assert!(got.kinds.contains(EventKind::REGENERATED));
    assert_eq!(got.snapshot_len, Some(panel.snapshot().dataset.len()));
}
