use latentscope::persistence::{
    load_view_state_from_path, save_view_state_to_path, view_state_from_json, view_state_to_json,
    ViewStateSerde,
};
use latentscope::{DisplayMode, ExplorerConfig, ExplorerPanel, GroupBy, ScatterFilter};

fn sample_state() -> ViewStateSerde {
    ViewStateSerde {
        mode: DisplayMode::Sigma,
        group_by: GroupBy::Cluster,
        filter: ScatterFilter::all().with_cluster(1),
        n_components: 3,
        show_legend: false,
        point_size: 6.5,
    }
}

#[test]
fn json_round_trip_preserves_every_field() {
    let state = sample_state();
    let json = view_state_to_json(&state).expect("serialize");
    let restored = view_state_from_json(&json).expect("deserialize");
    assert_eq!(restored, state);
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("view_state.json");

    let state = sample_state();
    save_view_state_to_path(&state, &path).expect("save");
    let restored = load_view_state_from_path(&path).expect("load");
    assert_eq!(restored, state);
}

#[test]
fn capture_and_apply_round_trip_through_a_panel() {
    let cfg = ExplorerConfig {
        seed: Some(9),
        ..ExplorerConfig::default()
    };
    let mut panel = ExplorerPanel::from_config(&cfg);
    panel.mode = DisplayMode::Sigma;
    panel.group_by = GroupBy::Cluster;
    panel.point_size = 7.0;

    let captured = ViewStateSerde::from(&panel);

    let mut restored = ExplorerPanel::from_config(&cfg);
    captured.apply_to(&mut restored);
    assert_eq!(restored.mode, DisplayMode::Sigma);
    assert_eq!(restored.group_by, GroupBy::Cluster);
    assert_eq!(restored.point_size, 7.0);
}

#[test]
fn load_from_missing_path_reports_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.json");
    assert!(load_view_state_from_path(&missing).is_err());
}
