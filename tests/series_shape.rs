use latentscope::{shape, DisplayMode, ExplorerError, SeriesData, Subset};

#[test]
fn empty_subset_shapes_empty_for_every_mode() {
    for mode in DisplayMode::all() {
        assert_eq!(shape(&Subset::Empty, mode).unwrap(), SeriesData::Empty);
    }
}

#[test]
fn single_row_passes_through_verbatim_for_every_mode() {
    let row = vec![0.5, 0.25, 0.125];
    for mode in DisplayMode::all() {
        let shaped = shape(&Subset::Single(row.clone()), mode).unwrap();
        assert_eq!(
            shaped,
            SeriesData::Values(row.clone()),
            "single-row identity must hold for {mode:?}"
        );
    }
}

#[test]
fn mean_is_elementwise_across_rows() {
    let subset = Subset::Rows(vec![vec![1.0, 1.0], vec![3.0, 3.0]]);
    let shaped = shape(&subset, DisplayMode::Mean).unwrap();
    assert_eq!(shaped, SeriesData::Values(vec![2.0, 2.0]));
}

#[test]
fn sigma_is_elementwise_population_deviation() {
    let subset = Subset::Rows(vec![vec![1.0, 1.0], vec![3.0, 3.0]]);
    let shaped = shape(&subset, DisplayMode::Sigma).unwrap();
    assert_eq!(shaped, SeriesData::Values(vec![1.0, 1.0]));
}

#[test]
fn raw_is_defined_only_for_one_row() {
    let single = Subset::Rows(vec![vec![0.1, 0.2]]);
    assert_eq!(
        shape(&single, DisplayMode::Raw).unwrap(),
        SeriesData::Values(vec![0.1, 0.2])
    );

    let multi = Subset::Rows(vec![vec![0.1], vec![0.2]]);
    assert_eq!(
        shape(&multi, DisplayMode::Raw).unwrap_err(),
        ExplorerError::RawRequiresSingleRow { rows: 2 }
    );
}

#[test]
fn series_points_use_integer_sample_positions() {
    let shaped = SeriesData::Values(vec![5.0, 6.0, 7.0]);
    assert_eq!(shaped.points(), vec![[0.0, 5.0], [1.0, 6.0], [2.0, 7.0]]);
    assert!(SeriesData::Empty.points().is_empty());
}
