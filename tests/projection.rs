use std::collections::BTreeSet;

use latentscope::{
    project, resolve, Dataset, GroupBy, LatentPoint, LatentPointSet, NameMap, ScatterFilter,
    SelectionEvent, Subset, UNLABELED,
};

fn labeled_points() -> LatentPointSet {
    LatentPointSet::new(vec![
        LatentPoint::new(0.0, 0.0).with_cluster(0).with_label(1),
        LatentPoint::new(0.5, 0.5).with_cluster(0),
        LatentPoint::new(2.0, 2.0).with_cluster(1).with_label(2),
        LatentPoint::new(2.5, 2.5).with_cluster(1).with_label(1),
        LatentPoint::new(3.0, 3.0).with_cluster(1),
    ])
}

#[test]
fn all_pass_filter_partitions_every_point_exactly_once() {
    let points = labeled_points();
    let groups = project(
        &points,
        2,
        GroupBy::Label,
        ScatterFilter::all(),
        &NameMap::new(),
    );

    let mut seen = BTreeSet::new();
    let mut total = 0usize;
    for group in &groups {
        assert!(!group.is_empty(), "no empty groups may be emitted");
        for &i in &group.original_indices {
            assert!(seen.insert(i), "index {i} appears in more than one group");
            total += 1;
        }
    }
    assert_eq!(total, points.len());
    assert_eq!(
        seen.into_iter().collect::<Vec<_>>(),
        (0..points.len()).collect::<Vec<_>>()
    );
}

#[test]
fn groups_come_back_sorted_by_value_with_display_names() {
    let points = labeled_points();
    let mut names = NameMap::new();
    names.insert(1, "cats");
    names.insert(2, "dogs");

    let groups = project(&points, 2, GroupBy::Label, ScatterFilter::all(), &names);
    let values: Vec<i64> = groups.iter().map(|g| g.value).collect();
    assert_eq!(values, vec![UNLABELED, 1, 2]);

    let group_names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(group_names, vec!["Unlabeled", "cats", "dogs"]);
}

#[test]
fn cluster_filter_restricts_to_matching_points() {
    let points = labeled_points();
    let groups = project(
        &points,
        2,
        GroupBy::Label,
        ScatterFilter::all().with_cluster(1),
        &NameMap::new(),
    );
    let indices: Vec<usize> = groups
        .iter()
        .flat_map(|g| g.original_indices.iter().copied())
        .collect();
    let as_set: BTreeSet<usize> = indices.into_iter().collect();
    assert_eq!(as_set, BTreeSet::from([2, 3, 4]));
}

#[test]
fn zero_match_filter_yields_no_groups() {
    let points = labeled_points();
    let groups = project(
        &points,
        2,
        GroupBy::Cluster,
        ScatterFilter::all().with_cluster(99),
        &NameMap::new(),
    );
    assert!(groups.is_empty());
}

#[test]
fn unlabeled_sentinel_matches_every_label() {
    let points = labeled_points();
    let wildcard = project(
        &points,
        2,
        GroupBy::Cluster,
        ScatterFilter::all().with_label(UNLABELED),
        &NameMap::new(),
    );
    let total: usize = wildcard.iter().map(|g| g.len()).sum();
    assert_eq!(total, points.len(), "label -1 must match all labels");
}

#[test]
fn combined_cluster_and_label_filter_intersects() {
    let points = labeled_points();
    let groups = project(
        &points,
        2,
        GroupBy::Cluster,
        ScatterFilter::all().with_cluster(1).with_label(1),
        &NameMap::new(),
    );
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].original_indices, vec![3]);
}

#[test]
fn two_component_projection_zeroes_the_third_coordinate() {
    let points = LatentPointSet::new(vec![LatentPoint::new_3d(1.0, 2.0, 3.0)]);
    let flat = project(&points, 2, GroupBy::Label, ScatterFilter::all(), &NameMap::new());
    assert_eq!(flat[0].coords, vec![[1.0, 2.0, 0.0]]);

    let deep = project(&points, 3, GroupBy::Label, ScatterFilter::all(), &NameMap::new());
    assert_eq!(deep[0].coords, vec![[1.0, 2.0, 3.0]]);
}

#[test]
fn projected_indices_round_trip_through_the_resolver() {
    let points = labeled_points();
    let dataset = Dataset::new(
        (0..points.len())
            .map(|i| vec![i as f64, i as f64 + 0.5])
            .collect(),
    );

    let groups = project(&points, 2, GroupBy::Cluster, ScatterFilter::all(), &NameMap::new());
    for group in &groups {
        for &index in &group.original_indices {
            let subset = resolve(&SelectionEvent::Click(index), &dataset).unwrap();
            assert_eq!(
                subset,
                Subset::Single(vec![index as f64, index as f64 + 0.5]),
                "index {index} from projection must resolve to its own row"
            );
        }
    }
}
