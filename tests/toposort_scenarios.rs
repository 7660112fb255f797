use std::collections::HashMap;

use serde_json::json;
use topsort::{
    toposort, toposort_with, Adjacency, DanglingPolicy, EdgeSource, Producer, SortError,
    SortOptions, TieBreak,
};

fn abc_edges() -> EdgeSource<'static, &'static str> {
    // B depends on A; C depends on A and B.
    EdgeSource::aligned(vec![vec![], vec!["A"], vec!["A", "B"]])
}

#[test]
fn chain_of_dependencies_is_ordered() {
    let order = toposort(["A", "B", "C"], abc_edges()).unwrap();
    assert_eq!(order, vec!["A", "B", "C"]);
}

#[test]
fn input_order_does_not_override_dependencies() {
    let deps: HashMap<&str, Vec<&str>> =
        HashMap::from([("A", vec![]), ("B", vec!["A"]), ("C", vec!["A", "B"])]);
    let order = toposort(["C", "B", "A"], EdgeSource::lookup(|v: &&str| deps[v].clone())).unwrap();
    assert_eq!(order, vec!["A", "B", "C"]);
}

#[test]
fn mutual_dependency_fails_with_cycle() {
    let err = toposort(["X", "Y"], EdgeSource::aligned(vec![vec!["Y"], vec!["X"]])).unwrap_err();
    assert!(err.is_cycle());
    assert_eq!(err.unresolved(), Some(&["X", "Y"][..]));
}

#[test]
fn filtered_vertex_is_omitted_and_does_not_block_its_dependents() {
    let order = toposort_with(
        ["A", "B", "C"],
        abc_edges(),
        &SortOptions::default(),
        |v| *v == "B",
        |_| {},
    )
    .unwrap();
    assert_eq!(order, vec!["A", "C"]);
}

#[test]
fn filtered_vertex_does_not_block_when_flipped() {
    // Flipped: A is needed by B and C, B is needed by C.
    let edges = EdgeSource::aligned(vec![vec!["B", "C"], vec!["C"], vec![]]);
    let order = toposort_with(
        ["A", "B", "C"],
        edges,
        &SortOptions::flipped(),
        |v| *v == "B",
        |_| {},
    )
    .unwrap();
    assert_eq!(order, vec!["A", "C"]);
}

#[test]
fn filtering_a_cycle_member_breaks_the_cycle() {
    let order = toposort_with(
        ["X", "Y", "Z"],
        EdgeSource::aligned(vec![vec!["Y"], vec!["X"], vec!["X"]]),
        &SortOptions::default(),
        |v| *v == "Y",
        |_| {},
    )
    .unwrap();
    assert_eq!(order, vec!["X", "Z"]);
}

#[test]
fn filter_sees_every_vertex_once_in_walk_order() {
    let mut seen = Vec::new();
    toposort_with(
        ["A", "B", "C"],
        abc_edges(),
        &SortOptions::default(),
        |v| {
            seen.push(*v);
            false
        },
        |_| {},
    )
    .unwrap();
    assert_eq!(seen, vec!["A", "B", "C"]);
}

#[test]
fn action_runs_once_per_vertex_in_output_order() {
    let mut calls = Vec::new();
    let order = toposort_with(
        ["C", "B", "A"],
        EdgeSource::aligned(vec![vec!["A", "B"], vec!["A"], vec![]]),
        &SortOptions::default().with_tie_break(TieBreak::Lifo),
        |_| false,
        |v| calls.push(*v),
    )
    .unwrap();
    assert_eq!(order, vec!["A", "B", "C"]);
    assert_eq!(calls, order);
}

#[test]
fn dangling_neighbours_are_ignored_by_default_and_rejected_when_strict() {
    let edges = || EdgeSource::aligned(vec![vec!["missing"], vec!["A"]]);

    let order = toposort(["A", "B"], edges()).unwrap();
    assert_eq!(order, vec!["A", "B"]);

    let strict = SortOptions::default().with_dangling(DanglingPolicy::Reject);
    let err = toposort_with(["A", "B"], edges(), &strict, |_| false, |_| {}).unwrap_err();
    assert_eq!(err, SortError::UnknownVertex { vertex: "missing" });
}

#[test]
fn strict_mode_runs_no_action_on_failure() {
    let strict = SortOptions::default().with_dangling(DanglingPolicy::Reject);
    let mut calls = 0;
    let result = toposort_with(
        ["A"],
        EdgeSource::aligned(vec![vec!["missing"]]),
        &strict,
        |_| false,
        |_| calls += 1,
    );
    assert!(result.is_err());
    assert_eq!(calls, 0);
}

#[test]
fn producer_sources_are_resolved_before_any_vertex() {
    let mut filter_calls = 0;
    let mut spent: Producer<'_, &str> = Producer::cursor(vec![vec![]]);
    let _live = spent.take();

    let err = toposort_with(
        ["A"],
        EdgeSource::Producer(spent),
        &SortOptions::default(),
        |_| {
            filter_calls += 1;
            false
        },
        |_| {},
    )
    .unwrap_err();
    assert_eq!(err, SortError::UnsupportedEdgeSource);
    assert_eq!(filter_calls, 0);
}

#[test]
fn deferred_producer_sorts_like_any_other_source() {
    let producer = Producer::deferred(|| Producer::cursor(vec![vec![], vec!["A"], vec!["A", "B"]]));
    let order = toposort(["A", "B", "C"], EdgeSource::Producer(producer)).unwrap();
    assert_eq!(order, vec!["A", "B", "C"]);
}

#[test]
fn json_edge_descriptors_drive_the_sort() {
    let nodes = || ["A", "B", "C"].map(String::from);

    let positional = EdgeSource::from_json(json!([[], ["A"], ["A", "B"]])).unwrap();
    assert_eq!(toposort(nodes(), positional).unwrap(), nodes().to_vec());

    let table = EdgeSource::from_json(json!({ "C": ["B", "A"], "B": ["A"] })).unwrap();
    assert_eq!(toposort(nodes(), table).unwrap(), nodes().to_vec());

    let err = EdgeSource::<String>::from_json(json!("A -> B")).err().unwrap();
    assert!(matches!(err, SortError::InvalidInput { .. }));
}

#[test]
fn adjacency_can_be_inspected_before_scheduling() {
    let adj = Adjacency::build(["A", "B", "C"], abc_edges(), |v| *v == "B").unwrap();
    assert_eq!(adj.len(), 2);
    assert_eq!(adj.filtered().copied().collect::<Vec<_>>(), vec!["B"]);

    let order = topsort::graph::schedule(adj, &SortOptions::default(), |_| {}).unwrap();
    assert_eq!(order, vec!["A", "C"]);
}
