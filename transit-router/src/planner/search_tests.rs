//! Cross-checks between Dijkstra, A* and brute-force enumeration.

use super::*;
use crate::domain::{Coordinates, RoutingError, Seconds, StopId};
use crate::network::{NetworkBuilder, RouteGraph};
use proptest::prelude::*;

fn code(i: usize) -> String {
    format!("S{i}")
}

fn name(i: usize) -> String {
    format!("Stop {i}")
}

fn build(
    n: usize,
    edges: &[(usize, usize, i64)],
    coords: Option<&[(f64, f64)]>,
    heuristic: HeuristicKind,
) -> TransitRouter {
    let mut b = NetworkBuilder::new();
    for i in 0..n {
        let position = coords.map(|c| Coordinates::new(c[i].0, c[i].1));
        b.add_stop(code(i), name(i), position).unwrap();
    }
    for &(from, to, w) in edges {
        b.add_travel_time(&code(from), &code(to), w).unwrap();
    }
    b.build(PlannerConfig::new(heuristic)).unwrap()
}

/// Cheapest simple path by exhaustive depth-first enumeration.
fn brute_force(graph: &RouteGraph, from: StopId, to: StopId) -> Option<Seconds> {
    fn walk(
        graph: &RouteGraph,
        at: StopId,
        to: StopId,
        cost: Seconds,
        visited: &mut Vec<bool>,
        best: &mut Option<Seconds>,
    ) {
        if at == to {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for (&next, &w) in graph.neighbors(at).unwrap() {
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            walk(graph, next, to, cost + w, visited, best);
            visited[next.index()] = false;
        }
    }

    let mut visited = vec![false; graph.stop_count()];
    visited[from.index()] = true;
    let mut best = None;
    walk(graph, from, to, 0, &mut visited, &mut best);
    best
}

fn path_cost(graph: &RouteGraph, path: &[StopId]) -> Seconds {
    path.windows(2)
        .map(|w| graph.neighbors(w[0]).unwrap()[&w[1]])
        .sum()
}

fn settle_order(router: &TransitRouter, from: StopId, to: StopId, algorithm: Algorithm) -> Vec<StopId> {
    let mut order = Vec::new();
    router.run(from, to, algorithm, |s| order.push(s));
    order
}

#[test]
fn three_stop_scenario() {
    // A->B 60s, B->C 120s, A->C 300s
    let router = build(
        3,
        &[(0, 1, 60), (1, 2, 120), (0, 2, 300)],
        None,
        HeuristicKind::Zero,
    );

    for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
        let result = router
            .find_shortest_path("Stop 0", "Stop 2", algorithm)
            .unwrap();
        let names: Vec<_> = router.stop_names(&result).collect();
        assert_eq!(names, vec!["Stop 0", "Stop 1", "Stop 2"]);
        assert_eq!(result.total, 180);
    }
}

#[test]
fn self_loop_never_used() {
    let router = build(
        3,
        &[(0, 0, 10), (0, 1, 60), (1, 1, 0), (1, 2, 60), (2, 2, 5)],
        None,
        HeuristicKind::Zero,
    );

    for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
        let result = router
            .find_shortest_path("Stop 0", "Stop 2", algorithm)
            .unwrap();
        assert_eq!(result.total, 120);
        for pair in result.stops.windows(2) {
            assert_ne!(pair[0], pair[1], "self-loop on path");
        }
    }
}

#[test]
fn disconnected_components() {
    // {0, 1} and {2, 3}
    let router = build(
        4,
        &[(0, 1, 30), (1, 0, 30), (2, 3, 30), (3, 2, 30)],
        None,
        HeuristicKind::Zero,
    );

    for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
        assert!(matches!(
            router.find_shortest_path("Stop 0", "Stop 3", algorithm),
            Err(RoutingError::NoPathFound { .. })
        ));
    }
}

#[test]
fn ties_resolve_by_code_order() {
    // Two equal-cost routes 0 -> 1 -> 3 and 0 -> 2 -> 3. S1 < S2, so the
    // route through S1 is settled first and keeps the predecessor slot.
    let router = build(
        4,
        &[(0, 2, 50), (0, 1, 50), (2, 3, 50), (1, 3, 50)],
        None,
        HeuristicKind::Zero,
    );

    for _ in 0..3 {
        let result = router
            .find_shortest_path("Stop 0", "Stop 3", Algorithm::Dijkstra)
            .unwrap();
        let names: Vec<_> = router.stop_names(&result).collect();
        assert_eq!(names, vec!["Stop 0", "Stop 1", "Stop 3"]);
    }
}

#[test]
fn elapsed_is_reported() {
    let router = build(2, &[(0, 1, 10)], None, HeuristicKind::Zero);
    let result = router
        .find_shortest_path("Stop 0", "Stop 1", Algorithm::AStar)
        .unwrap();
    assert!(result.elapsed < std::time::Duration::from_secs(5));
    assert!(result.settled >= 2);
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (2usize..=7).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, 0i64..500), 0..(n * n)),
        )
    })
}

fn geo_graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>, Vec<(f64, f64)>)> {
    (2usize..=7).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, 0i64..500), 0..(n * n)),
            proptest::collection::vec((40.0f64..40.05, -74.0f64..-73.95), n),
        )
    })
}

proptest! {
    /// Dijkstra's cost matches exhaustive enumeration, and the path it returns
    /// really has that cost.
    #[test]
    fn dijkstra_is_optimal((n, edges) in graph_strategy(), from in 0usize..7, to in 0usize..7) {
        let (from, to) = (from % n, to % n);
        let router = build(n, &edges, None, HeuristicKind::Zero);
        let expected = brute_force(router.graph(), StopId::new(from), StopId::new(to));

        match router.find_shortest_path(&name(from), &name(to), Algorithm::Dijkstra) {
            Ok(result) => {
                prop_assert_eq!(Some(result.total), expected);
                prop_assert_eq!(result.origin(), Some(StopId::new(from)));
                prop_assert_eq!(result.destination(), Some(StopId::new(to)));
                prop_assert_eq!(path_cost(router.graph(), &result.stops), result.total);
            }
            Err(RoutingError::NoPathFound { .. }) => prop_assert_eq!(expected, None),
            Err(e) => prop_assert!(false, "unexpected error {e}"),
        }
    }

    /// With the zero heuristic A* settles exactly the same stops in the same
    /// order as Dijkstra and returns the same route.
    #[test]
    fn zero_heuristic_astar_matches_dijkstra((n, edges) in graph_strategy(), from in 0usize..7, to in 0usize..7) {
        let (from, to) = (StopId::new(from % n), StopId::new(to % n));
        let router = build(n, &edges, None, HeuristicKind::Zero);

        prop_assert_eq!(
            settle_order(&router, from, to, Algorithm::Dijkstra),
            settle_order(&router, from, to, Algorithm::AStar)
        );

        let d = router.find_path_between(from, to, Algorithm::Dijkstra);
        let a = router.find_path_between(from, to, Algorithm::AStar);
        match (d, a) {
            (Ok(d), Ok(a)) => {
                prop_assert_eq!(d.stops, a.stops);
                prop_assert_eq!(d.total, a.total);
                prop_assert_eq!(d.settled, a.settled);
            }
            (Err(d), Err(a)) => prop_assert_eq!(d, a),
            (d, a) => prop_assert!(false, "dijkstra {d:?} vs astar {a:?}"),
        }
    }

    /// The geographic estimate keeps A* optimal.
    #[test]
    fn geographic_astar_is_optimal((n, edges, coords) in geo_graph_strategy(), from in 0usize..7, to in 0usize..7) {
        let (from, to) = (StopId::new(from % n), StopId::new(to % n));
        let router = build(n, &edges, Some(&coords), HeuristicKind::Geographic);

        let d = router.find_path_between(from, to, Algorithm::Dijkstra);
        let a = router.find_path_between(from, to, Algorithm::AStar);
        match (d, a) {
            (Ok(d), Ok(a)) => {
                prop_assert_eq!(d.total, a.total);
                prop_assert_eq!(path_cost(router.graph(), &a.stops), a.total);
            }
            (Err(RoutingError::NoPathFound { .. }), Err(RoutingError::NoPathFound { .. })) => {}
            (d, a) => prop_assert!(false, "dijkstra {d:?} vs astar {a:?}"),
        }
    }

    /// Inserting every edge a second time changes nothing about any answer.
    #[test]
    fn duplicate_edges_do_not_change_routes((n, edges) in graph_strategy(), from in 0usize..7, to in 0usize..7) {
        let (from, to) = (from % n, to % n);
        let once = build(n, &edges, None, HeuristicKind::Zero);
        let doubled: Vec<_> = edges.iter().chain(edges.iter()).copied().collect();
        let twice = build(n, &doubled, None, HeuristicKind::Zero);

        prop_assert_eq!(once.graph().edge_count(), twice.graph().edge_count());

        let a = once.find_shortest_path(&name(from), &name(to), Algorithm::Dijkstra);
        let b = twice.find_shortest_path(&name(from), &name(to), Algorithm::Dijkstra);
        prop_assert_eq!(a.map(|r| (r.stops, r.total)), b.map(|r| (r.stops, r.total)));
    }
}
