//! Heuristic-guided search.

use crate::domain::StopId;
use crate::network::RouteGraph;

use super::heuristic::Heuristic;
use super::state::{SearchOutcome, SearchState};

/// A* from `source` to `target`.
///
/// Frontier entries are ordered by travel time so far plus
/// `heuristic.estimate(stop)`, ties broken by `ranks`. With a consistent
/// heuristic each stop is settled at its optimal cost, so the closed set is
/// safe. `on_settle` sees every stop in the order it is settled.
pub(super) fn astar<H: Heuristic>(
    graph: &RouteGraph,
    ranks: &[u32],
    source: StopId,
    target: StopId,
    heuristic: &H,
    mut on_settle: impl FnMut(StopId),
) -> Option<SearchOutcome> {
    let mut state = SearchState::new(graph.stop_count());
    state.relax(
        source,
        0,
        heuristic.estimate(source),
        ranks[source.index()],
        None,
    );

    let mut last_priority = 0;
    while let Some(entry) = state.pop_open() {
        debug_assert!(
            entry.priority >= last_priority,
            "popped priority {} below previous {}; heuristic is not consistent",
            entry.priority,
            last_priority
        );
        last_priority = entry.priority;

        state.settle(entry.stop);
        on_settle(entry.stop);

        if entry.stop == target {
            return Some(state.finish(target, entry.cost));
        }

        for (&next, &seconds) in graph.outgoing(entry.stop) {
            if state.is_settled(next) {
                continue;
            }
            let cost = entry.cost.saturating_add(seconds);
            let priority = cost.saturating_add(heuristic.estimate(next));
            state.relax(next, cost, priority, ranks[next.index()], Some(entry.stop));
        }
    }

    None
}
