//! Uniform-cost search.

use crate::domain::StopId;
use crate::network::RouteGraph;

use super::state::{SearchOutcome, SearchState};

/// Dijkstra's algorithm from `source` to `target`.
///
/// Frontier entries are ordered by travel time so far, ties broken by
/// `ranks` (indexed by stop id). Returns `None` if `target` is unreachable.
/// `on_settle` sees every stop in the order it is settled.
pub(super) fn dijkstra(
    graph: &RouteGraph,
    ranks: &[u32],
    source: StopId,
    target: StopId,
    mut on_settle: impl FnMut(StopId),
) -> Option<SearchOutcome> {
    let mut state = SearchState::new(graph.stop_count());
    state.relax(source, 0, 0, ranks[source.index()], None);

    let mut last_settled = 0;
    while let Some(entry) = state.pop_open() {
        debug_assert!(
            entry.cost >= last_settled,
            "popped cost {} below settled cost {}",
            entry.cost,
            last_settled
        );
        last_settled = entry.cost;

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
            state.relax(next, cost, cost, ranks[next.index()], Some(entry.stop));
        }
    }

    None
}
