//! Per-query search bookkeeping.

use std::collections::BinaryHeap;

use crate::domain::{Seconds, StopId};

use super::frontier::FrontierEntry;

/// What a successful search found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct SearchOutcome {
    pub path: Vec<StopId>,
    pub cost: Seconds,
    pub settled: usize,
}

/// Frontier, best-known costs, predecessors and the closed set.
///
/// All tables are indexed by [`StopId::index`]; the state is sized once for
/// the graph and thrown away after the query.
pub(super) struct SearchState {
    frontier: BinaryHeap<FrontierEntry>,
    best: Vec<Option<Seconds>>,
    predecessor: Vec<Option<StopId>>,
    settled: Vec<bool>,
    settled_count: usize,
}

impl SearchState {
    pub fn new(stop_count: usize) -> Self {
        Self {
            frontier: BinaryHeap::new(),
            best: vec![None; stop_count],
            predecessor: vec![None; stop_count],
            settled: vec![false; stop_count],
            settled_count: 0,
        }
    }

    /// Record `cost` for `stop` if it beats the best known, and queue it.
    ///
    /// Returns true if the stop was queued. Equal costs do not replace the
    /// existing predecessor, so the first path found at a given cost is kept.
    pub fn relax(
        &mut self,
        stop: StopId,
        cost: Seconds,
        priority: Seconds,
        rank: u32,
        via: Option<StopId>,
    ) -> bool {
        let i = stop.index();
        if self.settled[i] {
            return false;
        }
        if self.best[i].is_some_and(|best| best <= cost) {
            return false;
        }

        self.best[i] = Some(cost);
        self.predecessor[i] = via;
        self.frontier.push(FrontierEntry {
            priority,
            rank,
            cost,
            stop,
        });
        true
    }

    /// Pop the next entry that is neither settled nor superseded.
    pub fn pop_open(&mut self) -> Option<FrontierEntry> {
        while let Some(entry) = self.frontier.pop() {
            let i = entry.stop.index();
            if self.settled[i] {
                continue;
            }
            if self.best[i].is_some_and(|best| best < entry.cost) {
                continue;
            }
            return Some(entry);
        }
        None
    }

    pub fn settle(&mut self, stop: StopId) {
        debug_assert!(!self.settled[stop.index()], "stop {stop} settled twice");
        self.settled[stop.index()] = true;
        self.settled_count += 1;
    }

    pub fn is_settled(&self, stop: StopId) -> bool {
        self.settled[stop.index()]
    }

    /// Walk predecessors back from `target` and package the result.
    pub fn finish(&self, target: StopId, cost: Seconds) -> SearchOutcome {
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor[current.index()] {
            path.push(prev);
            current = prev;
        }
        path.reverse();

        SearchOutcome {
            path,
            cost,
            settled: self.settled_count,
        }
    }
}
