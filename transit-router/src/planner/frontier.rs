//! Frontier ordering shared by both searches.

use std::cmp::Ordering;

use crate::domain::{Seconds, StopId};

/// A discovered stop waiting to be settled.
///
/// `priority` is what the heap orders on: the travel time so far for
/// Dijkstra, travel time plus estimate for A*. `rank` is the lexical rank of
/// the stop's code and breaks priority ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct FrontierEntry {
    pub priority: Seconds,
    pub rank: u32,
    pub cost: Seconds,
    pub stop: StopId,
}

// BinaryHeap is a max-heap; reverse everything so the smallest pops first.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.rank.cmp(&self.rank))
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.stop.cmp(&self.stop))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(priority: Seconds, rank: u32) -> FrontierEntry {
        FrontierEntry {
            priority,
            rank,
            cost: priority,
            stop: StopId::new(rank as usize),
        }
    }

    #[test]
    fn lowest_priority_pops_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(300, 0));
        heap.push(entry(60, 1));
        heap.push(entry(180, 2));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|e| e.priority)).collect();
        assert_eq!(order, vec![60, 180, 300]);
    }

    #[test]
    fn ties_break_on_rank() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(60, 5));
        heap.push(entry(60, 2));
        heap.push(entry(60, 9));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|e| e.rank)).collect();
        assert_eq!(order, vec![2, 5, 9]);
    }
}
