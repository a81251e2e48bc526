//! Min-priority frontier with deterministic tie-breaking.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

/// Candidate distance for a vertex slot, ranked by insertion sequence when
/// distances tie.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) distance: i64,
    pub(crate) slot: usize,
    sequence: u64,
}

impl FrontierEntry {
    fn compare(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

#[expect(
    clippy::non_canonical_partial_ord_impl,
    reason = "ordering is defined once in compare()"
)]
impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

/// Lazy-deletion frontier: superseded entries stay queued and are skipped by
/// the caller on extraction.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_sequence: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, slot: usize, distance: i64) {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.heap.push(Reverse(FrontierEntry {
            distance,
            slot,
            sequence,
        }));
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
