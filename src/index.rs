use std::collections::HashMap;
use std::hash::Hash;

/// One key's candidate target positions, ascending, consumed destructively.
///
/// Consumption moves a head cursor forward instead of shifting the vector,
/// so pruning a prefix is O(log n) and popping the front is O(1). Only the
/// ordered element-gap path ever removes from the middle. A position, once
/// popped or pruned, can never be yielded again.
#[derive(Debug)]
pub(crate) struct PositionList {
    positions: Vec<usize>,
    head: usize,
}

impl PositionList {
    fn new() -> Self {
        Self {
            positions: Vec::new(),
            head: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_positions(positions: Vec<usize>) -> Self {
        debug_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        Self { positions, head: 0 }
    }

    fn push(&mut self, position: usize) {
        self.positions.push(position);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head == self.positions.len()
    }

    /// Permanently drop every remaining position `<= bound`.
    pub(crate) fn prune_through(&mut self, bound: usize) {
        let live = &self.positions[self.head..];
        self.head += live.partition_point(|&p| p <= bound);
    }

    /// Remove and return the smallest remaining position.
    pub(crate) fn pop_front(&mut self) -> Option<usize> {
        let position = *self.positions.get(self.head)?;
        self.head += 1;
        Some(position)
    }

    /// Remove and return the smallest remaining position strictly greater
    /// than `last`. Positions at or below `last` stay available for later
    /// occurrences.
    pub(crate) fn pop_after(&mut self, last: usize) -> Option<usize> {
        let live = &self.positions[self.head..];
        let idx = self.head + live.partition_point(|&p| p <= last);
        if idx == self.positions.len() {
            return None;
        }
        if idx == self.head {
            return self.pop_front();
        }
        Some(self.positions.remove(idx))
    }
}

/// Maps each distinct pattern key to its ascending target positions.
///
/// Built once per search call, mutated in place as positions are consumed,
/// and dropped when the search returns.
#[derive(Debug)]
pub(crate) struct PositionIndex<K> {
    lists: HashMap<K, PositionList>,
}

impl<K: Eq + Hash + Clone> PositionIndex<K> {
    /// Scan the target left to right, collecting positions for every
    /// distinct pattern key. Returns `None` when some pattern key never
    /// occurs in the target, in which case no occurrence is possible.
    pub(crate) fn build(pattern: &[K], target: &[K]) -> Option<Self> {
        let mut lists: HashMap<K, PositionList> = HashMap::with_capacity(pattern.len());
        for key in pattern {
            lists.entry(key.clone()).or_insert_with(PositionList::new);
        }
        for (position, key) in target.iter().enumerate() {
            if let Some(list) = lists.get_mut(key) {
                list.push(position);
            }
        }
        if lists.values().any(|list| list.is_empty()) {
            return None;
        }
        Some(Self { lists })
    }

    pub(crate) fn list_mut(&mut self, key: &K) -> Option<&mut PositionList> {
        self.lists.get_mut(key)
    }

    /// Apply `prune` to every key's list.
    pub(crate) fn prune_all(&mut self, prune: impl Fn(&mut PositionList)) {
        for list in self.lists.values_mut() {
            prune(list);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_collects_ascending_positions_per_key() {
        let pattern = [1, 2];
        let target = [2, 1, 2, 2, 1];
        let mut index = PositionIndex::build(&pattern, &target).expect("all keys present");
        let ones = index.list_mut(&1).unwrap();
        assert_eq!(ones.pop_front(), Some(1));
        assert_eq!(ones.pop_front(), Some(4));
        assert_eq!(ones.pop_front(), None);
        let twos = index.list_mut(&2).unwrap();
        assert_eq!(twos.pop_front(), Some(0));
    }

    #[test]
    fn build_short_circuits_on_absent_key() {
        assert!(PositionIndex::build(&[1, 9], &[1, 2, 3]).is_none());
    }

    #[test]
    fn prune_drops_prefix_for_good() {
        let mut list = PositionList::from_positions(vec![0, 2, 5, 7]);
        list.prune_through(4);
        assert_eq!(list.pop_front(), Some(5));
        list.prune_through(6);
        assert_eq!(list.pop_front(), Some(7));
        assert!(list.is_empty());
    }

    #[test]
    fn pop_after_removes_mid_list_without_losing_earlier_positions() {
        let mut list = PositionList::from_positions(vec![0, 3, 6, 9]);
        assert_eq!(list.pop_after(3), Some(6));
        // 0 and 3 are still live for later, unordered or earlier-bounded picks.
        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.pop_after(8), Some(9));
        assert_eq!(list.pop_after(3), None);
        assert_eq!(list.pop_front(), Some(3));
        assert!(list.is_empty());
    }

    #[test]
    fn popped_positions_are_never_yielded_twice() {
        let mut list = PositionList::from_positions(vec![1, 2, 3]);
        assert_eq!(list.pop_after(0), Some(1));
        assert_eq!(list.pop_after(0), Some(2));
        assert_eq!(list.pop_after(0), Some(3));
        assert_eq!(list.pop_after(0), None);
    }
}
