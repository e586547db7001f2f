use crate::search::open_lists::OpenList;
use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Min-key open list backed by a [`PriorityQueue`]. Ties are broken by
/// insertion order: each push stamps a monotone sequence number, and
/// [`OpenList::replace_if_cheaper`] keeps the stamp of the original push so a
/// re-keyed node retains its first-in rank among equals.
///
/// The same discipline serves uniform-cost search (keyed by g), greedy
/// best-first search (keyed by h) and A* (keyed by g + h); the driver decides
/// what the key means.
#[derive(Debug, Default)]
pub struct PriorityOpenList {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, u64)>>,
    next_seq: u64,
}

impl PriorityOpenList {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_seq: 0,
        }
    }
}

impl OpenList for PriorityOpenList {
    fn push(&mut self, node_id: NodeId, key: HeuristicValue) {
        debug_assert!(
            self.queue.get(&node_id).is_none(),
            "Node is already queued, use replace_if_cheaper"
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(node_id, Reverse((key, seq)));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn contains(&self, node_id: NodeId) -> bool {
        self.queue.get(&node_id).is_some()
    }

    fn replace_if_cheaper(&mut self, node_id: NodeId, key: HeuristicValue) -> bool {
        let Some(&Reverse((old_key, seq))) = self.queue.get_priority(&node_id) else {
            return false;
        };
        if key < old_key {
            self.queue.change_priority(&node_id, Reverse((key, seq)));
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn pops_cheapest_key_first() {
        let mut list = PriorityOpenList::new();
        list.push(NodeId::new(0), OrderedFloat(5.));
        list.push(NodeId::new(1), OrderedFloat(2.));
        list.push(NodeId::new(2), OrderedFloat(4.));
        assert_eq!(list.pop(), Some(NodeId::new(1)));
        assert_eq!(list.pop(), Some(NodeId::new(2)));
        assert_eq!(list.pop(), Some(NodeId::new(0)));
        assert_eq!(list.pop(), None);
    }

    #[test]
    fn equal_keys_pop_in_insertion_order() {
        let mut list = PriorityOpenList::new();
        for id in 0..4 {
            list.push(NodeId::new(id), OrderedFloat(1.));
        }
        for id in 0..4 {
            assert_eq!(list.pop(), Some(NodeId::new(id)));
        }
    }

    #[test]
    fn replace_if_cheaper_rekeys_only_downwards() {
        let mut list = PriorityOpenList::new();
        list.push(NodeId::new(0), OrderedFloat(3.));
        list.push(NodeId::new(1), OrderedFloat(2.));

        assert!(!list.replace_if_cheaper(NodeId::new(0), OrderedFloat(4.)));
        assert!(list.replace_if_cheaper(NodeId::new(0), OrderedFloat(1.)));
        assert_eq!(list.pop(), Some(NodeId::new(0)));
        assert_eq!(list.pop(), Some(NodeId::new(1)));
    }

    #[test]
    fn replaced_node_keeps_first_in_rank_among_equals() {
        let mut list = PriorityOpenList::new();
        list.push(NodeId::new(0), OrderedFloat(5.));
        list.push(NodeId::new(1), OrderedFloat(2.));
        // Re-keying node 0 to 2 ties it with node 1, but node 0 was pushed
        // first and must pop first.
        assert!(list.replace_if_cheaper(NodeId::new(0), OrderedFloat(2.)));
        assert_eq!(list.pop(), Some(NodeId::new(0)));
        assert_eq!(list.pop(), Some(NodeId::new(1)));
    }

    #[test]
    fn replace_of_unqueued_node_is_ignored() {
        let mut list = PriorityOpenList::new();
        assert!(!list.replace_if_cheaper(NodeId::new(7), OrderedFloat(1.)));
        assert!(list.is_empty());
    }
}
