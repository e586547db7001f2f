//! Open lists: the ordering disciplines over generated-but-not-yet-expanded
//! nodes that tell the search engines apart.

mod fifo;
mod lifo;
mod priority;

pub use fifo::FifoOpenList;
pub use lifo::LifoOpenList;
pub use priority::PriorityOpenList;

use crate::search::{HeuristicValue, NodeId};

/// Common contract of all open lists. `key` is the ordering key the driver
/// chose for the node (path cost for uniform-cost search, heuristic value for
/// greedy best-first, their sum for A*); disciplines that do not order by key
/// ignore it.
pub trait OpenList {
    /// Enqueue a node. The node must not already be queued.
    fn push(&mut self, node_id: NodeId, key: HeuristicValue);

    /// Dequeue the next node to expand, or `None` when the list is exhausted.
    fn pop(&mut self) -> Option<NodeId>;

    fn is_empty(&self) -> bool;

    fn contains(&self, node_id: NodeId) -> bool;

    /// Re-key a queued node if `key` is strictly cheaper than the key it was
    /// queued with, keeping its insertion rank among equals. Returns true if
    /// the entry was re-keyed. Disciplines that do not order by key keep the
    /// queued entry untouched.
    fn replace_if_cheaper(&mut self, node_id: NodeId, key: HeuristicValue) -> bool;
}
