use crate::search::{HeuristicValue, NodeId, NO_NODE};
use ordered_float::Float;

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
}

/// A [`SearchNode`] is a node in the search space. It pairs a registered state
/// with its provenance: the parent node, the action that generated it, the
/// accumulated path cost and the depth.
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    /// Unique identifier of the node, also indexes the state
    node_id: NodeId,
    /// Status of the node
    status: SearchNodeStatus,
    /// F-value of the node, different depending on the search algorithm
    f: HeuristicValue,
    /// G-value of the node, i.e. the cost of the path that reached it
    g: HeuristicValue,
    /// H-value of the node, i.e. the heuristic estimate of the cost to reach
    /// the goal. Engines that do not order by heuristic leave this at zero.
    h: HeuristicValue,
    /// Number of edges on the path that reached this node
    depth: u32,
    /// Action that led to this node, `None` only for the root
    transition: Option<A>,
    /// Parent node, `NO_NODE` for the root
    parent_id: NodeId,
}

impl<A> SearchNode<A> {
    /// Create the root node of a search space. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_root(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            depth: 0,
            transition: None,
            parent_id: NO_NODE,
        }
    }

    /// Create a node generated from `parent_id` by `transition`. For the root
    /// node see [`SearchNode::new_root`].
    pub fn new_with_parent(node_id: NodeId, parent_id: NodeId, transition: A, depth: u32) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            depth,
            transition: Some(transition),
            parent_id,
        }
    }

    /// Move the node onto the open list with path cost `g` and heuristic
    /// estimate `h`.
    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::New,
            "Node must be new to open it"
        );
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    /// Install a cheaper route into a node that is still open: new path cost,
    /// new provenance, recomputed f. The heuristic value is a function of the
    /// state and does not change.
    pub fn update_path(
        &mut self,
        g: HeuristicValue,
        parent_id: NodeId,
        transition: A,
        depth: u32,
    ) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Only open nodes can be rerouted"
        );
        debug_assert!(g < self.g, "Rerouting must lower the path cost");
        self.g = g;
        self.f = g + self.h;
        self.depth = depth;
        self.transition = Some(transition);
        self.parent_id = parent_id;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_depth(&self) -> u32 {
        self.depth
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_transition(&self) -> Option<&A> {
        self.transition.as_ref()
    }
}
