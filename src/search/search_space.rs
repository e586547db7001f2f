use crate::search::{Path, SearchNode};
use segvec::{Linear, SegVec};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Handle of a node (and its state) inside a [`SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchSpace`] manages the states and nodes generated during one search
/// call. States are abstract: anything hashable and comparable by value.
/// Each distinct state is registered exactly once, so node handles double as
/// state identity, and the parent links of the nodes form a tree rooted at the
/// initial state.
#[derive(Debug)]
pub struct SearchSpace<S, A>
where
    S: Clone + Debug + Eq + Hash,
{
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<A>, Linear>,
    states: SegVec<S, Linear>,
    registered_nodes: HashMap<S, NodeId>,
}

impl<S, A> SearchSpace<S, A>
where
    S: Clone + Debug + Eq + Hash,
    A: Clone,
{
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_nodes = HashMap::new();

        let root_node_id = NodeId::new(0);
        registered_nodes.insert(initial_state.clone(), root_node_id);
        nodes.push(SearchNode::new_root(root_node_id));
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            registered_nodes,
        }
    }

    /// Register `state` as generated from `parent_id` by `transition` and
    /// return its node handle. If an equal state was registered before, the
    /// existing node is returned unchanged and the provenance arguments are
    /// discarded.
    pub fn insert_or_get_node(&mut self, state: S, transition: A, parent_id: NodeId) -> NodeId {
        match self.registered_nodes.get(&state) {
            Some(&node_id) => node_id,
            None => {
                let depth = self.get_node(parent_id).get_depth() + 1;
                let node_id = NodeId::new(self.nodes.len());
                self.nodes
                    .push(SearchNode::new_with_parent(node_id, parent_id, transition, depth));
                self.registered_nodes.insert(state.clone(), node_id);
                self.states.push(state);
                node_id
            }
        }
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode<A> {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode<A> {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<A> {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    /// Number of distinct states registered so far.
    pub fn len(&self) -> usize {
        self.registered_nodes.len()
    }

    /// Recover the solution that ends in `goal_id` by walking the parent
    /// links back to the root. The returned path runs initial state first,
    /// goal state last, and carries the goal node's accumulated cost.
    pub fn extract_path(&self, goal_id: NodeId) -> Path<S, A> {
        let mut states = vec![];
        let mut actions = vec![];

        let mut current_node = self.get_node(goal_id);
        loop {
            states.push(self.get_state(current_node.get_node_id()).clone());
            match current_node.get_transition() {
                Some(transition) => actions.push(transition.clone()),
                None => break,
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        states.reverse();
        actions.reverse();

        Path::new(states, actions, self.get_node(goal_id).get_g())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchNodeStatus;
    use ordered_float::OrderedFloat;

    #[test]
    fn equal_states_register_once() {
        let mut space: SearchSpace<(i32, i32), char> = SearchSpace::new((0, 0));
        let root_id = space.get_root_node().get_node_id();
        let a = space.insert_or_get_node((0, 1), 'r', root_id);
        let b = space.insert_or_get_node((0, 1), 'x', root_id);
        assert_eq!(a, b);
        assert_eq!(space.len(), 2);
        // The provenance of the first registration wins.
        assert_eq!(space.get_node(a).get_transition(), Some(&'r'));
    }

    #[test]
    fn depth_follows_parent_chain() {
        let mut space: SearchSpace<(i32, i32), char> = SearchSpace::new((0, 0));
        let root_id = space.get_root_node().get_node_id();
        let a = space.insert_or_get_node((0, 1), 'r', root_id);
        let b = space.insert_or_get_node((0, 2), 'r', a);
        assert_eq!(space.get_node(root_id).get_depth(), 0);
        assert_eq!(space.get_node(a).get_depth(), 1);
        assert_eq!(space.get_node(b).get_depth(), 2);
    }

    #[test]
    fn extract_path_runs_initial_to_goal() {
        let mut space: SearchSpace<(i32, i32), char> = SearchSpace::new((0, 0));
        let root_id = space.get_root_node().get_node_id();
        space.get_root_node_mut().open(OrderedFloat(0.), OrderedFloat(0.));
        space.get_root_node_mut().close();

        let a = space.insert_or_get_node((0, 1), 'r', root_id);
        space.get_node_mut(a).open(OrderedFloat(1.), OrderedFloat(0.));
        space.get_node_mut(a).close();
        let b = space.insert_or_get_node((1, 1), 'd', a);
        space.get_node_mut(b).open(OrderedFloat(2.), OrderedFloat(0.));
        assert_eq!(space.get_node(b).get_status(), SearchNodeStatus::Open);

        let path = space.extract_path(b);
        assert_eq!(path.states(), &[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(path.actions(), &['r', 'd']);
        assert_eq!(path.cost(), OrderedFloat(2.));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn extract_path_of_root_is_a_single_state() {
        let mut space: SearchSpace<(i32, i32), char> = SearchSpace::new((0, 0));
        space.get_root_node_mut().open(OrderedFloat(0.), OrderedFloat(0.));
        let root_id = space.get_root_node().get_node_id();
        let path = space.extract_path(root_id);
        assert_eq!(path.states(), &[(0, 0)]);
        assert!(path.actions().is_empty());
        assert_eq!(path.cost(), OrderedFloat(0.));
    }
}
