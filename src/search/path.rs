//! A solution path: the ordered sequence of states from the initial state to
//! a goal state, the actions that connect them, and the accumulated cost.

use crate::search::HeuristicValue;

#[derive(Debug, Clone, PartialEq)]
pub struct Path<S, A> {
    states: Vec<S>,
    actions: Vec<A>,
    cost: HeuristicValue,
}

impl<S, A> Path<S, A> {
    pub fn new(states: Vec<S>, actions: Vec<A>, cost: HeuristicValue) -> Self {
        debug_assert_eq!(
            states.len(),
            actions.len() + 1,
            "A path visits one more state than it has actions"
        );
        Self {
            states,
            actions,
            cost,
        }
    }

    /// The visited states, initial state first, goal state last.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// The actions taken, in execution order.
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// Total cost of the path.
    pub fn cost(&self) -> HeuristicValue {
        self.cost
    }

    /// Number of edges on the path. A path that starts at the goal has
    /// length zero.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The goal state the path ends in.
    pub fn last_state(&self) -> &S {
        self.states.last().expect("A path is never empty of states")
    }
}
