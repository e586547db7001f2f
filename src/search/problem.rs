use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use std::fmt::Debug;
use std::hash::Hash;

/// Value type for path costs and heuristic estimates. Orderable so it can key
/// an open list.
pub type HeuristicValue = OrderedFloat<f64>;

/// The contract every search engine consumes: states, actions, a transition
/// model, a step-cost model, a goal test and an optional heuristic.
///
/// States are compared by value; two equal states are the same node of the
/// implicit search graph no matter how they were reached. Implementations must
/// keep their state graph fixed for the lifetime of one search call.
pub trait SearchProblem {
    type State: Clone + Debug + Eq + Hash;
    type Action: Clone + Debug + PartialEq;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Enumerate the actions that are legal in `state`. The enumeration order
    /// is observable through the expansion order of the engines.
    fn actions(&self, state: &Self::State) -> SmallVec<[Self::Action; 4]>;

    /// The state reached by applying `action` in `state`. Must be
    /// deterministic.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Cost of the path that reaches `successor` by applying `action` in
    /// `state`, given that the path to `state` costs `cost`.
    fn step_cost(
        &self,
        cost: HeuristicValue,
        _state: &Self::State,
        _action: &Self::Action,
        _successor: &Self::State,
    ) -> HeuristicValue {
        cost + 1.
    }

    /// Returns true if `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimate of the cost to reach the goal from `state`. Engines that do
    /// not order by heuristic never call this. A* is only guaranteed to return
    /// a cheapest path when the estimate never overestimates the true cost;
    /// implementations that overestimate still get a valid path back.
    fn heuristic(&self, _state: &Self::State) -> HeuristicValue {
        OrderedFloat(0.)
    }
}
