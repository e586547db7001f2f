use crate::search::{Path, SearchProblem};
use itertools::Itertools;
use ordered_float::OrderedFloat;

/// Check that `path` is a real solution of `problem`: it starts in the initial
/// state, every consecutive state pair is connected by a legal action whose
/// `result` matches, the final state satisfies the goal, and the recorded cost
/// equals the accumulated step costs.
pub fn validate<P: SearchProblem>(
    path: &Path<P::State, P::Action>,
    problem: &P,
) -> Result<(), String> {
    if path.states().first() != Some(&problem.initial_state()) {
        return Err(format!(
            "Path does not start in the initial state, first state is {:?}",
            path.states().first()
        ));
    }
    if path.actions().len() + 1 != path.states().len() {
        return Err(format!(
            "Path has {} states but {} actions",
            path.states().len(),
            path.actions().len()
        ));
    }

    let mut cost = OrderedFloat(0.);
    for ((state, successor), action) in path
        .states()
        .iter()
        .tuple_windows()
        .zip(path.actions().iter())
    {
        if !problem.actions(state).contains(action) {
            return Err(format!(
                "Action {:?} is not legal in state {:?}",
                action, state
            ));
        }
        if problem.result(state, action) != *successor {
            return Err(format!(
                "Action {:?} in state {:?} does not lead to {:?}",
                action, state, successor
            ));
        }
        cost = problem.step_cost(cost, state, action, successor);
    }

    if !problem.is_goal(path.last_state()) {
        return Err(format!(
            "Path does not reach a goal state, final state is {:?}",
            path.last_state()
        ));
    }
    if cost != path.cost() {
        return Err(format!(
            "Path cost {} does not match accumulated step costs {}",
            path.cost(),
            cost
        ));
    }

    Ok(())
}
