//! This module implements the greedy best-first search algorithm.

use ordered_float::OrderedFloat;

use crate::search::{
    open_lists::{OpenList, PriorityOpenList},
    search_engines::{SearchEngine, SearchResult},
    SearchNodeStatus, SearchProblem, SearchSpace, SearchStatistics,
};

/// Greedy best-first graph search: expands the open node with the lowest
/// heuristic value and ignores accumulated cost when ordering, so it commits
/// to whatever looks closest to the goal. Fast on friendly problems, no cost
/// optimality guarantee. The heuristic value of a state never changes, so the
/// queue never needs re-keying; a cheaper route into a still-open node only
/// updates that node's provenance, keeping the reported cost of the returned
/// path honest.
#[derive(Debug)]
pub struct GBFS {}

impl GBFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for GBFS {
    fn search<P: SearchProblem>(
        &mut self,
        problem: &P,
    ) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut open = PriorityOpenList::new();
        let mut search_space = SearchSpace::new(problem.initial_state());

        let root_h = problem.heuristic(&problem.initial_state());
        statistics.increment_evaluated_nodes();
        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.), root_h);
        open.push(root_node.get_node_id(), root_h);

        while let Some(node_id) = open.pop() {
            if problem.is_goal(search_space.get_state(node_id)) {
                statistics.finalise_search();
                return (
                    SearchResult::Success(search_space.extract_path(node_id)),
                    statistics,
                );
            }

            let node = search_space.get_node_mut(node_id);
            node.close();
            statistics.increment_expanded_nodes();
            let g_value = node.get_g();
            let child_depth = node.get_depth() + 1;

            let state = search_space.get_state(node_id).clone();
            let actions = problem.actions(&state);
            statistics.increment_generated_actions(actions.len());

            for action in actions {
                let successor = problem.result(&state, &action);
                let successor_cost = problem.step_cost(g_value, &state, &action, &successor);
                let h_value = problem.heuristic(&successor);
                let child_id =
                    search_space.insert_or_get_node(successor, action.clone(), node_id);

                let child_node = search_space.get_node_mut(child_id);
                match child_node.get_status() {
                    SearchNodeStatus::New => {
                        statistics.increment_generated_nodes(1);
                        statistics.increment_evaluated_nodes();
                        child_node.open(successor_cost, h_value);
                        open.push(child_id, h_value);
                    }
                    SearchNodeStatus::Open => {
                        if successor_cost < child_node.get_g() {
                            child_node.update_path(successor_cost, node_id, action, child_depth);
                            statistics.increment_reopened_nodes();
                        }
                    }
                    SearchNodeStatus::Closed => {}
                }
            }
        }

        statistics.finalise_search();
        (SearchResult::Unsolvable, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::grid::EscapeGrid;
    use crate::search::validate;
    use crate::test_utils::*;

    #[test]
    fn returns_a_valid_path_on_the_open_grid() {
        let problem = EscapeGrid::from_map(OPEN_3X3_MAP).unwrap();
        let (result, _) = GBFS::new().search(&problem);
        let path = result.path().expect("open grid must be solvable");
        assert!(validate(path, &problem).is_ok());
    }

    #[test]
    fn walled_off_goal_is_unsolvable() {
        let problem = EscapeGrid::from_map(WALLED_GOAL_MAP).unwrap();
        let (result, _) = GBFS::new().search(&problem);
        assert_eq!(result, SearchResult::Unsolvable);
    }

    #[test]
    fn expands_fewer_nodes_than_the_grid_on_a_straight_run() {
        // On an unobstructed grid the heuristic pulls the search straight to
        // the goal corner.
        let problem = EscapeGrid::from_map(OPEN_10X10_MAP).unwrap();
        let (result, statistics) = GBFS::new().search(&problem);
        let path = result.path().unwrap();
        assert!(validate(path, &problem).is_ok());
        assert!(statistics.expanded_nodes() < 100);
    }

    #[test]
    fn detours_around_walls() {
        let problem = EscapeGrid::from_map(DETOUR_MAP).unwrap();
        let (result, _) = GBFS::new().search(&problem);
        let path = result.path().expect("detour map is solvable");
        assert!(validate(path, &problem).is_ok());
    }
}
