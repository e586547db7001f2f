//! Breadth first search

use ordered_float::OrderedFloat;

use crate::search::{
    open_lists::{FifoOpenList, OpenList},
    search_engines::{SearchEngine, SearchResult},
    SearchNodeStatus, SearchProblem, SearchSpace, SearchStatistics,
};

/// Breadth-first graph search. Goal testing happens at generation time: the
/// first generated node whose state satisfies the goal is returned
/// immediately, which is what guarantees a path with the fewest edges when
/// every step costs the same.
#[derive(Debug)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BFS {
    fn search<P: SearchProblem>(
        &mut self,
        problem: &P,
    ) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut open = FifoOpenList::new();
        let mut search_space = SearchSpace::new(problem.initial_state());

        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.), OrderedFloat(0.));
        let root_id = root_node.get_node_id();

        if problem.is_goal(search_space.get_state(root_id)) {
            statistics.finalise_search();
            return (
                SearchResult::Success(search_space.extract_path(root_id)),
                statistics,
            );
        }
        open.push(root_id, OrderedFloat(0.));

        while let Some(node_id) = open.pop() {
            let node = search_space.get_node_mut(node_id);
            node.close();
            statistics.increment_expanded_nodes();
            let g_value = node.get_g();

            let state = search_space.get_state(node_id).clone();
            let actions = problem.actions(&state);
            statistics.increment_generated_actions(actions.len());

            for action in actions {
                let successor = problem.result(&state, &action);
                let successor_cost = problem.step_cost(g_value, &state, &action, &successor);
                let child_id = search_space.insert_or_get_node(successor, action, node_id);

                let child_node = search_space.get_node_mut(child_id);
                if child_node.get_status() != SearchNodeStatus::New {
                    continue;
                }
                statistics.increment_generated_nodes(1);
                child_node.open(successor_cost, OrderedFloat(0.));

                if problem.is_goal(search_space.get_state(child_id)) {
                    statistics.finalise_search();
                    return (
                        SearchResult::Success(search_space.extract_path(child_id)),
                        statistics,
                    );
                }
                open.push(child_id, OrderedFloat(0.));
            }
        }

        statistics.finalise_search();
        (SearchResult::Unsolvable, statistics)
    }
}
