//! A* search

use ordered_float::OrderedFloat;

use crate::search::{
    open_lists::{OpenList, PriorityOpenList},
    search_engines::{SearchEngine, SearchResult},
    SearchNodeStatus, SearchProblem, SearchSpace, SearchStatistics,
};

/// A* graph search: expands the open node with the lowest f = g + h. With an
/// admissible, consistent heuristic the returned path is a cheapest one; an
/// overestimating heuristic still yields a valid path, just not necessarily a
/// cheapest one. A cheaper route into a still-open node lowers its g, so the
/// node is re-keyed in the queue with its new f.
#[derive(Debug)]
pub struct Astar {}

impl Astar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for Astar {
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
        open.push(root_node.get_node_id(), root_node.get_f());

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
                        open.push(child_id, child_node.get_f());
                    }
                    SearchNodeStatus::Open => {
                        if successor_cost < child_node.get_g() {
                            child_node.update_path(successor_cost, node_id, action, child_depth);
                            open.replace_if_cheaper(child_id, child_node.get_f());
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
