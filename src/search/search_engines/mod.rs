mod astar;
mod bfs;
mod dfs;
mod gbfs;
mod search_engine;
mod ucs;

pub use astar::Astar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use gbfs::GBFS;
pub use search_engine::{SearchEngine, SearchResult};
pub use ucs::UCS;

use crate::search::{SearchProblem, SearchStatistics};
use clap;
use strum_macros::{Display, EnumIter};

#[derive(clap::ValueEnum, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Breadth first search, fewest-edge paths")]
    BFS,
    #[clap(help = "Depth first search, no optimality guarantee")]
    DFS,
    #[clap(help = "Uniform cost search, cheapest paths")]
    UCS,
    #[clap(help = "Greedy best-first search, heuristic only")]
    GBFS,
    #[clap(help = "A*, cheapest paths under an admissible heuristic")]
    #[strum(serialize = "A*")]
    Astar,
}

impl SearchEngineName {
    /// Run the named engine on `problem`.
    pub fn search<P: SearchProblem>(
        &self,
        problem: &P,
    ) -> (SearchResult<P::State, P::Action>, SearchStatistics) {
        match self {
            SearchEngineName::BFS => BFS::new().search(problem),
            SearchEngineName::DFS => DFS::new().search(problem),
            SearchEngineName::UCS => UCS::new().search(problem),
            SearchEngineName::GBFS => GBFS::new().search(problem),
            SearchEngineName::Astar => Astar::new().search(problem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::grid::{EscapeGrid, Position};
    use crate::search::validate;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn every_engine_solves_the_open_grid() {
        let problem = EscapeGrid::from_map(OPEN_3X3_MAP).unwrap();
        for engine in SearchEngineName::iter() {
            let (result, _) = engine.search(&problem);
            let path = result
                .path()
                .unwrap_or_else(|| panic!("{engine} found no path on the open grid"));
            assert_eq!(path.states().first(), Some(&Position::new(0, 0)));
            assert_eq!(path.states().last(), Some(&Position::new(2, 2)));
            assert!(validate(path, &problem).is_ok(), "{engine} path invalid");
        }
    }

    #[test]
    fn cost_ordered_engines_agree_on_the_cheapest_cost() {
        let problem = EscapeGrid::from_map(OPEN_3X3_MAP).unwrap();
        for engine in [
            SearchEngineName::BFS,
            SearchEngineName::UCS,
            SearchEngineName::Astar,
        ] {
            let (result, _) = engine.search(&problem);
            let path = result.path().unwrap();
            assert_approx_eq!(path.cost().into_inner(), 4.0);
        }
    }

    #[test]
    fn every_engine_reports_the_walled_goal_unsolvable() {
        let problem = EscapeGrid::from_map(WALLED_GOAL_MAP).unwrap();
        for engine in SearchEngineName::iter() {
            let (result, _) = engine.search(&problem);
            assert_eq!(result, SearchResult::Unsolvable, "{engine}");
        }
    }

    #[test]
    fn every_engine_reaches_a_blocked_goal_cell() {
        // The goal cell is traversable regardless of its occupancy flag.
        let problem = blocked_goal_problem();
        assert!(problem.grid().is_blocked(problem.goal()));
        for engine in SearchEngineName::iter() {
            let (result, _) = engine.search(&problem);
            let path = result
                .path()
                .unwrap_or_else(|| panic!("{engine} found no path to the blocked goal"));
            assert_eq!(path.states().last(), Some(&problem.goal()));
            assert!(validate(path, &problem).is_ok());
        }
    }

    #[test]
    fn every_engine_avoids_walls() {
        let problem = EscapeGrid::from_map(DETOUR_MAP).unwrap();
        for engine in SearchEngineName::iter() {
            let (result, _) = engine.search(&problem);
            let path = result.path().unwrap_or_else(|| panic!("{engine} failed"));
            for state in path.states() {
                assert!(
                    !problem.grid().is_blocked(*state) || *state == problem.goal(),
                    "{engine} walked through a wall at {state}"
                );
            }
            assert!(validate(path, &problem).is_ok());
        }
    }

    #[test]
    fn no_engine_expands_a_state_twice() {
        for map in FIXTURE_MAPS {
            let problem = EscapeGrid::from_map(map).unwrap();
            let free_cells = (0..problem.grid().rows())
                .flat_map(|row| (0..problem.grid().cols()).map(move |col| (row, col)))
                .filter(|&(row, col)| {
                    let cell = Position::new(row, col);
                    !problem.grid().is_blocked(cell) || cell == problem.goal()
                })
                .count();
            for engine in SearchEngineName::iter() {
                let (_, statistics) = engine.search(&problem);
                assert!(
                    statistics.expanded_nodes() <= free_cells,
                    "{engine} expanded {} nodes on a map with {} reachable cells",
                    statistics.expanded_nodes(),
                    free_cells
                );
            }
        }
    }
}
