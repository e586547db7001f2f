pub mod grid;
pub mod open_lists;
mod path;
mod problem;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod validate;
mod verbosity;

pub use path::Path;
pub use problem::{HeuristicValue, SearchProblem};
pub use search_node::{SearchNode, SearchNodeStatus};
pub use search_space::{NodeId, SearchSpace, NO_NODE};
pub use search_statistics::SearchStatistics;
pub use validate::validate;
pub use verbosity::Verbosity;
