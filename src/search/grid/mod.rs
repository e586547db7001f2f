//! The grid instantiation of the [`SearchProblem`](crate::search::SearchProblem)
//! contract: a 2-D occupancy map with 4-directional movement, unit step costs
//! and a Manhattan-distance heuristic.

mod escape_grid;
mod grid;
mod map;
mod position;

pub use escape_grid::EscapeGrid;
pub use grid::Grid;
pub use map::MapError;
pub use position::Position;
