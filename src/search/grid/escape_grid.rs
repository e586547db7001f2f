use crate::search::grid::{map, Grid, MapError, Position};
use crate::search::{HeuristicValue, SearchProblem};
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

/// [`SearchProblem`] over a 2-D occupancy grid: escape from a start cell to a
/// goal cell moving one cell at a time in the four axis directions.
///
/// An action is the destination cell itself, so `result` is the identity on
/// the action. Every move costs one. The goal cell is traversable even when
/// its occupancy flag says blocked; walling the goal in therefore does not
/// make it unreachable from an adjacent free cell. This mirrors the behavior
/// of the editor this problem is built for and changes reachability compared
/// to a strict reading of the occupancy map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeGrid {
    initial: Position,
    goal: Position,
    grid: Grid,
}

impl EscapeGrid {
    /// Construct a problem instance over a snapshot of `grid`. Both `initial`
    /// and `goal` must lie inside the grid.
    pub fn new(initial: Position, goal: Position, grid: Grid) -> Self {
        debug_assert!(grid.contains(initial), "Initial cell out of bounds");
        debug_assert!(grid.contains(goal), "Goal cell out of bounds");
        Self {
            initial,
            goal,
            grid,
        }
    }

    /// Parse a text map (see [`MapError`] for the format rules).
    pub fn from_map(text: &str) -> Result<Self, MapError> {
        map::parse_map(text)
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl SearchProblem for EscapeGrid {
    type State = Position;
    type Action = Position;

    fn initial_state(&self) -> Position {
        self.initial
    }

    fn actions(&self, state: &Position) -> SmallVec<[Position; 4]> {
        let mut moves = SmallVec::new();
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let Some(row) = state.row.checked_add_signed(dr) else {
                continue;
            };
            let Some(col) = state.col.checked_add_signed(dc) else {
                continue;
            };
            let neighbor = Position::new(row, col);
            if self.grid.contains(neighbor)
                && (!self.grid.is_blocked(neighbor) || neighbor == self.goal)
            {
                moves.push(neighbor);
            }
        }
        moves
    }

    fn result(&self, _state: &Position, action: &Position) -> Position {
        *action
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, state: &Position) -> HeuristicValue {
        OrderedFloat(state.manhattan_distance(&self.goal) as f64)
    }
}
