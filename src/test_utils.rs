use crate::search::grid::{EscapeGrid, Grid, Position};

pub const OPEN_3X3_MAP: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/open3x3.map"));

pub const OPEN_10X10_MAP: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/open10x10.map"));

pub const WALLED_GOAL_MAP: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/walled_goal.map"));

pub const DETOUR_MAP: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/detour.map"));

pub const TWO_CORRIDOR_MAP: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/two_corridor.map"));

pub const FIXTURE_MAPS: [&str; 5] = [
    OPEN_3X3_MAP,
    OPEN_10X10_MAP,
    WALLED_GOAL_MAP,
    DETOUR_MAP,
    TWO_CORRIDOR_MAP,
];

/// Edge count of the short corridor in [`TWO_CORRIDOR_MAP`]: straight along
/// the start row through the upper gap.
pub fn shortest_corridor_length() -> usize {
    8
}

/// A 3x3 problem whose goal cell carries the blocked flag. Per the
/// grid-adapter policy the goal stays traversable anyway.
pub fn blocked_goal_problem() -> EscapeGrid {
    let mut grid = Grid::open(3, 3);
    let goal = Position::new(2, 2);
    grid.set_blocked(goal, true);
    EscapeGrid::new(Position::new(0, 0), goal, grid)
}
