//! Text-map parsing. A map is a rectangle of cells, one row per line:
//! `.` traversable, `#` blocked, `S` the start cell, `G` the goal cell.
//! Blank lines and trailing whitespace are ignored.

use crate::search::grid::{EscapeGrid, Grid, Position};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("map has no cells")]
    Empty,
    #[error("row {row} is {width} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("unexpected character {found:?} at row {row}, column {col}")]
    UnexpectedCharacter { found: char, row: usize, col: usize },
    #[error("map has no start cell, mark one with 'S'")]
    MissingStart,
    #[error("map has no goal cell, mark one with 'G'")]
    MissingGoal,
    #[error("second start cell at {0}, a map has exactly one")]
    DuplicateStart(Position),
    #[error("second goal cell at {0}, a map has exactly one")]
    DuplicateGoal(Position),
}

pub(crate) fn parse_map(text: &str) -> Result<EscapeGrid, MapError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(MapError::Empty);
    }

    let cols = lines[0].chars().count();
    let mut grid = Grid::open(lines.len(), cols);
    let mut start = None;
    let mut goal = None;

    for (row, line) in lines.iter().enumerate() {
        let width = line.chars().count();
        if width != cols {
            return Err(MapError::RaggedRow {
                row,
                width,
                expected: cols,
            });
        }
        for (col, cell) in line.chars().enumerate() {
            let position = Position::new(row, col);
            match cell {
                '.' => {}
                '#' => grid.set_blocked(position, true),
                'S' => match start {
                    None => start = Some(position),
                    Some(_) => return Err(MapError::DuplicateStart(position)),
                },
                'G' => match goal {
                    None => goal = Some(position),
                    Some(_) => return Err(MapError::DuplicateGoal(position)),
                },
                found => {
                    return Err(MapError::UnexpectedCharacter { found, row, col });
                }
            }
        }
    }

    let initial = start.ok_or(MapError::MissingStart)?;
    let goal = goal.ok_or(MapError::MissingGoal)?;
    Ok(EscapeGrid::new(initial, goal, grid))
}
