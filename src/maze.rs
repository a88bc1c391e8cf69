//! Grid-maze search problems.
//!
//! The canonical workload for the graph-search engines: find a route through
//! a four-connected grid maze from `S` to `G`. Mazes parse from ASCII maps
//! (`#` wall, `S` start, `G` goal, `.` or space open) and implement
//! [`SearchProblem`] through [`MazeProblem`], with optional per-cell entry
//! costs for weighted terrain.

use std::{collections::HashMap, fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    problem::{SearchProblem, Successor, validate_cost},
};

/// A cell coordinate: row 0 is the top of the map, column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four grid moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the order successors are generated.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Row/column offset of one step in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// The opposite direction.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        };
        write!(f, "{name}")
    }
}

/// A rectangular maze with one start and one goal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    start: Position,
    goal: Position,
}

impl Maze {
    /// Load a maze from an ASCII map file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or any parse error
    /// from [`Maze::from_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref()).map_err(|source| Error::Io {
            operation: format!("read maze file '{}'", path.as_ref().display()),
            source,
        })?;
        text.parse()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Whether the cell is a wall. Out-of-bounds positions count as walls.
    pub fn is_wall(&self, position: Position) -> bool {
        if position.row >= self.height || position.col >= self.width {
            return true;
        }
        self.walls[position.row * self.width + position.col]
    }

    /// The open cell one step in the given direction, if any.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let (row_offset, col_offset) = direction.offset();
        let row = position.row.checked_add_signed(row_offset)?;
        let col = position.col.checked_add_signed(col_offset)?;
        let next = Position::new(row, col);
        if self.is_wall(next) { None } else { Some(next) }
    }
}

impl FromStr for Maze {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.lines().filter(|line| !line.is_empty()).collect();
        if rows.is_empty() {
            return Err(Error::EmptyMap);
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        let mut walls = vec![false; width * height];
        let mut start = None;
        let mut goal = None;

        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != width {
                return Err(Error::RaggedMap {
                    row,
                    expected: width,
                    got: cells.len(),
                });
            }
            for (column, character) in cells.into_iter().enumerate() {
                match character {
                    '#' => walls[row * width + column] = true,
                    '.' | ' ' => {}
                    'S' => {
                        if start.is_some() {
                            return Err(Error::DuplicateStart { row, column });
                        }
                        start = Some(Position::new(row, column));
                    }
                    'G' => {
                        if goal.is_some() {
                            return Err(Error::DuplicateGoal { row, column });
                        }
                        goal = Some(Position::new(row, column));
                    }
                    _ => {
                        return Err(Error::UnknownMapCharacter {
                            character,
                            row,
                            column,
                        });
                    }
                }
            }
        }

        Ok(Maze {
            width,
            height,
            walls,
            start: start.ok_or(Error::MissingStart)?,
            goal: goal.ok_or(Error::MissingGoal)?,
        })
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let position = Position::new(row, col);
                let cell = if self.is_wall(position) {
                    '#'
                } else if position == self.start {
                    'S'
                } else if position == self.goal {
                    'G'
                } else {
                    '.'
                };
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Position search over a maze: reach the goal cell from the start cell.
///
/// Step costs default to 1 per move; [`MazeProblem::with_cell_costs`] makes
/// entering specific cells more or less expensive.
#[derive(Debug, Clone)]
pub struct MazeProblem {
    maze: Maze,
    cell_costs: HashMap<Position, f64>,
}

impl MazeProblem {
    /// Unit-cost position search over the maze.
    pub fn new(maze: Maze) -> Self {
        MazeProblem {
            maze,
            cell_costs: HashMap::new(),
        }
    }

    /// Position search with per-cell entry costs; unlisted cells cost 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCost`] if any supplied cost is NaN, infinite,
    /// or negative.
    pub fn with_cell_costs(maze: Maze, cell_costs: HashMap<Position, f64>) -> Result<Self> {
        for &cost in cell_costs.values() {
            validate_cost(cost)?;
        }
        Ok(MazeProblem { maze, cell_costs })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    fn cost_of_entering(&self, position: Position) -> f64 {
        self.cell_costs.get(&position).copied().unwrap_or(1.0)
    }
}

impl SearchProblem for MazeProblem {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.maze.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.maze.goal
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                self.maze.neighbor(*state, direction).map(|next| {
                    Successor::new(next, direction, self.cost_of_entering(next))
                })
            })
            .collect()
    }
}

/// Manhattan distance to the goal. Admissible for four-connected grids with
/// step costs of at least 1.
pub fn manhattan_heuristic(state: &Position, problem: &MazeProblem) -> f64 {
    let goal = problem.maze().goal();
    (state.row.abs_diff(goal.row) + state.col.abs_diff(goal.col)) as f64
}

/// Straight-line distance to the goal. Admissible, weaker than Manhattan on
/// grids.
pub fn euclidean_heuristic(state: &Position, problem: &MazeProblem) -> f64 {
    let goal = problem.maze().goal();
    let row_delta = state.row.abs_diff(goal.row) as f64;
    let col_delta = state.col.abs_diff(goal.col) as f64;
    (row_delta * row_delta + col_delta * col_delta).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: &str = "\
#####
#S.G#
#####";

    #[test]
    fn parses_walls_start_and_goal() {
        let maze: Maze = TINY.parse().unwrap();
        assert_eq!(maze.width(), 5);
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.start(), Position::new(1, 1));
        assert_eq!(maze.goal(), Position::new(1, 3));
        assert!(maze.is_wall(Position::new(0, 0)));
        assert!(!maze.is_wall(Position::new(1, 2)));
    }

    #[test]
    fn out_of_bounds_counts_as_wall() {
        let maze: Maze = TINY.parse().unwrap();
        assert!(maze.is_wall(Position::new(10, 10)));
        assert_eq!(maze.neighbor(Position::new(1, 1), Direction::North), None);
        assert_eq!(
            maze.neighbor(Position::new(1, 1), Direction::East),
            Some(Position::new(1, 2))
        );
    }

    #[test]
    fn rejects_unknown_characters() {
        let result: Result<Maze> = "#S?G#".parse();
        assert!(matches!(
            result,
            Err(Error::UnknownMapCharacter {
                character: '?',
                row: 0,
                column: 2,
            })
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let result: Result<Maze> = "####\n#SG#####\n####".parse();
        assert!(matches!(result, Err(Error::RaggedMap { row: 1, .. })));
    }

    #[test]
    fn rejects_missing_or_duplicate_markers() {
        assert!(matches!("..G".parse::<Maze>(), Err(Error::MissingStart)));
        assert!(matches!("S..".parse::<Maze>(), Err(Error::MissingGoal)));
        assert!(matches!(
            "SSG".parse::<Maze>(),
            Err(Error::DuplicateStart { .. })
        ));
        assert!(matches!(
            "SGG".parse::<Maze>(),
            Err(Error::DuplicateGoal { .. })
        ));
        assert!(matches!("".parse::<Maze>(), Err(Error::EmptyMap)));
    }

    #[test]
    fn successors_skip_walls() {
        let maze: Maze = TINY.parse().unwrap();
        let problem = MazeProblem::new(maze);
        let successors = problem.successors(&Position::new(1, 1));

        assert_eq!(successors.len(), 1, "only East is open from the start");
        assert_eq!(successors[0].action, Direction::East);
        assert_eq!(successors[0].cost, 1.0);
    }

    #[test]
    fn cell_costs_must_be_valid() {
        let maze: Maze = TINY.parse().unwrap();
        let mut costs = HashMap::new();
        costs.insert(Position::new(1, 2), -3.0);
        assert!(matches!(
            MazeProblem::with_cell_costs(maze, costs),
            Err(Error::InvalidCost { .. })
        ));
    }

    #[test]
    fn display_round_trips_layout() {
        let maze: Maze = TINY.parse().unwrap();
        let rendered = maze.to_string();
        let reparsed: Maze = rendered.parse().unwrap();
        assert_eq!(maze, reparsed);
    }
}
