//! A miniature pellet-chase game for the adversarial search agents.
//!
//! Agent 0 is the player, agents `1..` are chasers. The player clears
//! pellets to win; touching a chaser loses. All agents move through the same
//! four-connected grid. Boards parse from ASCII maps (`#` wall, `P` player,
//! `C` chaser, `.` pellet, space open).

use std::{collections::BTreeSet, fmt, str::FromStr, sync::Arc};

use crate::{
    Error, Result,
    game::GameState,
    maze::{Direction, Position},
};

/// Points gained for eating one pellet.
pub const PELLET_SCORE: f64 = 10.0;
/// Bonus for clearing the last pellet.
pub const WIN_BONUS: f64 = 500.0;
/// Penalty for colliding with a chaser.
pub const LOSE_PENALTY: f64 = 500.0;
/// Cost of every player move.
pub const TIME_PENALTY: f64 = 1.0;

/// Static walls, shared between the states of one game.
#[derive(Debug, PartialEq, Eq)]
struct Board {
    width: usize,
    height: usize,
    walls: Vec<bool>,
}

impl Board {
    fn is_wall(&self, position: Position) -> bool {
        if position.row >= self.height || position.col >= self.width {
            return true;
        }
        self.walls[position.row * self.width + position.col]
    }

    fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let (row_offset, col_offset) = direction.offset();
        let row = position.row.checked_add_signed(row_offset)?;
        let col = position.col.checked_add_signed(col_offset)?;
        let next = Position::new(row, col);
        if self.is_wall(next) { None } else { Some(next) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameStatus {
    Ongoing,
    Won,
    Lost,
}

/// Full state of a pursuit game.
///
/// Cheap to clone: the wall layout is shared behind an `Arc`, so successor
/// generation copies only the mutable parts.
#[derive(Debug, Clone)]
pub struct PursuitState {
    board: Arc<Board>,
    pellets: BTreeSet<Position>,
    player: Position,
    chasers: Vec<Position>,
    score: f64,
    status: GameStatus,
}

impl PursuitState {
    /// The running score, as used by [`score_evaluation`].
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn chasers(&self) -> &[Position] {
        &self.chasers
    }

    pub fn pellets_remaining(&self) -> usize {
        self.pellets.len()
    }

    /// Whether the game has ended in a win or a loss.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Ongoing
    }

    fn agent_position(&self, agent: usize) -> Position {
        if agent == 0 {
            self.player
        } else {
            self.chasers[agent - 1]
        }
    }

    fn apply(&mut self, agent: usize, direction: Direction) {
        let from = self.agent_position(agent);
        let next = self
            .board
            .neighbor(from, direction)
            .expect("applied actions must come from legal_actions");

        if agent == 0 {
            self.player = next;
            self.score -= TIME_PENALTY;
            if self.chasers.contains(&next) {
                self.status = GameStatus::Lost;
                self.score -= LOSE_PENALTY;
                return;
            }
            if self.pellets.remove(&next) {
                self.score += PELLET_SCORE;
                if self.pellets.is_empty() {
                    self.status = GameStatus::Won;
                    self.score += WIN_BONUS;
                }
            }
        } else {
            self.chasers[agent - 1] = next;
            if next == self.player {
                self.status = GameStatus::Lost;
                self.score -= LOSE_PENALTY;
            }
        }
    }
}

impl GameState for PursuitState {
    type Action = Direction;

    fn num_agents(&self) -> usize {
        1 + self.chasers.len()
    }

    fn legal_actions(&self, agent: usize) -> Vec<Direction> {
        if self.status != GameStatus::Ongoing {
            return Vec::new();
        }
        let from = self.agent_position(agent);
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.board.neighbor(from, direction).is_some())
            .collect()
    }

    fn successor(&self, agent: usize, action: &Direction) -> Self {
        let mut next = self.clone();
        next.apply(agent, *action);
        next
    }

    fn is_win(&self) -> bool {
        self.status == GameStatus::Won
    }

    fn is_lose(&self) -> bool {
        self.status == GameStatus::Lost
    }
}

impl FromStr for PursuitState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.lines().filter(|line| !line.is_empty()).collect();
        if rows.is_empty() {
            return Err(Error::EmptyMap);
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        let mut walls = vec![false; width * height];
        let mut pellets = BTreeSet::new();
        let mut player = None;
        let mut chasers = Vec::new();

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
                let position = Position::new(row, column);
                match character {
                    '#' => walls[row * width + column] = true,
                    ' ' => {}
                    '.' => {
                        pellets.insert(position);
                    }
                    'P' => {
                        if player.is_some() {
                            return Err(Error::DuplicatePlayer { row, column });
                        }
                        player = Some(position);
                    }
                    'C' => chasers.push(position),
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

        Ok(PursuitState {
            board: Arc::new(Board {
                width,
                height,
                walls,
            }),
            pellets,
            player: player.ok_or(Error::MissingPlayer)?,
            chasers,
            score: 0.0,
            status: GameStatus::Ongoing,
        })
    }
}

impl fmt::Display for PursuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.board.height {
            for col in 0..self.board.width {
                let position = Position::new(row, col);
                let cell = if self.board.is_wall(position) {
                    '#'
                } else if position == self.player {
                    'P'
                } else if self.chasers.contains(&position) {
                    'C'
                } else if self.pellets.contains(&position) {
                    '.'
                } else {
                    ' '
                };
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The default leaf evaluation: the state's running score.
pub fn score_evaluation(state: &PursuitState) -> f64 {
    state.score()
}
