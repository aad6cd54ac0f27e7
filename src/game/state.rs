use super::detector::{find_win, WinLine};
use super::{Grid, Player, Position};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game running, holding the player to move
    InProgress(Player),
    Won(WinLine),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Winner, if the game has been won
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(line) => Some(line.player),
            _ => None,
        }
    }

    /// Status line text
    pub fn message(&self) -> String {
        match self {
            GameStatus::InProgress(player) => format!("{}'s turn", player.name()),
            GameStatus::Won(line) => format!("{} won!", line.player.name()),
            GameStatus::Tied => "Tie!".to_string(),
        }
    }
}

/// A piece that landed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: Player,
    pub position: Position,
}

/// One game from empty grid to win or tie. Resetting means building a new
/// session; nothing here is rolled back.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    grid: Grid,
    status: GameStatus,
    moves: Vec<Placement>,
}

impl GameSession {
    /// Create an empty session with Player 1 to move
    pub fn new(width: usize, height: usize) -> Self {
        GameSession {
            grid: Grid::new(width, height),
            status: GameStatus::InProgress(Player::One),
            moves: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Player to move, `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress(player) => Some(player),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Placements made so far, oldest first
    pub fn moves(&self) -> &[Placement] {
        &self.moves
    }

    /// Columns that still accept a piece (empty once terminal)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.grid.width())
            .filter(|&col| !self.grid.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On error the session is untouched. On success the status moves to
    /// `Won` if the mover completed a line, `Tied` if the grid filled up, and
    /// otherwise hands the turn to the other player.
    pub fn play(&mut self, column: usize) -> Result<Placement, MoveError> {
        let mover = self.current_player().ok_or(MoveError::GameOver)?;

        let position = self.grid.drop_piece(column, mover)?;
        let placement = Placement {
            player: mover,
            position,
        };
        self.moves.push(placement);
        tracing::debug!(
            player = mover.number(),
            row = position.row,
            col = position.col,
            "piece placed"
        );

        self.status = if let Some(line) = find_win(&self.grid, mover) {
            tracing::info!(player = mover.number(), direction = ?line.direction, "game won");
            GameStatus::Won(line)
        } else if self.grid.is_full() {
            tracing::info!(moves = self.moves.len(), "game tied");
            GameStatus::Tied
        } else {
            GameStatus::InProgress(mover.other())
        };

        Ok(placement)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(super::DEFAULT_WIDTH, super::DEFAULT_HEIGHT)
    }
}
