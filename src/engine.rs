//! The game state and its incremental win detection

use tracing::{debug, info, instrument};

use std::fmt;

use crate::{
    config::EngineConfig, error::ConfigError, error::InsertError, slot::Slot,
    turn_order::TurnOrder, PlayerId,
};

/// The result of an insertion attempt
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertionOutcome {
    Ok,
    Error,
    Win,
    Draw,
}

impl fmt::Display for InsertionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InsertionOutcome::Ok => "OK",
            InsertionOutcome::Error => "ERROR",
            InsertionOutcome::Win => "WIN",
            InsertionOutcome::Draw => "DRAW",
        })
    }
}

/// Both finished states are terminal
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    FinishedWin,
    FinishedDraw,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::Playing => "PLAYING",
            GameStatus::FinishedWin => "FINISHED_WIN",
            GameStatus::FinishedDraw => "FINISHED_DRAW",
        })
    }
}

/// A single game of Drop Token
///
/// # Board Layout
/// Row 0 is the top of the board and row `board_size - 1` the bottom, so a
/// token dropped into an empty column lands in the last row. Columns are
/// 0-based here; the insertion sequence reports them 1-based, as players
/// name them.
///
/// # Win Detection
/// Every occupied slot stores the length of the same-owner run ending at it
/// in three directions. A new token derives its vertical and diagonal runs
/// from the slots below it, and its horizontal run from its left neighbour,
/// then pushes the updated count through any run of its own tokens to its
/// right. Each direction reads and writes only its own streak field, so the
/// order the directions are evaluated in does not matter, and the pass to
/// the right never touches ownership or the other two fields.
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    size: usize,
    winning_streak: usize,
    slots: Vec<Slot>, // row-major, top row first
    // next free row of each column, None once the column is full
    insertion_rows: Vec<Option<usize>>,
    token_count: usize,
    status: GameStatus,
    turn_order: TurnOrder,
    // 1-based columns, oldest first
    insertion_sequence: Vec<usize>,
}

impl Engine {
    /// Creates an engine for a validated configuration
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EngineConfig) -> Self {
        let size = config.board_size;
        Self {
            config,
            size,
            winning_streak: config.winning_streak(),
            slots: vec![Slot::empty(); size * size],
            insertion_rows: vec![Some(size - 1); size],
            token_count: 0,
            status: GameStatus::Playing,
            turn_order: TurnOrder::new(config.players_count),
            insertion_sequence: Vec::new(),
        }
    }

    /// Drops a token for the player whose turn it is into `column` (0-based)
    ///
    /// Every rejection is reported as `InsertionOutcome::Error`; use
    /// [`try_insert`](Engine::try_insert) to learn why a move was refused.
    pub fn insert(&mut self, column: usize) -> InsertionOutcome {
        self.try_insert(column).unwrap_or(InsertionOutcome::Error)
    }

    /// Drops a token into `column` (0-based), reporting why a move is refused
    ///
    /// Returns `Ok`, `Win` or `Draw` for an accepted move. A rejected move
    /// leaves the board, the counters and the turn order untouched.
    #[instrument(skip(self))]
    pub fn try_insert(&mut self, column: usize) -> Result<InsertionOutcome, InsertError> {
        if self.status != GameStatus::Playing {
            debug!("insertion rejected, game is over");
            return Err(InsertError::GameOver);
        }
        if column >= self.size {
            debug!("insertion rejected, column out of range");
            return Err(InsertError::ColumnOutOfRange {
                column,
                board_size: self.size,
            });
        }
        let row = match self.insertion_rows[column] {
            Some(row) => row,
            None => {
                debug!("insertion rejected, column full");
                return Err(InsertError::ColumnFull { column });
            }
        };

        let player = self.turn_order.advance();
        *self.slot_mut(row, column) = Slot::owned_by(player);
        let won = self.update_streaks(row, column);

        self.insertion_rows[column] = row.checked_sub(1);
        self.token_count += 1;
        self.insertion_sequence.push(column + 1);

        let outcome = if won {
            self.status = GameStatus::FinishedWin;
            info!(player, "game won");
            InsertionOutcome::Win
        } else if self.token_count == self.size * self.size {
            self.status = GameStatus::FinishedDraw;
            info!("game drawn");
            InsertionOutcome::Draw
        } else {
            InsertionOutcome::Ok
        };
        debug!(player, row, %outcome, "token placed");
        Ok(outcome)
    }

    /// Recomputes every streak of the freshly placed slot, returning whether
    /// any of them completes a winning run
    fn update_streaks(&mut self, row: usize, column: usize) -> bool {
        let vertical = self.update_vertical_streak(row, column);
        let diagonal = self.update_diagonal_streak(row, column);
        let horizontal = self.update_horizontal_streak(row, column);

        vertical >= self.winning_streak
            || diagonal >= self.winning_streak
            || horizontal >= self.winning_streak
    }

    fn update_vertical_streak(&mut self, row: usize, column: usize) -> usize {
        let current = self.slots[self.index(row, column)];
        let streak = match self.slot(row + 1, column) {
            Some(below) if current.same_owner(below) => below.streak_vertical + 1,
            _ => 1,
        };
        self.slot_mut(row, column).streak_vertical = streak;
        streak
    }

    // one counter serves both diagonals: the longer of the two runs arriving
    // from the bottom-left and bottom-right neighbours. Tokens above the new
    // slot are never consulted
    fn update_diagonal_streak(&mut self, row: usize, column: usize) -> usize {
        let current = self.slots[self.index(row, column)];
        let mut streak = 1;
        for &neighbour_column in [column.checked_sub(1), Some(column + 1)].iter().flatten() {
            if let Some(neighbour) = self.slot(row + 1, neighbour_column) {
                if current.same_owner(neighbour) {
                    streak = streak.max(neighbour.streak_diagonal + 1);
                }
            }
        }
        self.slot_mut(row, column).streak_diagonal = streak;
        streak
    }

    /// Returns the length of the horizontal run through the new slot, which
    /// ends at the rightmost token of that run
    fn update_horizontal_streak(&mut self, row: usize, column: usize) -> usize {
        let current = self.slots[self.index(row, column)];
        let mut streak = match column.checked_sub(1).and_then(|left| self.slot(row, left)) {
            Some(left) if current.same_owner(left) => left.streak_horizontal + 1,
            _ => 1,
        };
        self.slot_mut(row, column).streak_horizontal = streak;

        // tokens on the right were counted before this slot was filled
        for right in column + 1..self.size {
            let neighbour = self.slot_mut(row, right);
            if !current.same_owner(neighbour) {
                break;
            }
            streak += 1;
            neighbour.streak_horizontal = streak;
        }
        streak
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.size + column
    }

    fn slot_mut(&mut self, row: usize, column: usize) -> &mut Slot {
        let index = self.index(row, column);
        &mut self.slots[index]
    }

    /// The slot at `(row, column)`, or `None` outside the board
    pub fn slot(&self, row: usize, column: usize) -> Option<&Slot> {
        if row < self.size && column < self.size {
            Some(&self.slots[self.index(row, column)])
        } else {
            None
        }
    }

    /// Snapshot of the slot owners, top row first, with `EMPTY` for free slots
    pub fn board(&self) -> Vec<Vec<PlayerId>> {
        self.slots
            .chunks(self.size)
            .map(|row| row.iter().map(|slot| slot.owner).collect())
            .collect()
    }

    /// 1-based columns of every accepted insertion, most recent first
    pub fn insertion_sequence(&self) -> Vec<usize> {
        self.insertion_sequence.iter().rev().copied().collect()
    }

    /// The player who will make the next move
    pub fn current_player_id(&self) -> PlayerId {
        self.turn_order.current_player_id()
    }

    /// The player who made the last accepted move
    pub fn previous_player_id(&self) -> PlayerId {
        self.turn_order.previous_player_id()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board_size(&self) -> usize {
        self.size
    }

    pub fn winning_streak(&self) -> usize {
        self.winning_streak
    }

    /// Number of accepted insertions so far
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Whether an insertion into `column` would currently be accepted
    pub fn is_playable(&self, column: usize) -> bool {
        self.status == GameStatus::Playing
            && self
                .insertion_rows
                .get(column)
                .map_or(false, Option::is_some)
    }

    /// The columns that still accept a token, in ascending order
    pub fn available_columns(&self) -> Vec<usize> {
        (0..self.size).filter(|&column| self.is_playable(column)).collect()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::from_valid_config(EngineConfig::default())
    }
}
