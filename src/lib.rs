//! A rules engine for the token-drop board game 'Drop Token'
//!
//! Players take turns dropping tokens into the columns of a square board.
//! A token falls to the lowest free row of its column, and a player wins by
//! lining up `winning_streak` of their own tokens horizontally, vertically
//! or diagonally. A full board with no winner is a draw.
//!
//! Win detection is incremental: every slot remembers the length of the run
//! ending at it in each direction, so a move only looks at its immediate
//! neighbours (plus one pass to the right along its row).
//!
//! # Basic Usage
//!
//! ```
//! use drop_token::{Engine, InsertionOutcome, GameStatus};
//!
//! let mut engine = Engine::default();
//! for column in [0, 0, 1, 1, 2, 2] {
//!     assert_eq!(engine.insert(column), InsertionOutcome::Ok);
//! }
//!
//! assert_eq!(engine.insert(3), InsertionOutcome::Win);
//! assert_eq!(engine.status(), GameStatus::FinishedWin);
//! assert_eq!(engine.previous_player_id(), 1);
//! ```

use static_assertions::*;

pub mod slot;

pub mod turn_order;

pub mod engine;

pub mod config;

pub mod error;

pub mod command;

pub mod console;

pub mod controller;


pub use command::Command;
pub use config::EngineConfig;
pub use console::Console;
pub use controller::Controller;
pub use engine::{Engine, GameStatus, InsertionOutcome};
pub use error::{CommandError, ConfigError, InsertError};
pub use slot::Slot;
pub use turn_order::TurnOrder;

/// Identifies a player. Real players are numbered from 1
pub type PlayerId = u32;

/// Owner id of a slot that holds no token
pub const EMPTY: PlayerId = 0;

/// The width and height of the default board in slots
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// The largest board an engine will allocate
pub const MAX_BOARD_SIZE: usize = 1024;

/// The number of players taking turns on the default board
pub const DEFAULT_PLAYERS_COUNT: u32 = 2;

/// The run length needed to win on the default board
pub const DEFAULT_WINNING_STREAK: usize = DEFAULT_BOARD_SIZE;

// a default game must be winnable and have someone to play it
const_assert!(DEFAULT_BOARD_SIZE > 0 && DEFAULT_BOARD_SIZE <= MAX_BOARD_SIZE);
const_assert!(DEFAULT_PLAYERS_COUNT > 0);
const_assert!(DEFAULT_WINNING_STREAK > 0 && DEFAULT_WINNING_STREAK <= DEFAULT_BOARD_SIZE);
