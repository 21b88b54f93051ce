use anyhow::Result;
use tracing::{debug, warn};

use std::io::{BufRead, Write};

use crate::{command::Command, console::Console, engine::Engine, engine::InsertionOutcome};

/// Runs the command loop: reads commands from the console, applies them to
/// the engine and prints the results
pub struct Controller<R, W> {
    engine: Engine,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(engine: Engine, console: Console<R, W>) -> Self {
        Self { engine, console }
    }

    /// Plays until `EXIT` or the end of input, handing back the engine and
    /// console in their final state
    pub fn run(mut self) -> Result<(Engine, Console<R, W>)> {
        while let Some(line) = self.console.next_input()? {
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    warn!(input = line.trim(), %err, "unrecognised command");
                    self.console.print_wrong_input()?;
                    continue;
                }
            };
            debug!(?command, "command received");

            match command {
                Command::Put(column) => self.put(column)?,
                Command::Get => self
                    .console
                    .print_insertion_sequence(&self.engine.insertion_sequence())?,
                Command::Board => self.console.print_board(&self.engine.board())?,
                Command::Exit => {
                    self.console.print_exit()?;
                    break;
                }
            }
        }
        Ok((self.engine, self.console))
    }

    // players count columns from 1
    fn put(&mut self, column: usize) -> Result<()> {
        let outcome = match column.checked_sub(1) {
            Some(column) => self.engine.insert(column),
            None => InsertionOutcome::Error,
        };
        self.console.print_outcome(outcome)
    }
}
