use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{BufRead, Write};

use crate::{engine::InsertionOutcome, PlayerId, EMPTY};

const PROMPT: &str = "> ";
const WRONG_INPUT: &str = "ERROR";
const EXIT: &str = "EXIT";

// token colours, reused in order when there are more players than colours
const PLAYER_COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
];

/// Line-based terminal surface: reads player input and renders engine results
pub struct Console<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
        }
    }

    /// Colour occupied slots by player when printing the board
    pub fn with_style(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Prompts for and reads one line, `None` once the input is exhausted
    pub fn next_input(&mut self) -> Result<Option<String>> {
        self.output.write_all(PROMPT.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn print_outcome(&mut self, outcome: InsertionOutcome) -> Result<()> {
        writeln!(self.output, "{}", outcome)?;
        Ok(())
    }

    /// Prints one column per line, oldest insertion first. `sequence` is
    /// ordered most recent first, as the engine reports it
    pub fn print_insertion_sequence(&mut self, sequence: &[usize]) -> Result<()> {
        for column in sequence.iter().rev() {
            writeln!(self.output, "{}", column)?;
        }
        Ok(())
    }

    /// Prints the board top row first, followed by a rule and the column numbers
    ///
    /// ```text
    /// | 0 0 0 0
    /// | 0 0 1 0
    /// | 0 2 1 0
    /// | 2 1 2 1
    /// +--------
    ///   1 2 3 4
    /// ```
    pub fn print_board(&mut self, board: &[Vec<PlayerId>]) -> Result<()> {
        let width = board.first().map_or(0, Vec::len);

        for row in board {
            write!(self.output, "|")?;
            for &owner in row {
                self.print_owner(owner)?;
            }
            writeln!(self.output)?;
        }

        writeln!(self.output, "+{}", "--".repeat(width))?;
        let columns: String = (1..=width).map(|x| format!(" {}", x)).collect();
        writeln!(self.output, " {}", columns)?;
        self.output.flush()?;
        Ok(())
    }

    fn print_owner(&mut self, owner: PlayerId) -> Result<()> {
        let cell = format!(" {}", owner);
        if !self.styled || owner == EMPTY {
            self.output.write_all(cell.as_bytes())?;
            return Ok(());
        }

        let color = PLAYER_COLORS[(owner as usize - 1) % PLAYER_COLORS.len()];
        self.output
            .queue(PrintStyledContent(
                style(cell).attribute(Attribute::Bold).with(color),
            ))?;
        Ok(())
    }

    pub fn print_wrong_input(&mut self) -> Result<()> {
        writeln!(self.output, "{}", WRONG_INPUT)?;
        Ok(())
    }

    pub fn print_exit(&mut self) -> Result<()> {
        writeln!(self.output, "{}", EXIT)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{empty, Cursor};

    fn printed<F>(print: F) -> String
    where
        F: FnOnce(&mut Console<std::io::Empty, Vec<u8>>) -> Result<()>,
    {
        let mut console = Console::new(empty(), Vec::new());
        print(&mut console).unwrap();
        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn test_print_empty_board() {
        let board = vec![vec![0; 4]; 4];
        let out = printed(|c| c.print_board(&board));
        assert_eq!(
            out,
            "| 0 0 0 0\n| 0 0 0 0\n| 0 0 0 0\n| 0 0 0 0\n+--------\n  1 2 3 4\n"
        );
    }

    #[test]
    fn test_print_board_with_tokens() {
        let board = vec![vec![0, 0, 0], vec![0, 2, 0], vec![1, 1, 2]];
        let out = printed(|c| c.print_board(&board));
        assert_eq!(out, "| 0 0 0\n| 0 2 0\n| 1 1 2\n+------\n  1 2 3\n");
    }

    #[test]
    fn test_print_insertion_sequence_oldest_first() {
        let out = printed(|c| c.print_insertion_sequence(&[3, 1, 2]));
        assert_eq!(out, "2\n1\n3\n");
    }

    #[test]
    fn test_print_outcomes() {
        let out = printed(|c| {
            c.print_outcome(InsertionOutcome::Ok)?;
            c.print_outcome(InsertionOutcome::Error)?;
            c.print_outcome(InsertionOutcome::Win)?;
            c.print_outcome(InsertionOutcome::Draw)?;
            c.print_wrong_input()?;
            c.print_exit()
        });
        assert_eq!(out, "OK\nERROR\nWIN\nDRAW\nERROR\nEXIT\n");
    }

    #[test]
    fn test_next_input_prompts_and_reads_lines() {
        let mut console = Console::new(Cursor::new("PUT 1\nGET\n"), Vec::new());
        assert_eq!(console.next_input().unwrap().as_deref(), Some("PUT 1\n"));
        assert_eq!(console.next_input().unwrap().as_deref(), Some("GET\n"));
        assert_eq!(console.next_input().unwrap(), None);
        let (_, output) = console.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "> > > ");
    }

    #[test]
    fn test_styled_board_keeps_empty_slots_plain() {
        let board = vec![vec![0, 0], vec![1, 0]];
        let mut console = Console::new(empty(), Vec::new()).with_style(true);
        console.print_board(&board).unwrap();
        let out = String::from_utf8(console.into_inner().1).unwrap();
        assert!(out.starts_with("| 0 0\n|"));
        assert!(out.contains(" 1"));
        assert!(out.ends_with("+----\n  1 2\n"));
    }
}
