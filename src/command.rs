//! Parsing of the line-based commands a player types

use std::str::FromStr;

use crate::error::CommandError;

const PUT: &str = "PUT";
const GET: &str = "GET";
const BOARD: &str = "BOARD";
const EXIT: &str = "EXIT";

/// A well-formed player command
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Drop a token into a 1-based column
    Put(usize),
    /// Show the columns played so far
    Get,
    /// Show the board
    Board,
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Commands are case-insensitive. `PUT` needs exactly one column made of
    /// ASCII digits, the others take no argument.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let argument = words.next();
        let extra = words.next();

        let name = name.to_ascii_uppercase();
        let no_argument = |command: &'static str, value: Command| match argument {
            None => Ok(value),
            Some(_) => Err(CommandError::UnexpectedArgument { command }),
        };

        match name.as_str() {
            PUT => {
                let column = argument.ok_or(CommandError::MissingColumn {
                    command: PUT,
                })?;
                if let Some(extra) = extra {
                    return Err(CommandError::InvalidColumn(extra.to_string()));
                }
                if !column.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(CommandError::InvalidColumn(column.to_string()));
                }
                column
                    .parse::<usize>()
                    .map(Command::Put)
                    .map_err(|_| CommandError::InvalidColumn(column.to_string()))
            }
            GET => no_argument(GET, Command::Get),
            BOARD => no_argument(BOARD, Command::Board),
            EXIT => no_argument(EXIT, Command::Exit),
            _ => Err(CommandError::Unknown(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("PUT 3".parse::<Command>(), Ok(Command::Put(3)));
        assert_eq!("GET".parse::<Command>(), Ok(Command::Get));
        assert_eq!("BOARD".parse::<Command>(), Ok(Command::Board));
        assert_eq!("EXIT".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("put 1".parse::<Command>(), Ok(Command::Put(1)));
        assert_eq!("Board".parse::<Command>(), Ok(Command::Board));
        assert_eq!("eXiT".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        assert_eq!("   PUT    2  \n".parse::<Command>(), Ok(Command::Put(2)));
        assert_eq!("\tGET ".parse::<Command>(), Ok(Command::Get));
    }

    #[test]
    fn test_put_column_zero_still_parses() {
        // range checks belong to the engine
        assert_eq!("PUT 0".parse::<Command>(), Ok(Command::Put(0)));
        assert_eq!("PUT 99".parse::<Command>(), Ok(Command::Put(99)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "JUMP".parse::<Command>(),
            Err(CommandError::Unknown("JUMP".to_string()))
        );
        assert_eq!(
            "PUT".parse::<Command>(),
            Err(CommandError::MissingColumn { command: "PUT" })
        );
        assert_eq!(
            "GET 2".parse::<Command>(),
            Err(CommandError::UnexpectedArgument { command: "GET" })
        );
        assert_eq!(
            "PUT 1 2".parse::<Command>(),
            Err(CommandError::InvalidColumn("2".to_string()))
        );
        assert!("PUT3".parse::<Command>().is_err());
    }

    #[test]
    fn test_extra_words_are_unexpected_arguments() {
        assert_eq!(
            "GET a b".parse::<Command>(),
            Err(CommandError::UnexpectedArgument { command: "GET" })
        );
        assert_eq!(
            "exit x y".parse::<Command>(),
            Err(CommandError::UnexpectedArgument { command: "EXIT" })
        );
        assert_eq!(
            "BOARD 1 2 3".parse::<Command>(),
            Err(CommandError::UnexpectedArgument { command: "BOARD" })
        );
    }

    #[test]
    fn test_parse_rejects_non_digit_columns() {
        assert!("PUT -1".parse::<Command>().is_err());
        assert!("PUT +1".parse::<Command>().is_err());
        assert!("PUT a".parse::<Command>().is_err());
        assert!("PUT 99999999999999999999999999".parse::<Command>().is_err());
    }
}
