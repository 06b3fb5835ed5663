//! Parsing of the commands typed during ship placement.
use once_cell::sync::Lazy;
use regex::Regex;

use fleetgrid::{
    board::{Coordinate, RectDimensions},
    ships::Orientation,
};

/// A command entered while placing ships.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// Place the next ship starting at the coordinate in the given orientation.
    Place(Coordinate, Orientation),
    /// Place all remaining ships at random.
    RandomizeRest,
    /// Show the available commands.
    Help,
}

/// Usage text shown for the help command.
pub const HELP: &str = "Available Commands:
    <row> <column> <dir>   place the next ship with its first cell at the given row (1-10)
                           and column (A-J), extending in the given direction. Direction is
                           V (vertical, downward) or H (horizontal, rightward).
                           Examples: \"6 A V\", \"6,a,h\", \"A6 H\"
    random                 place the remaining ships at random.
    help                   show this message.";

/// Parse one line of input, already lowercased and trimmed. Returns a message for the
/// player if the line is not a valid command.
pub fn parse_command(input: &str, dim: &RectDimensions) -> Result<Command, String> {
    /// Matcher for placements, with the row and column in either order.
    static PLACE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:place\s+)?
        (?:
            (?P<row>[0-9]+)\s*(?:,\s*)?(?P<col>[a-z])
            |
            (?P<col_first>[a-z])\s*(?:,\s*)?(?P<row_last>[0-9]+)
        )
        (?:\s*,\s*|\s+)
        (?P<dir>[a-z]+)$",
        )
        .unwrap()
    });

    match input {
        "?" | "help" | "h" => Ok(Command::Help),
        "random" | "rand" | "randomize" => Ok(Command::RandomizeRest),
        other => {
            let captures = PLACE.captures(other).ok_or_else(|| {
                format!(
                    "Invalid placement \"{}\". Enter a row, a column and a direction, \
                     e.g. \"6 A V\". Use '?' for help.",
                    other
                )
            })?;
            let row = captures
                .name("row")
                .or_else(|| captures.name("row_last"))
                .map_or("", |m| m.as_str());
            let col = captures
                .name("col")
                .or_else(|| captures.name("col_first"))
                .map_or("", |m| m.as_str());
            let start = dim
                .parse_coordinate(row, col)
                .map_err(|err| format!("Invalid coordinate: {}.", err))?;
            let dir = captures
                .name("dir")
                .map_or("", |m| m.as_str())
                .parse::<Orientation>()
                .map_err(|err| format!("Invalid direction: {}.", err))?;
            Ok(Command::Place(start, dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Command, String> {
        parse_command(input, &RectDimensions::default())
    }

    #[test]
    fn parses_row_first_placements() {
        assert_eq!(
            parse("6 a v"),
            Ok(Command::Place(Coordinate::new(5, 0), Orientation::Vertical))
        );
        assert_eq!(
            parse("6,a,h"),
            Ok(Command::Place(Coordinate::new(5, 0), Orientation::Horizontal))
        );
        assert_eq!(
            parse("10j v"),
            Ok(Command::Place(Coordinate::new(9, 9), Orientation::Vertical))
        );
        assert_eq!(
            parse("place 1 b horizontal"),
            Ok(Command::Place(Coordinate::new(0, 1), Orientation::Horizontal))
        );
    }

    #[test]
    fn parses_column_first_placements() {
        assert_eq!(
            parse("a6 h"),
            Ok(Command::Place(Coordinate::new(5, 0), Orientation::Horizontal))
        );
        assert_eq!(
            parse("c, 3, v"),
            Ok(Command::Place(Coordinate::new(2, 2), Orientation::Vertical))
        );
    }

    #[test]
    fn parses_keywords() {
        assert_eq!(parse("?"), Ok(Command::Help));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("random"), Ok(Command::RandomizeRest));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let err = parse("0 a v").unwrap_err();
        assert!(err.contains("row 0 is out of range"), "{}", err);
        let err = parse("11 a v").unwrap_err();
        assert!(err.contains("row 11 is out of range"), "{}", err);
        let err = parse("5 k v").unwrap_err();
        assert!(err.contains("column K is out of range"), "{}", err);
        let err = parse("5 a x").unwrap_err();
        assert!(err.contains("invalid orientation"), "{}", err);
    }

    #[test]
    fn rejects_malformed_lines() {
        for input in &["", "v", "a v", "5 v", "five a v", "-1 a v", "5 ab v"] {
            let err = parse(input).unwrap_err();
            assert!(err.starts_with("Invalid placement"), "{}: {}", input, err);
        }
    }
}
