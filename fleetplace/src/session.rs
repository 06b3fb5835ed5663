//! The interactive loop that places a fleet one ship at a time.
use std::io::{self, BufRead, Write};

use log::warn;
use rand::Rng;

use fleetgrid::{
    board::{PlacementCheck, RectDimensions},
    fleet::FleetSetup,
};

use crate::{
    command::{parse_command, Command, HELP},
    input::InputReader,
};

/// How the placement loop ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// Every ship was placed.
    Placed,
    /// Input ran out before every ship was placed.
    EndOfInput,
}

/// Choose placements for all ships using input from the player.
///
/// A ship whose placement is rejected is asked for again. When `max_attempts` is set,
/// that many rejected placements in a row for the same ship abort setup with an error.
pub fn choose_placements<B: BufRead, W: Write>(
    rng: &mut impl Rng,
    setup: &mut FleetSetup<RectDimensions>,
    input: &mut InputReader<B, W>,
    max_attempts: Option<usize>,
) -> io::Result<Outcome> {
    let dim = *setup.grid().dimensions();
    let mut rejected = 0;
    while let Some(ship) = setup.next_pending() {
        let name = ship.name().to_owned();
        writeln!(input.output())?;
        writeln!(
            input.output(),
            "Enter the coordinates for the {} (length {}, symbol {}). Type help or ? for commands.",
            name,
            ship.len(),
            ship.symbol()
        )?;

        let cmd = match input.read_input_lower(">", |line| parse_command(line, &dim))? {
            Some(cmd) => cmd,
            None => return Ok(Outcome::EndOfInput),
        };

        match cmd {
            Command::Help => writeln!(input.output(), "{}", HELP)?,
            Command::RandomizeRest => match setup.place_randomly(rng) {
                Ok(()) => writeln!(input.output(), "Remaining ships placed at random.")?,
                Err(reason) => writeln!(
                    input.output(),
                    "Could not place the remaining ships: {}.",
                    reason
                )?,
            },
            Command::Place(start, dir) => {
                let check = match setup.check_next(start, dir) {
                    Some(check) => check,
                    None => break,
                };
                if check.is_valid() {
                    let placed = setup
                        .place_next(start, dir)
                        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
                    writeln!(
                        input.output(),
                        "{} placed at {} ({}).",
                        placed.name(),
                        start,
                        dir.code()
                    )?;
                    rejected = 0;
                } else {
                    report_rejection(input.output(), &check)?;
                    rejected += 1;
                    if let Some(max) = max_attempts {
                        if rejected >= max {
                            warn!("giving up on {} after {} rejected placements", name, rejected);
                            return Err(io::Error::new(
                                io::ErrorKind::Other,
                                format!(
                                    "gave up placing the {} after {} rejected {}",
                                    name,
                                    rejected,
                                    if rejected == 1 { "attempt" } else { "attempts" }
                                ),
                            ));
                        }
                    }
                }
            }
        }
    }
    Ok(Outcome::Placed)
}

/// Tell the player every cell that made a placement invalid, then why it was refused.
fn report_rejection(out: &mut impl Write, check: &PlacementCheck) -> io::Result<()> {
    for cell in check.out_of_bounds_cells() {
        writeln!(out, "Cell {} is outside the grid.", cell)?;
    }
    for cell in check.overlapping_cells() {
        writeln!(out, "Cell {} is already occupied by another ship.", cell)?;
    }
    let summary = match (check.out_of_bounds(), check.overlapping()) {
        (true, true) => "The placement goes past the edge of the grid and overlaps another ship.",
        (true, false) => "The placement goes past the edge of the grid.",
        (false, true) => "The placement overlaps another ship.",
        (false, false) => return Ok(()),
    };
    writeln!(out, "{} Please try again.", summary)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use fleetgrid::{
        board::{Coordinate, GridManager, Marker},
        fleet::Fleet,
        ships::{Orientation, Ship},
    };
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn run(
        script: &str,
        max_attempts: Option<usize>,
    ) -> (io::Result<Outcome>, FleetSetup<RectDimensions>, String) {
        let mut rng = StdRng::seed_from_u64(7);
        let mut setup = Fleet::standard().into_setup(RectDimensions::default());
        let mut input = InputReader::new(Cursor::new(script.to_owned()), Vec::new());
        let result = choose_placements(&mut rng, &mut setup, &mut input, max_attempts);
        let output = String::from_utf8(input.into_output()).unwrap();
        (result, setup, output)
    }

    #[test]
    fn places_whole_fleet_from_script() {
        let (result, setup, output) = run("1 a h\n2 a h\n3 a h\n4 a h\n5 a h\n", None);
        assert_eq!(result.unwrap(), Outcome::Placed);
        assert!(setup.ready());
        assert!(output.contains("Carrier placed at A1 (H)."));
        assert!(output.contains("Patrol Boat placed at A5 (H)."));
        assert_eq!(setup.grid().get(Coordinate::new(4, 0)), Some(Marker::Ship('E')));
    }

    #[test]
    fn reports_out_of_bounds_and_retries() {
        let (result, setup, output) = run("7 a v\n1 a h\n", None);
        assert_eq!(result.unwrap(), Outcome::EndOfInput);
        assert!(output.contains("Cell A11 is outside the grid."));
        assert!(output.contains("The placement goes past the edge of the grid. Please try again."));
        assert!(output.contains("Carrier placed at A1 (H)."));
        assert_eq!(setup.next_pending().unwrap().name(), "Battleship");
    }

    #[test]
    fn reports_overlap() {
        let (_, setup, output) = run("1 a h\n1 b v\n", None);
        assert!(output.contains("Cell B1 is already occupied by another ship."));
        assert!(output.contains("The placement overlaps another ship. Please try again."));
        assert_eq!(setup.grid().placed_ships().len(), 1);
    }

    #[test]
    fn reports_both_problems() {
        let (_, _, output) = run("10 a h\n8 a v\n", None);
        assert!(output.contains("Cell A10 is already occupied by another ship."));
        assert!(output.contains("Cell A11 is outside the grid."));
        assert!(output.contains("past the edge of the grid and overlaps another ship"));
    }

    #[test]
    fn rejection_report_lists_cells_then_summary() {
        let mut grid = GridManager::default();
        let carrier = Ship::new("Carrier", 5, 'A');
        let cells = carrier.project(Coordinate::new(9, 0), Orientation::Horizontal);
        grid.place_ship(carrier, cells).unwrap();
        let battleship = Ship::new("Battleship", 4, 'B');
        let check =
            grid.check_placement(&battleship.project(Coordinate::new(7, 0), Orientation::Vertical));

        let mut out = Vec::new();
        report_rejection(&mut out, &check).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Cell A11 is outside the grid.\n\
             Cell A10 is already occupied by another ship.\n\
             The placement goes past the edge of the grid and overlaps another ship. \
             Please try again.\n"
        );
    }

    #[test]
    fn valid_check_reports_nothing() {
        let grid = GridManager::default();
        let check = grid.check_placement(&[Coordinate::new(0, 0)]);
        let mut out = Vec::new();
        report_rejection(&mut out, &check).unwrap();
        assert_eq!(out, Vec::<u8>::new());
    }

    #[test]
    fn malformed_input_is_reprompted() {
        let (result, _, output) = run("zzz\n0 a v\n1 a q\n1 a h\n", None);
        assert_eq!(result.unwrap(), Outcome::EndOfInput);
        assert!(output.contains("Invalid placement \"zzz\""));
        assert!(output.contains("row 0 is out of range"));
        assert!(output.contains("invalid orientation"));
        assert!(output.contains("Carrier placed at A1 (H)."));
    }

    #[test]
    fn malformed_input_does_not_count_as_attempt() {
        let (result, _, _) = run("zzz\nzzz\n1 a h\n", Some(1));
        assert_eq!(result.unwrap(), Outcome::EndOfInput);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let (result, setup, _) = run("7 a v\n1 g h\n1 a h\n", Some(2));
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "gave up placing the Carrier after 2 rejected attempts"
        );
        assert!(setup.grid().placed_ships().is_empty());
    }

    #[test]
    fn single_attempt_limit_reads_singular() {
        let (result, _, _) = run("7 a v\n", Some(1));
        assert_eq!(
            result.unwrap_err().to_string(),
            "gave up placing the Carrier after 1 rejected attempt"
        );
    }

    #[test]
    fn randomize_places_the_rest() {
        let (result, setup, output) = run("1 a h\nrandom\n", None);
        assert_eq!(result.unwrap(), Outcome::Placed);
        assert!(output.contains("Remaining ships placed at random."));
        assert!(setup.ready());
        assert_eq!(setup.grid().get(Coordinate::new(0, 0)), Some(Marker::Ship('A')));
    }

    #[test]
    fn help_lists_commands() {
        let (_, _, output) = run("?\n", None);
        assert!(output.contains("Available Commands:"));
    }
}
