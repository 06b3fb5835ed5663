use std::io::{self, Write};

use clap::{App, Arg, ArgMatches};
use log::info;

use fleetgrid::{board::RectDimensions, fleet::Fleet};

use crate::{
    input::InputReader,
    session::{choose_placements, Outcome},
};

mod command;
mod input;
mod session;

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let matches = App::new("Fleet Placement")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Place a fleet of ships on a 10x10 grid from the command line.")
        .arg(
            Arg::with_name("random")
                .short("r")
                .long("random")
                .help("place the whole fleet at random instead of asking"),
        )
        .arg(
            Arg::with_name("max_attempts")
                .short("m")
                .long("max-attempts")
                .value_name("N")
                .help("give up after N rejected placements in a row for the same ship")
                .takes_value(true)
                .validator(|value| match value.parse::<usize>() {
                    Ok(n) if n > 0 => Ok(()),
                    _ => Err(format!("expected a positive number, got {}", value)),
                }),
        )
        .get_matches();
    let max_attempts = max_attempts(&matches)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = InputReader::new(stdin.lock(), stdout.lock());
    let mut rng = rand::thread_rng();

    let mut setup = Fleet::standard().into_setup(RectDimensions::default());
    if matches.is_present("random") {
        setup
            .place_randomly(&mut rng)
            .map_err(|reason| io::Error::new(io::ErrorKind::Other, reason))?;
    } else if choose_placements(&mut rng, &mut setup, &mut input, max_attempts)?
        == Outcome::EndOfInput
    {
        info!("input ended before the fleet was placed");
        return Ok(());
    }

    let grid = match setup.start() {
        Ok(grid) => grid,
        Err(_) => unreachable!("placement loop only finishes once every ship is placed"),
    };
    let out = input.output();
    writeln!(out)?;
    writeln!(out, "Your fleet:")?;
    write!(out, "{}", grid)?;
    out.flush()
}

/// Read the retry cap from the command line, if one was given.
fn max_attempts(matches: &ArgMatches) -> io::Result<Option<usize>> {
    matches
        .value_of("max_attempts")
        .map(|value| {
            value
                .parse()
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))
        })
        .transpose()
}
