//! `flifetch` - CLI for flightfetcher
//!
//! This binary looks up flights between two airports via the aviationstack
//! service and prints them as JSON, or hands them to the interactive booking
//! desk. All failures are reported as a single `Error:` line on standard
//! error with exit code 1.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::process;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use flightfetcher::cli::{BookCommand, Cli, Command};
use flightfetcher::{booking, init_logging, output, Config};
use flightfetcher_aviationstack::{FlightClient, FlightList, FlightQuery};

fn main() {
    let cli = parse_cli();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Execute the command
    let result = match &cli.command {
        Some(Command::Book(cmd)) => handle_book(&cli, cmd),
        None => match cli.route() {
            Some((source, destination)) => handle_fetch(&cli, source, destination),
            None => exit_with_usage(),
        },
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

/// Parse arguments, keeping the documented exit codes.
///
/// clap renders `--help` and `--version` to standard output and usage
/// problems to standard error; the exit codes are ours: 0 for the former,
/// 1 for misuse.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let misuse = err.use_stderr();
            let _ = err.print();
            process::exit(i32::from(misuse));
        }
    }
}

/// Report a missing route on standard error and exit 1.
///
/// Reached when fewer than two positional codes are given; three or more
/// already fail in [`parse_cli`].
fn exit_with_usage() -> ! {
    let mut cmd = Cli::command();
    let err = cmd.error(
        ErrorKind::MissingRequiredArgument,
        "expected a departure and an arrival airport code",
    );
    let _ = err.print();
    process::exit(1);
}

/// Look up flights for a route and print them as JSON on standard output.
fn handle_fetch(cli: &Cli, source: &str, destination: &str) -> Result<()> {
    let flights = fetch_flights(cli, source, destination)?;
    println!("{}", output::render_flights(&flights)?);
    Ok(())
}

/// Look up flights for a route and run an interactive booking session.
fn handle_book(cli: &Cli, cmd: &BookCommand) -> Result<()> {
    let flights = fetch_flights(cli, &cmd.source, &cmd.destination)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    booking::session::run(&mut stdin.lock(), &mut stdout.lock(), flights)?;
    Ok(())
}

/// Load configuration and fetch the flight list for a route.
fn fetch_flights(cli: &Cli, source: &str, destination: &str) -> Result<FlightList> {
    let config = Config::load_from(cli.config.clone())?;
    let key = config.require_key()?;

    let client = FlightClient::new(config.api.url.clone(), config.timeout())?;
    let query = FlightQuery::new(key, source, destination);
    Ok(client.fetch_flights(&query)?)
}
