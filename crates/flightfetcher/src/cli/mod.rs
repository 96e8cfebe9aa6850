//! Command-line interface for flightfetcher.
//!
//! This module provides the CLI structure for the `flifetch` binary. The
//! default invocation takes two positional airport codes and prints the
//! matching flights; the `book` subcommand starts an interactive booking
//! session for the same route.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::BookCommand;

/// flifetch - Look up flights between two airports
///
/// Queries the aviationstack service for flights departing from one airport
/// and arriving at another, and prints a JSON summary of the first matches.
#[derive(Debug, Parser)]
#[command(name = "flifetch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Departure airport IATA code (e.g. LHR)
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// Arrival airport IATA code (e.g. JFK)
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Book or cancel a seat on a flight for a route
    Book(BookCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// Get the lookup route, when both positional codes are present.
    #[must_use]
    pub fn route(&self) -> Option<(&str, &str)> {
        match (self.source.as_deref(), self.destination.as_deref()) {
            (Some(source), Some(destination)) => Some((source, destination)),
            _ => None,
        }
    }
}
