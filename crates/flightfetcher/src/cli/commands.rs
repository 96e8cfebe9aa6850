//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use clap::Args;

/// Book command arguments.
#[derive(Debug, Args)]
pub struct BookCommand {
    /// Departure airport IATA code (e.g. LHR)
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Arrival airport IATA code (e.g. JFK)
    #[arg(value_name = "DESTINATION")]
    pub destination: String,
}
