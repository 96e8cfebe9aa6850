//! `flightfetcher` - Flight lookup and seat booking over the aviationstack API
//!
//! This library backs the `flifetch` binary: CLI definitions, configuration,
//! logging setup, JSON rendering of flight summaries, and the interactive
//! booking desk. The HTTP client itself lives in the
//! `flightfetcher-aviationstack` crate.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod booking;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use output::render_flights;
