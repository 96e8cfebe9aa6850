//! JSON rendering for flight summaries.
//!
//! The flight listing is a machine-readable contract: a pretty-printed JSON
//! array on standard output, four-space indented, fields in the order
//! `flight_number`, `departure`, `arrival`, `status`. Everything else the
//! binary prints (logs, prompts, errors) goes to standard error.

use flightfetcher_aviationstack::FlightSummary;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;

/// Indentation for the rendered JSON listing.
const INDENT: &[u8] = b"    ";

/// Render flight summaries as a pretty-printed JSON array.
///
/// An empty slice renders as `[]`. The returned string carries no trailing
/// newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_flights(flights: &[FlightSummary]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    flights.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
