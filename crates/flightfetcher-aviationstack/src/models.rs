//! Data model for aviationstack flight lookups.
//!
//! The service marks nearly every field of a flight record as optional, so
//! records are carried as raw JSON values inside a typed envelope and only
//! projected into [`FlightSummary`] with defensive lookups.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder emitted for any field the service did not supply.
pub const PLACEHOLDER: &str = "N/A";

/// The decoded envelope of a `/v1/flights` response.
#[derive(Debug, Default, Deserialize)]
pub struct FlightsResponse {
    /// Raw flight records; empty when the service omits the field.
    #[serde(default)]
    pub data: Vec<Value>,
}

/// A compact projection of one flight record.
///
/// All four fields are always string-valued and present; anything missing
/// from the source record is filled with [`PLACEHOLDER`]. Serialization
/// preserves this field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSummary {
    /// IATA flight number (e.g. `BA117`).
    pub flight_number: String,
    /// IATA code of the departure airport.
    pub departure: String,
    /// IATA code of the arrival airport.
    pub arrival: String,
    /// Flight status as reported by the service (e.g. `scheduled`).
    pub status: String,
}

/// An ordered list of flight summaries.
pub type FlightList = Vec<FlightSummary>;

impl FlightSummary {
    /// Project a raw flight record into a summary.
    ///
    /// Lookups are defensive: a missing, null, or non-string value becomes
    /// [`PLACEHOLDER`] rather than an error, and a record that is not even
    /// an object yields a summary of four placeholders.
    #[must_use]
    pub fn from_record(record: &Value) -> Self {
        Self {
            flight_number: nested_str(record, "flight", "iata"),
            departure: nested_str(record, "departure", "iata"),
            arrival: nested_str(record, "arrival", "iata"),
            status: field_str(record, "flight_status"),
        }
    }
}

/// Look up `record[outer][inner]` as a string, defaulting to the placeholder.
fn nested_str(record: &Value, outer: &str, inner: &str) -> String {
    record
        .get(outer)
        .and_then(|nested| nested.get(inner))
        .and_then(Value::as_str)
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

/// Look up `record[key]` as a string, defaulting to the placeholder.
fn field_str(record: &Value, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(PLACEHOLDER)
        .to_string()
}
