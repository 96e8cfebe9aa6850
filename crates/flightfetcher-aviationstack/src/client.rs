//! Blocking HTTP client for the aviationstack flights endpoint.
//!
//! One [`FlightClient::fetch_flights`] call performs exactly one GET
//! request. There are no retries, no pagination beyond the first page, and
//! no caching; the only resiliency mechanism is the bounded request timeout.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{FlightList, FlightSummary, FlightsResponse};

/// Default base URL of the aviationstack service.
pub const DEFAULT_BASE_URL: &str = "http://api.aviationstack.com";

/// Path of the flights endpoint, relative to the base URL.
const FLIGHTS_PATH: &str = "/v1/flights";

/// Maximum number of flight records requested and returned per query.
pub const RESULT_LIMIT: usize = 10;

/// Query parameters for one flight lookup.
///
/// Airport codes are normalized to uppercase on construction. Nothing else
/// is validated here: a malformed code is forwarded as-is and any rejection
/// comes from the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightQuery {
    access_key: String,
    dep_iata: String,
    arr_iata: String,
    limit: usize,
}

impl FlightQuery {
    /// Build a query for flights from `source` to `destination`.
    #[must_use]
    pub fn new(access_key: impl Into<String>, source: &str, destination: &str) -> Self {
        Self {
            access_key: access_key.into(),
            dep_iata: source.to_uppercase(),
            arr_iata: destination.to_uppercase(),
            limit: RESULT_LIMIT,
        }
    }

    /// The normalized departure airport code.
    #[must_use]
    pub fn dep_iata(&self) -> &str {
        &self.dep_iata
    }

    /// The normalized arrival airport code.
    #[must_use]
    pub fn arr_iata(&self) -> &str {
        &self.arr_iata
    }
}

/// Client for the aviationstack flights endpoint.
#[derive(Debug, Clone)]
pub struct FlightClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl FlightClient {
    /// Create a client for the service at `base_url`.
    ///
    /// Every request made through this client is bounded by `timeout`; the
    /// service itself imposes no such limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| Error::Client { source })?;
        // Trailing slashes would otherwise double up with FLIGHTS_PATH.
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, http })
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch flight summaries for the given query.
    ///
    /// Issues a single blocking GET; the calling thread suspends until the
    /// service responds or the timeout elapses. The body is decoded only
    /// when the status is 200 exactly; any other status is reported without
    /// inspecting the body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request cannot be completed,
    /// [`Error::Status`] on a non-200 answer, and [`Error::Decode`] when a
    /// 200 body is not the expected JSON.
    pub fn fetch_flights(&self, query: &FlightQuery) -> Result<FlightList> {
        let url = format!("{}{FLIGHTS_PATH}", self.base_url);
        // The query string carries the access key, so only the bare URL and
        // the route are logged.
        debug!(
            dep = %query.dep_iata,
            arr = %query.arr_iata,
            "requesting flights from {url}"
        );

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Status {
                code: status.as_u16(),
            });
        }

        let body: FlightsResponse = response.json().map_err(|source| Error::Decode { source })?;
        let flights = project_records(&body);
        debug!("projected {} flight record(s)", flights.len());
        Ok(flights)
    }
}

/// Project raw records into summaries, preserving response order and
/// capping the result at [`RESULT_LIMIT`].
fn project_records(response: &FlightsResponse) -> FlightList {
    response
        .data
        .iter()
        .take(RESULT_LIMIT)
        .map(FlightSummary::from_record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_uppercases_codes() {
        let query = FlightQuery::new("secret", "lhr", "jfk");
        assert_eq!(query.dep_iata(), "LHR");
        assert_eq!(query.arr_iata(), "JFK");
    }

    #[test]
    fn test_lowercase_and_uppercase_queries_are_equal() {
        let lower = FlightQuery::new("secret", "lhr", "jfk");
        let upper = FlightQuery::new("secret", "LHR", "JFK");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_query_carries_fixed_limit_and_key() {
        let query = FlightQuery::new("secret", "LHR", "JFK");
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["access_key"], "secret");
        assert_eq!(value["dep_iata"], "LHR");
        assert_eq!(value["arr_iata"], "JFK");
        assert_eq!(value["limit"], RESULT_LIMIT);
    }

    #[test]
    fn test_mixed_case_codes_normalized() {
        let query = FlightQuery::new("secret", "lHr", "jFk");
        assert_eq!(query.dep_iata(), "LHR");
        assert_eq!(query.arr_iata(), "JFK");
    }

    #[test]
    fn test_client_construction() {
        let client = FlightClient::new(DEFAULT_BASE_URL, Duration::from_secs(10)).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_trims_trailing_slashes() {
        let client = FlightClient::new("http://localhost:9099/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9099");

        let client = FlightClient::new("http://localhost:9099///", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9099");
    }

    #[test]
    fn test_project_records_preserves_order() {
        let response = FlightsResponse {
            data: vec![
                json!({ "flight": { "iata": "AA1" } }),
                json!({ "flight": { "iata": "AA2" } }),
                json!({ "flight": { "iata": "AA3" } }),
            ],
        };
        let flights = project_records(&response);
        let numbers: Vec<&str> = flights.iter().map(|f| f.flight_number.as_str()).collect();
        assert_eq!(numbers, ["AA1", "AA2", "AA3"]);
    }

    #[test]
    fn test_project_records_caps_at_limit() {
        let response = FlightsResponse {
            data: (0..25)
                .map(|i| json!({ "flight": { "iata": format!("AA{i}") } }))
                .collect(),
        };
        let flights = project_records(&response);
        assert_eq!(flights.len(), RESULT_LIMIT);
        assert_eq!(flights[0].flight_number, "AA0");
        assert_eq!(flights[9].flight_number, "AA9");
    }

    #[test]
    fn test_project_records_empty_response() {
        let flights = project_records(&FlightsResponse::default());
        assert!(flights.is_empty());
    }
}
