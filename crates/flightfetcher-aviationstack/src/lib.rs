//! Client library for the aviationstack flight-data API.
//!
//! This crate wraps the `/v1/flights` endpoint of the aviationstack service
//! behind a small blocking client: build a [`FlightQuery`] for a route, hand
//! it to a [`FlightClient`], and get back an ordered list of
//! [`FlightSummary`] projections. It is consumed by the `flifetch` binary in
//! the `flightfetcher` crate but has no CLI assumptions of its own.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod models;

pub use client::{FlightClient, FlightQuery, DEFAULT_BASE_URL, RESULT_LIMIT};
pub use error::{Error, Result};
pub use models::{FlightList, FlightSummary, FlightsResponse, PLACEHOLDER};
