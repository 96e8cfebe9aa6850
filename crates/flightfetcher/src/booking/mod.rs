//! In-memory seat booking over fetched flights.
//!
//! This module provides the booking desk used by the `book` subcommand. Seat
//! state is session-local: every fetched flight starts with the full
//! [`SEAT_CAPACITY`] and nothing is persisted or sent back to the service.

pub mod session;

use std::io::{self, Write};

use flightfetcher_aviationstack::{FlightList, FlightSummary};

/// Number of seats every flight starts with.
pub const SEAT_CAPACITY: u32 = 60;

/// A fetched flight with a session-local seat counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookableFlight {
    summary: FlightSummary,
    available_seats: u32,
}

impl BookableFlight {
    /// Wrap a flight summary with a full seat allocation.
    #[must_use]
    pub fn new(summary: FlightSummary) -> Self {
        Self {
            summary,
            available_seats: SEAT_CAPACITY,
        }
    }

    /// Get the projected flight details.
    #[must_use]
    pub fn summary(&self) -> &FlightSummary {
        &self.summary
    }

    /// Get the number of seats still open on this flight.
    #[must_use]
    pub fn available_seats(&self) -> u32 {
        self.available_seats
    }

    /// Check whether at least one seat is open.
    #[must_use]
    pub fn has_available_seats(&self) -> bool {
        self.available_seats > 0
    }

    /// Take one seat. Returns `false` when the flight is full.
    pub fn book_seat(&mut self) -> bool {
        if self.available_seats > 0 {
            self.available_seats -= 1;
            true
        } else {
            false
        }
    }

    /// Release one seat, saturating at [`SEAT_CAPACITY`].
    pub fn cancel_seat(&mut self) {
        if self.available_seats < SEAT_CAPACITY {
            self.available_seats += 1;
        }
    }
}

/// Outcome of a booking attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookOutcome {
    /// A seat was taken; carries the booked flight's details.
    Booked(FlightSummary),
    /// The index does not name a flight.
    InvalidIndex,
    /// The flight exists but has no open seats.
    SoldOut,
}

/// Outcome of a cancellation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// One seat was released; carries the flight's details.
    Cancelled(FlightSummary),
    /// The index does not name a flight.
    InvalidIndex,
}

/// Session-local booking state over a list of fetched flights.
///
/// Flights are addressed by the 1-based position shown in the listing.
#[derive(Debug, Default)]
pub struct BookingDesk {
    flights: Vec<BookableFlight>,
}

impl BookingDesk {
    /// Build a desk from fetched flight summaries.
    #[must_use]
    pub fn new(flights: FlightList) -> Self {
        Self {
            flights: flights.into_iter().map(BookableFlight::new).collect(),
        }
    }

    /// Check whether the desk has no flights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Get the number of flights at the desk.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Get the flight at a 1-based index, if it exists.
    #[must_use]
    pub fn flight(&self, index: usize) -> Option<&BookableFlight> {
        index.checked_sub(1).and_then(|i| self.flights.get(i))
    }

    /// Write a numbered listing of all flights.
    ///
    /// # Errors
    ///
    /// Returns an error when the writer fails.
    pub fn list_flights(&self, output: &mut impl Write) -> io::Result<()> {
        for (position, flight) in self.flights.iter().enumerate() {
            let summary = flight.summary();
            writeln!(
                output,
                "{}. {}  {} to {}  [{}]  seats available: {}",
                position + 1,
                summary.flight_number,
                summary.departure,
                summary.arrival,
                summary.status,
                flight.available_seats(),
            )?;
        }
        Ok(())
    }

    /// Book one seat on the flight at a 1-based index.
    pub fn book(&mut self, index: usize) -> BookOutcome {
        let Some(i) = index.checked_sub(1) else {
            return BookOutcome::InvalidIndex;
        };
        let Some(flight) = self.flights.get_mut(i) else {
            return BookOutcome::InvalidIndex;
        };
        if flight.book_seat() {
            BookOutcome::Booked(flight.summary().clone())
        } else {
            BookOutcome::SoldOut
        }
    }

    /// Release one seat on the flight at a 1-based index.
    pub fn cancel(&mut self, index: usize) -> CancelOutcome {
        let Some(i) = index.checked_sub(1) else {
            return CancelOutcome::InvalidIndex;
        };
        let Some(flight) = self.flights.get_mut(i) else {
            return CancelOutcome::InvalidIndex;
        };
        flight.cancel_seat();
        CancelOutcome::Cancelled(flight.summary().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(number: &str) -> FlightSummary {
        FlightSummary {
            flight_number: number.to_string(),
            departure: "LHR".to_string(),
            arrival: "JFK".to_string(),
            status: "active".to_string(),
        }
    }

    #[test]
    fn test_new_flight_starts_at_capacity() {
        let flight = BookableFlight::new(summary("BA117"));
        assert_eq!(flight.available_seats(), SEAT_CAPACITY);
        assert!(flight.has_available_seats());
    }

    #[test]
    fn test_book_seat_decrements() {
        let mut flight = BookableFlight::new(summary("BA117"));
        assert!(flight.book_seat());
        assert_eq!(flight.available_seats(), SEAT_CAPACITY - 1);
    }

    #[test]
    fn test_book_seat_fails_when_full() {
        let mut flight = BookableFlight::new(summary("BA117"));
        for _ in 0..SEAT_CAPACITY {
            assert!(flight.book_seat());
        }
        assert!(!flight.has_available_seats());
        assert!(!flight.book_seat());
        assert_eq!(flight.available_seats(), 0);
    }

    #[test]
    fn test_cancel_seat_saturates_at_capacity() {
        let mut flight = BookableFlight::new(summary("BA117"));
        flight.cancel_seat();
        assert_eq!(flight.available_seats(), SEAT_CAPACITY);

        flight.book_seat();
        flight.cancel_seat();
        assert_eq!(flight.available_seats(), SEAT_CAPACITY);
    }

    #[test]
    fn test_desk_from_flight_list() {
        let desk = BookingDesk::new(vec![summary("BA117"), summary("VS3")]);
        assert!(!desk.is_empty());
        assert_eq!(desk.len(), 2);
    }

    #[test]
    fn test_desk_empty() {
        let desk = BookingDesk::new(Vec::new());
        assert!(desk.is_empty());
        assert_eq!(desk.len(), 0);
    }

    #[test]
    fn test_flight_lookup_is_one_based() {
        let desk = BookingDesk::new(vec![summary("BA117"), summary("VS3")]);
        assert!(desk.flight(0).is_none());
        assert_eq!(desk.flight(1).unwrap().summary().flight_number, "BA117");
        assert_eq!(desk.flight(2).unwrap().summary().flight_number, "VS3");
        assert!(desk.flight(3).is_none());
    }

    #[test]
    fn test_book_valid_index() {
        let mut desk = BookingDesk::new(vec![summary("BA117")]);
        let outcome = desk.book(1);
        match outcome {
            BookOutcome::Booked(flight) => assert_eq!(flight.flight_number, "BA117"),
            other => panic!("expected booked, got {other:?}"),
        }
        assert_eq!(desk.flight(1).unwrap().available_seats(), SEAT_CAPACITY - 1);
    }

    #[test]
    fn test_book_invalid_index() {
        let mut desk = BookingDesk::new(vec![summary("BA117")]);
        assert_eq!(desk.book(0), BookOutcome::InvalidIndex);
        assert_eq!(desk.book(2), BookOutcome::InvalidIndex);
    }

    #[test]
    fn test_book_sold_out() {
        let mut desk = BookingDesk::new(vec![summary("BA117")]);
        for _ in 0..SEAT_CAPACITY {
            assert!(matches!(desk.book(1), BookOutcome::Booked(_)));
        }
        assert_eq!(desk.book(1), BookOutcome::SoldOut);
    }

    #[test]
    fn test_cancel_valid_index() {
        let mut desk = BookingDesk::new(vec![summary("BA117")]);
        desk.book(1);
        let outcome = desk.cancel(1);
        match outcome {
            CancelOutcome::Cancelled(flight) => assert_eq!(flight.flight_number, "BA117"),
            CancelOutcome::InvalidIndex => panic!("expected cancelled"),
        }
        assert_eq!(desk.flight(1).unwrap().available_seats(), SEAT_CAPACITY);
    }

    #[test]
    fn test_cancel_invalid_index() {
        let mut desk = BookingDesk::new(vec![summary("BA117")]);
        assert_eq!(desk.cancel(0), CancelOutcome::InvalidIndex);
        assert_eq!(desk.cancel(5), CancelOutcome::InvalidIndex);
    }

    #[test]
    fn test_cancel_without_booking_saturates() {
        let mut desk = BookingDesk::new(vec![summary("BA117")]);
        assert!(matches!(desk.cancel(1), CancelOutcome::Cancelled(_)));
        assert_eq!(desk.flight(1).unwrap().available_seats(), SEAT_CAPACITY);
    }

    #[test]
    fn test_list_flights_format() {
        let desk = BookingDesk::new(vec![summary("BA117"), summary("VS3")]);
        let mut buf = Vec::new();
        desk.list_flights(&mut buf).unwrap();
        let listing = String::from_utf8(buf).unwrap();

        assert!(listing.contains("1. BA117  LHR to JFK  [active]  seats available: 60"));
        assert!(listing.contains("2. VS3  LHR to JFK  [active]  seats available: 60"));
    }
}
