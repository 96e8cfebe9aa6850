//! Interactive booking session.
//!
//! The session walks through the console dialogue for one route: collect the
//! passenger's details, list the fetched flights, and take a single book or
//! cancel action. It is generic over the reader and writer so tests can
//! script the whole exchange with in-memory buffers.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use flightfetcher_aviationstack::{FlightList, FlightSummary};
use tracing::debug;

use super::{BookOutcome, BookingDesk, CancelOutcome};

/// Details collected for the person booking a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    /// Full name; may contain spaces.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Age in years.
    pub age: u32,
    /// Contact phone number.
    pub mobile: String,
}

impl Passenger {
    /// Collect passenger details from the input stream.
    ///
    /// The age prompt repeats until the answer parses as a number.
    ///
    /// # Errors
    ///
    /// Returns an error when console I/O fails or the input ends early.
    pub fn collect<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Self> {
        let name = prompt_line(input, output, "Name: ")?;
        let email = prompt_line(input, output, "Email: ")?;
        let age = prompt_number(input, output, "Age: ")?;
        let mobile = prompt_line(input, output, "Mobile: ")?;
        Ok(Self {
            name,
            email,
            age,
            mobile,
        })
    }
}

/// Run one interactive booking session over the given flights.
///
/// # Errors
///
/// Returns an error when console I/O fails or the input ends early.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    flights: FlightList,
) -> io::Result<()> {
    writeln!(output, "Welcome to the flightfetcher booking desk.")?;
    writeln!(output, "Please enter your details.")?;
    let passenger = Passenger::collect(input, output)?;
    debug!(name = %passenger.name, "collected passenger details");

    let mut desk = BookingDesk::new(flights);
    if desk.is_empty() {
        writeln!(output)?;
        writeln!(output, "No flights found for the given route.")?;
        return Ok(());
    }

    writeln!(output)?;
    writeln!(output, "Available flights:")?;
    desk.list_flights(output)?;

    writeln!(output)?;
    writeln!(output, "Select action:")?;
    writeln!(output, "1. Book a flight")?;
    writeln!(output, "2. Cancel a flight")?;
    let action: u32 = prompt_number(input, output, "Enter choice: ")?;

    match action {
        1 => {
            let index: usize = prompt_number(input, output, "Enter the flight number to book: ")?;
            match desk.book(index) {
                BookOutcome::Booked(flight) => {
                    writeln!(output, "Booking successful for flight {}.", flight.flight_number)?;
                    writeln!(output)?;
                    write_ticket(output, &passenger, &flight)?;
                }
                BookOutcome::SoldOut => {
                    writeln!(output, "No seats available on this flight.")?;
                }
                BookOutcome::InvalidIndex => {
                    writeln!(output, "Invalid choice.")?;
                }
            }
        }
        2 => {
            let index: usize = prompt_number(input, output, "Enter the flight number to cancel: ")?;
            match desk.cancel(index) {
                CancelOutcome::Cancelled(flight) => {
                    writeln!(
                        output,
                        "Cancellation successful for flight {}.",
                        flight.flight_number
                    )?;
                }
                CancelOutcome::InvalidIndex => {
                    writeln!(output, "Invalid flight number.")?;
                }
            }
        }
        _ => {
            writeln!(output, "Invalid action.")?;
        }
    }

    Ok(())
}

/// Write a prompt, then read one answer line with the trailing newline
/// stripped.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the booking session finished",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompt until the answer parses as a number.
fn prompt_number<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt_line(input, output, prompt)?;
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Please enter a number.")?,
        }
    }
}

/// Write the ticket for a successful booking.
fn write_ticket<W: Write>(
    output: &mut W,
    passenger: &Passenger,
    flight: &FlightSummary,
) -> io::Result<()> {
    writeln!(output, "Ticket")?;
    writeln!(output, "------")?;
    writeln!(output, "Passenger Name: {}", passenger.name)?;
    writeln!(output, "Email: {}", passenger.email)?;
    writeln!(output, "Flight Number: {}", flight.flight_number)?;
    writeln!(output, "Departure: {}", flight.departure)?;
    writeln!(output, "Arrival: {}", flight.arrival)?;
    Ok(())
}
