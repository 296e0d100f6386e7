//! Hotel access decision.

use serde::Serialize;
use std::fmt;

/// Outcome of evaluating a ticket against the hotel access rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelAccess {
    Eligible,
    Ineligible(IneligibleReason),
}

/// Clause of the access rule that the ticket failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IneligibleReason {
    /// Ticket is still `RESERVED`
    TicketNotPaid,
    /// Ticket type is for the remote event
    RemoteEvent,
    /// Ticket type does not include hotel
    HotelNotIncluded,
}

impl fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::TicketNotPaid => "ticket wasn't paid",
            Self::RemoteEvent => "ticket is for a remote event",
            Self::HotelNotIncluded => "hotel isn't included in the ticket",
        };
        f.write_str(text)
    }
}
