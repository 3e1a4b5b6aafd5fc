// Error taxonomy for a single booking attempt
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Guest fields that must be filled in before a booking goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuestField {
    Name,
    Email,
    Phone,
}

impl fmt::Display for GuestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GuestField::Name => "name",
            GuestField::Email => "email",
            GuestField::Phone => "phone number",
        };
        f.write_str(label)
    }
}

// Every variant is recoverable by the user: correct the input and retry
#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("Invalid room selection: {0}")]
    InvalidSelection(String),

    #[error("Selected room is not available")]
    RoomUnavailable,

    #[error(
        "Please fill in all the required information before proceeding. Missing: {}",
        join_fields(.missing)
    )]
    IncompleteInformation { missing: Vec<GuestField> },

    #[error("Please select a date after the current day (selected {selected}, today is {today})")]
    CheckInDateInPast {
        selected: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },

    #[error("Invalid check-in time {hour}:{minute}")]
    InvalidCheckInTime { hour: u32, minute: u32 },

    #[error("Failed to save the booking receipt to file: {0}")]
    PersistenceFailure(#[from] std::io::Error),
}

fn join_fields(fields: &[GuestField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
