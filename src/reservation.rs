// Reservation calculator: validates a request against the catalog and prices it
use std::num::NonZeroU32;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{RoomCatalog, RoomSelection};
use crate::error::{GuestField, ReservationError};
use crate::receipt::Receipt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl GuestDetails {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    // Trimming is the caller's concern, only emptiness counts here
    pub fn missing_fields(&self) -> Vec<GuestField> {
        [
            (GuestField::Name, &self.name),
            (GuestField::Email, &self.email),
            (GuestField::Phone, &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// One booking attempt, built once per submission and consumed by
/// [`compute_reservation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub guest: GuestDetails,
    pub room: RoomSelection,
    pub rooms: NonZeroU32,
    pub nights: NonZeroU32,
    pub check_in_date: NaiveDate,
    pub check_in_time: NaiveTime,
}

/// Price breakdown of a valid request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub price_per_night: f64,
    pub stay_total: f64,
    pub grand_total: f64,
}

impl Totals {
    pub fn compute(price_per_night: f64, nights: NonZeroU32, rooms: NonZeroU32) -> Self {
        let stay_total = price_per_night * f64::from(nights.get());
        let grand_total = stay_total * f64::from(rooms.get());
        Self {
            price_per_night,
            stay_total,
            grand_total,
        }
    }
}

/// Validates `request` and produces its receipt.
///
/// Checks run in a fixed order and stop at the first failure: the room must
/// resolve in `catalog`, then it must be available, then every guest field
/// must be non-empty. Nothing is written and the catalog is left untouched.
pub fn compute_reservation(
    request: &ReservationRequest,
    catalog: &RoomCatalog,
) -> Result<Receipt, ReservationError> {
    let room = catalog.lookup(request.room).map_err(|e| {
        warn!(selection = %request.room, "Rejected reservation: {}", e);
        ReservationError::InvalidSelection(e.to_string())
    })?;

    if !room.available {
        warn!(room_type = %room.room_type, "Rejected reservation: room unavailable");
        return Err(ReservationError::RoomUnavailable);
    }

    let missing = request.guest.missing_fields();
    if !missing.is_empty() {
        warn!(?missing, "Rejected reservation: incomplete guest information");
        return Err(ReservationError::IncompleteInformation { missing });
    }

    let totals = Totals::compute(room.price_per_night, request.nights, request.rooms);
    debug!(
        room_type = %room.room_type,
        nights = request.nights.get(),
        rooms = request.rooms.get(),
        grand_total = totals.grand_total,
        "Computed reservation"
    );

    Ok(Receipt {
        name: request.guest.name.clone(),
        email: request.guest.email.clone(),
        phone: request.guest.phone.clone(),
        room_type: room.room_type,
        nights: request.nights.get(),
        check_in_date: request.check_in_date,
        check_in_time: request.check_in_time,
        rooms: request.rooms.get(),
        price_per_night: totals.price_per_night,
        grand_total: totals.grand_total,
    })
}
