// Booking desk: what a front end calls when the guest works through the form
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::catalog::{CatalogError, RoomCatalog, RoomSelection};
use crate::error::ReservationError;
use crate::persistence::{FileReceiptStore, ReceiptStore};
use crate::receipt::Receipt;
use crate::reservation::{compute_reservation, ReservationRequest};
use crate::schedule::guard_check_in_date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    pub price_label: String,
    pub availability_label: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub receipt: Receipt,
    pub path: PathBuf,
}

pub struct BookingDesk<S: ReceiptStore = FileReceiptStore> {
    catalog: RoomCatalog,
    store: S,
}

impl Default for BookingDesk<FileReceiptStore> {
    fn default() -> Self {
        Self::new(RoomCatalog::new(), FileReceiptStore::default())
    }
}

impl<S: ReceiptStore> BookingDesk<S> {
    pub fn new(catalog: RoomCatalog, store: S) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    // Refreshes the price and availability labels after a room selector change
    pub fn room_summary(&self, selection: RoomSelection) -> Result<RoomSummary, CatalogError> {
        let room = self.catalog.lookup(selection)?;
        Ok(RoomSummary {
            price_label: room.price_label(),
            availability_label: room.availability_label(),
            available: room.available,
        })
    }

    pub fn select_check_in_date(&self, candidate: NaiveDate) -> Result<NaiveDate, ReservationError> {
        guard_check_in_date(candidate, Local::now().date_naive())
    }

    pub fn quote(&self, request: &ReservationRequest) -> Result<Receipt, ReservationError> {
        compute_reservation(request, &self.catalog)
    }

    /// Prices the request and saves its receipt.
    ///
    /// A failed write comes back as [`ReservationError::PersistenceFailure`].
    /// The catalog is never modified, so the same room can be booked again.
    pub fn book(&self, request: &ReservationRequest) -> Result<Confirmation, ReservationError> {
        let receipt = self.quote(request)?;
        let path = self.store.save(&receipt)?;

        info!(
            guest = %receipt.name,
            room_type = %receipt.room_type,
            grand_total = receipt.grand_total,
            "Booking confirmed"
        );

        Ok(Confirmation { receipt, path })
    }
}
