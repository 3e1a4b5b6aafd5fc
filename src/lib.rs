// Hotel room reservation: catalog, pricing and receipts

pub mod booking;
pub mod catalog;
pub mod error;
pub mod persistence;
pub mod receipt;
pub mod reservation;
pub mod schedule;

// Currency marker printed in front of every amount
pub const CURRENCY_PREFIX: &str = "RM";

// Re-export key types for convenience
pub use booking::{BookingDesk, Confirmation, RoomSummary};
pub use catalog::{CatalogConfig, CatalogError, Room, RoomCatalog, RoomSelection, RoomType};
pub use error::{GuestField, ReservationError};
pub use persistence::{FileReceiptStore, ReceiptStore, StoreConfig};
pub use receipt::Receipt;
pub use reservation::{compute_reservation, GuestDetails, ReservationRequest, Totals};
