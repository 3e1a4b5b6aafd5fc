// Room catalog: the fixed table of bookable room categories
//
// Entries are built once and never mutated. Availability is a constant of
// the catalog, booking a room does not change it.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::CURRENCY_PREFIX;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Room not found: {0}")]
    NotFound(String),

    #[error("Invalid price for {room_type}: {price}")]
    InvalidPrice { room_type: RoomType, price: f64 },

    #[error("Duplicate room type in catalog: {0}")]
    DuplicateRoomType(RoomType),

    #[error("Catalog has no rooms")]
    Empty,

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

/// Closed set of room categories offered by the hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Standard, RoomType::Deluxe, RoomType::Suite];

    /// Label shown in the room selector and printed on receipts.
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Standard => "Standard Room",
            RoomType::Deluxe => "Deluxe Room",
            RoomType::Suite => "Suite Room",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoomType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|room_type| room_type.label() == s)
            .ok_or_else(|| CatalogError::NotFound(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_type: RoomType,
    pub price_per_night: f64,
    pub available: bool,
}

impl Room {
    pub fn new(room_type: RoomType, price_per_night: f64, available: bool) -> Self {
        Self {
            room_type,
            price_per_night,
            available,
        }
    }

    pub fn price_label(&self) -> String {
        format!(
            "Price per night: {}{}",
            CURRENCY_PREFIX,
            raw_price(self.price_per_night)
        )
    }

    pub fn availability_label(&self) -> String {
        let status = if self.available {
            "Available"
        } else {
            "Not Available"
        };
        format!("Availability: {}", status)
    }
}

// Shortest round-trip digits with at least one fractional digit ("100.0",
// "99.99"). Outside [1e-3, 1e7) the price switches to scientific notation
// with an uppercase exponent ("1.0E7", "5.0E-4").
fn raw_price(price: f64) -> String {
    let magnitude = price.abs();
    if price == 0.0 || !price.is_finite() || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", price);
    }

    let scientific = format!("{:e}", price);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

/// How a caller points at a catalog entry: selector position or room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomSelection {
    Index(usize),
    Type(RoomType),
}

impl fmt::Display for RoomSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomSelection::Index(index) => write!(f, "index {}", index),
            RoomSelection::Type(room_type) => write!(f, "{}", room_type),
        }
    }
}

impl From<RoomType> for RoomSelection {
    fn from(room_type: RoomType) -> Self {
        RoomSelection::Type(room_type)
    }
}

impl From<usize> for RoomSelection {
    fn from(index: usize) -> Self {
        RoomSelection::Index(index)
    }
}

// Catalog configuration, the default is the hotel's fixed table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub rooms: Vec<Room>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            rooms: vec![
                Room::new(RoomType::Standard, 100.0, true),
                Room::new(RoomType::Deluxe, 150.0, true),
                Room::new(RoomType::Suite, 200.0, true),
            ],
        }
    }
}

impl CatalogConfig {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomCatalog {
    pub fn new() -> Self {
        Self {
            rooms: CatalogConfig::default().rooms,
        }
    }

    pub fn from_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        if config.rooms.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for room in &config.rooms {
            if !room.price_per_night.is_finite() || room.price_per_night < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    room_type: room.room_type,
                    price: room.price_per_night,
                });
            }
            if !seen.insert(room.room_type) {
                return Err(CatalogError::DuplicateRoomType(room.room_type));
            }
        }

        Ok(Self {
            rooms: config.rooms,
        })
    }

    pub fn lookup(&self, selection: RoomSelection) -> Result<&Room, CatalogError> {
        let room = match selection {
            RoomSelection::Index(index) => self.rooms.get(index),
            RoomSelection::Type(room_type) => {
                self.rooms.iter().find(|room| room.room_type == room_type)
            }
        };

        match room {
            Some(room) => {
                debug!(
                    selection = %selection,
                    price = room.price_per_night,
                    available = room.available,
                    "Room lookup"
                );
                Ok(room)
            }
            None => Err(CatalogError::NotFound(selection.to_string())),
        }
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.rooms.iter().map(|room| room.room_type.label()).collect()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
