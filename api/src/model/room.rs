use std::fmt;

use kernel::model::{id::RoomId, room::Room};
use rust_decimal::Decimal;
use serde::Serialize;

use super::format_amount;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsResponse {
    pub items: Vec<RoomResponse>,
}

impl From<Vec<Room>> for RoomsResponse {
    fn from(value: Vec<Room>) -> Self {
        Self {
            items: value.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub room_id: RoomId,
    pub category: String,
    pub price_per_night: Decimal,
    pub is_available: bool,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            room_id,
            category,
            price_per_night,
            is_available,
        } = value;
        Self {
            room_id,
            category: category.to_string(),
            price_per_night,
            is_available,
        }
    }
}

impl fmt::Display for RoomResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room Number: {}, Category: {}, Price per night: {}",
            self.room_id,
            self.category,
            format_amount(self.price_per_night)
        )
    }
}
