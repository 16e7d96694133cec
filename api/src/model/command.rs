use std::fmt;

use serde::Deserialize;

use super::{
    reservation::{CreateReservationRequest, ReservationResponse, ReservationsResponse},
    room::RoomsResponse,
};

// 入力 1 行分の要求。フィールド名で種類を判別する
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BookingCommand {
    Search { search: String },
    List { list: ListTarget },
    Reserve(CreateReservationRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListTarget {
    Rooms,
    Reservations,
}

#[derive(Debug)]
pub enum BookingCommandResponse {
    AvailableRooms { category: String, rooms: RoomsResponse },
    Rooms(RoomsResponse),
    Reserved(ReservationResponse),
    NotAvailable { category: String },
    Reservations(ReservationsResponse),
}

impl fmt::Display for BookingCommandResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AvailableRooms { category, rooms } if rooms.items.is_empty() => {
                write!(f, "No available rooms in the {category} category.")
            }
            Self::AvailableRooms { rooms, .. } => {
                f.write_str("Available rooms:")?;
                for room in &rooms.items {
                    write!(f, "\n{room}")?;
                }
                Ok(())
            }
            Self::Rooms(rooms) => {
                f.write_str("All rooms:")?;
                for room in &rooms.items {
                    write!(f, "\n{room}")?;
                }
                Ok(())
            }
            Self::Reserved(reservation) => {
                write!(f, "Reservation successful!\n{reservation}")
            }
            Self::NotAvailable { category } => write!(
                f,
                "No available rooms in the {category} category for the specified dates."
            ),
            Self::Reservations(reservations) if reservations.items.is_empty() => {
                f.write_str("No reservations found.")
            }
            Self::Reservations(reservations) => {
                f.write_str("All reservations:")?;
                for reservation in &reservations.items {
                    write!(f, "\n{reservation}")?;
                }
                Ok(())
            }
        }
    }
}
