use std::fmt;

use chrono::NaiveDate;
use kernel::model::{
    id::{ReservationId, RoomId},
    reservation::{event::CreateReservation, Reservation, ReservationRoom},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::format_amount;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub guest_name: String,
    pub category: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl From<CreateReservationRequest> for CreateReservation {
    fn from(value: CreateReservationRequest) -> Self {
        let CreateReservationRequest {
            guest_name,
            category,
            check_in,
            check_out,
        } = value;
        CreateReservation::new(guest_name, category, check_in, check_out)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: ReservationId,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_amount: Decimal,
    pub room: ReservationRoomResponse,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            guest_name,
            check_in,
            check_out,
            total_amount,
            room,
        } = value;
        Self {
            reservation_id,
            guest_name,
            check_in,
            check_out,
            total_amount,
            room: room.into(),
        }
    }
}

impl fmt::Display for ReservationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation ID: {}, Guest Name: {}, Room: {}, Check-in: {}, Check-out: {}, Total Amount: {}",
            self.reservation_id,
            self.guest_name,
            self.room.room_id,
            self.check_in,
            self.check_out,
            format_amount(self.total_amount)
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRoomResponse {
    pub room_id: RoomId,
    pub category: String,
    pub price_per_night: Decimal,
}

impl From<ReservationRoom> for ReservationRoomResponse {
    fn from(value: ReservationRoom) -> Self {
        let ReservationRoom {
            room_id,
            category,
            price_per_night,
        } = value;
        Self {
            room_id,
            category: category.to_string(),
            price_per_night,
        }
    }
}
