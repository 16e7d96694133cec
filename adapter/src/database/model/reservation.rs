use chrono::NaiveDate;
use kernel::model::{
    id::{ReservationId, RoomId},
    reservation::{Reservation, ReservationRoom},
    room::Room,
};
use rust_decimal::Decimal;

// 台帳に格納する予約レコード。客室は room_id で参照するだけで所有しない
#[derive(Debug, Clone)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub room_id: RoomId,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_amount: Decimal,
}

// From トレイトの代わりに、参照先の客室を引数にとる into_reservation を定義する
impl ReservationRow {
    pub fn into_reservation(self, room: &Room) -> Reservation {
        let ReservationRow {
            reservation_id,
            room_id,
            guest_name,
            check_in,
            check_out,
            total_amount,
        } = self;
        Reservation {
            reservation_id,
            guest_name,
            check_in,
            check_out,
            total_amount,
            room: ReservationRoom {
                room_id,
                category: room.category,
                price_per_night: room.price_per_night,
            },
        }
    }
}
