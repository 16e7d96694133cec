use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::model::{
    id::{ReservationId, RoomId},
    room::RoomCategory,
};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_amount: Decimal,
    pub room: ReservationRoom,
}

// 予約が参照する客室の情報。客室そのものはカタログが所有する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRoom {
    pub room_id: RoomId,
    pub category: RoomCategory,
    pub price_per_night: Decimal,
}

// 日付の前後に関係なく日数の差の絶対値を返す。同日なら 0 泊
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days().abs()
}

// Decimal の範囲を超える場合は None
pub fn total_amount(
    check_in: NaiveDate,
    check_out: NaiveDate,
    price_per_night: Decimal,
) -> Option<Decimal> {
    Decimal::from(nights_between(check_in, check_out)).checked_mul(price_per_night)
}
