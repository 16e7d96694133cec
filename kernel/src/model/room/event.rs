use derive_new::new;
use rust_decimal::Decimal;

use crate::model::{
    id::RoomId,
    room::{Room, RoomCategory},
};

// カタログ初期化時に客室を登録するためのイベント
#[derive(Debug, Clone, new)]
pub struct CreateRoom {
    pub room_id: RoomId,
    pub category: RoomCategory,
    pub price_per_night: Decimal,
}

impl From<CreateRoom> for Room {
    fn from(value: CreateRoom) -> Self {
        let CreateRoom {
            room_id,
            category,
            price_per_night,
        } = value;
        Room {
            room_id,
            category,
            price_per_night,
            // 起動時点ではすべての客室が空室
            is_available: true,
        }
    }
}
