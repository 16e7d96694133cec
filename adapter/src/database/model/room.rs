use kernel::model::{
    id::RoomId,
    room::{event::CreateRoom, RoomCategory},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::error::AppError;

// カタログファイルの 1 行分
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRow {
    pub room_id: i32,
    pub category: String,
    pub price_per_night: Decimal,
}

impl TryFrom<RoomRow> for CreateRoom {
    type Error = AppError;

    fn try_from(value: RoomRow) -> Result<Self, Self::Error> {
        let RoomRow {
            room_id,
            category,
            price_per_night,
        } = value;
        let category = category.parse::<RoomCategory>().map_err(|e| {
            AppError::InvalidCatalog(format!("room {room_id} has unknown category {:?}", e.0))
        })?;
        Ok(CreateRoom::new(RoomId::new(room_id), category, price_per_night))
    }
}

// CATALOG_PATH が未設定のときに使う客室一覧
pub fn sample_catalog() -> Vec<CreateRoom> {
    [
        (101, RoomCategory::Standard, 100),
        (102, RoomCategory::Standard, 100),
        (201, RoomCategory::Deluxe, 150),
        (202, RoomCategory::Deluxe, 150),
        (301, RoomCategory::Suite, 200),
        (302, RoomCategory::Suite, 200),
    ]
    .into_iter()
    .map(|(number, category, price)| {
        CreateRoom::new(RoomId::new(number), category, Decimal::new(price * 100, 2))
    })
    .collect()
}
