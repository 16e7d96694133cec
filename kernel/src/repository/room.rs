use shared::error::AppResult;

use crate::model::{id::RoomId, room::Room};

pub trait RoomRepository {
    // カテゴリーに一致する空室をカタログ順に返す。該当なしは空の Vec
    fn find_available(&self, category: &str) -> AppResult<Vec<Room>>;
    // 予約済みも含めたカタログ全体をカタログ順に返す
    fn find_all(&self) -> AppResult<Vec<Room>>;
    fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>>;
}
