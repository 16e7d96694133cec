use derive_new::new;
use kernel::model::{id::RoomId, room::Room};
use kernel::repository::room::RoomRepository;
use shared::error::AppResult;

use crate::database::Database;

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: Database,
}

impl RoomRepository for RoomRepositoryImpl {
    fn find_available(&self, category: &str) -> AppResult<Vec<Room>> {
        let tables = self.db.inner_ref()?;
        let rooms: Vec<Room> = tables
            .rooms
            .iter()
            .filter(|room| room.is_available && room.category.matches(category))
            .cloned()
            .collect();
        tracing::debug!(category, found = rooms.len(), "searched available rooms");
        Ok(rooms)
    }

    fn find_all(&self) -> AppResult<Vec<Room>> {
        Ok(self.db.inner_ref()?.rooms.clone())
    }

    fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        let tables = self.db.inner_ref()?;
        Ok(tables.rooms.iter().find(|r| r.room_id == room_id).cloned())
    }
}
