use std::rc::Rc;

use adapter::database::{connect_database_with, Database};
use adapter::repository::{reservation::ReservationRepositoryImpl, room::RoomRepositoryImpl};
use kernel::repository::reservation::ReservationRepository;
use kernel::repository::room::RoomRepository;
use shared::{config::AppConfig, error::AppResult};

// 予約エンジン一式。グローバル変数ではなく明示的に生成して参照で渡す
#[derive(Clone)]
pub struct AppRegistry {
    room_repository: Rc<dyn RoomRepository>,
    reservation_repository: Rc<dyn ReservationRepository>,
}

impl AppRegistry {
    pub fn new(db: Database) -> Self {
        let room_repository = Rc::new(RoomRepositoryImpl::new(db.clone()));
        let reservation_repository = Rc::new(ReservationRepositoryImpl::new(db));
        Self {
            room_repository,
            reservation_repository,
        }
    }

    pub fn from_config(app_config: &AppConfig) -> AppResult<Self> {
        let db = connect_database_with(&app_config.catalog)?;
        Ok(Self::new(db))
    }

    pub fn room_repository(&self) -> Rc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn reservation_repository(&self) -> Rc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }
}
