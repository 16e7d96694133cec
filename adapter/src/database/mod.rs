use std::{
    cell::{Ref, RefCell, RefMut},
    collections::HashSet,
    fs,
    rc::Rc,
};

use kernel::model::{
    id::ReservationId,
    room::{event::CreateRoom, Room},
};
use shared::{
    config::CatalogConfig,
    error::{AppError, AppResult},
};

use self::model::{
    reservation::ReservationRow,
    room::{sample_catalog, RoomRow},
};

pub mod model;

// プロセス内のテーブル群。rooms はカタログ順、reservations は作成順に並ぶ
#[derive(Debug)]
pub struct HotelTables {
    pub(crate) rooms: Vec<Room>,
    pub(crate) reservations: Vec<ReservationRow>,
    // None は ID を使い切った状態
    pub(crate) next_reservation_id: Option<ReservationId>,
}

impl HotelTables {
    pub(crate) fn room(&self, row: &ReservationRow) -> AppResult<&Room> {
        self.rooms
            .iter()
            .find(|r| r.room_id == row.room_id)
            .ok_or_else(|| {
                AppError::InvalidCatalog(format!(
                    "reservation {} refers to unknown room {}",
                    row.reservation_id, row.room_id
                ))
            })
    }
}

// 単一スレッドで共有するため Rc<RefCell<_>> で包む
#[derive(Clone, Debug)]
pub struct Database(Rc<RefCell<HotelTables>>);

impl Database {
    pub fn new(rooms: Vec<CreateRoom>, first_reservation_id: u32) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for room in &rooms {
            if !seen.insert(room.room_id) {
                return Err(AppError::InvalidCatalog(format!(
                    "room {} is listed more than once",
                    room.room_id
                )));
            }
        }
        let tables = HotelTables {
            rooms: rooms.into_iter().map(Room::from).collect(),
            reservations: Vec::new(),
            next_reservation_id: Some(ReservationId::new(first_reservation_id)),
        };
        Ok(Self(Rc::new(RefCell::new(tables))))
    }

    pub fn inner_ref(&self) -> AppResult<Ref<'_, HotelTables>> {
        self.0
            .try_borrow()
            .map_err(|e| AppError::TransactionError(e.to_string()))
    }

    // 予約の一連の操作はこの可変借用の間に行う
    pub fn begin(&self) -> AppResult<RefMut<'_, HotelTables>> {
        self.0
            .try_borrow_mut()
            .map_err(|e| AppError::TransactionError(e.to_string()))
    }
}

pub fn parse_catalog(json: &str) -> AppResult<Vec<CreateRoom>> {
    let rows: Vec<RoomRow> = serde_json::from_str(json)?;
    rows.into_iter().map(CreateRoom::try_from).collect()
}

pub fn connect_database_with(cfg: &CatalogConfig) -> AppResult<Database> {
    let rooms = match &cfg.path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading room catalog");
            parse_catalog(&fs::read_to_string(path)?)?
        }
        None => sample_catalog(),
    };
    tracing::debug!(rooms = rooms.len(), "room catalog ready");
    Database::new(rooms, cfg.first_reservation_id)
}
