use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::room::RoomsResponse;

pub fn show_available_rooms(registry: &AppRegistry, category: &str) -> AppResult<RoomsResponse> {
    registry
        .room_repository()
        .find_available(category)
        .map(RoomsResponse::from)
}

pub fn show_room_list(registry: &AppRegistry) -> AppResult<RoomsResponse> {
    registry
        .room_repository()
        .find_all()
        .map(RoomsResponse::from)
}
