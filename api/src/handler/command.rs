use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use super::{
    reservation::{reserve_room, show_reservation_list},
    room::{show_available_rooms, show_room_list},
};
use crate::model::command::{BookingCommand, BookingCommandResponse, ListTarget};

// 空室なしは呼び出し側で表示できる通常の結果として返す
pub fn run_command(
    registry: &AppRegistry,
    command: BookingCommand,
) -> AppResult<BookingCommandResponse> {
    match command {
        BookingCommand::Search { search } => show_available_rooms(registry, &search)
            .map(|rooms| BookingCommandResponse::AvailableRooms {
                category: search,
                rooms,
            }),
        BookingCommand::List {
            list: ListTarget::Rooms,
        } => show_room_list(registry).map(BookingCommandResponse::Rooms),
        BookingCommand::List {
            list: ListTarget::Reservations,
        } => show_reservation_list(registry).map(BookingCommandResponse::Reservations),
        BookingCommand::Reserve(req) => match reserve_room(registry, req) {
            Ok(reservation) => Ok(BookingCommandResponse::Reserved(reservation)),
            Err(AppError::NotAvailable { category }) => {
                Ok(BookingCommandResponse::NotAvailable { category })
            }
            Err(e) => Err(e),
        },
    }
}
