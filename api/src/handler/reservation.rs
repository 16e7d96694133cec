use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::reservation::{
    CreateReservationRequest, ReservationResponse, ReservationsResponse,
};

// 空室がない場合は AppError::NotAvailable をそのまま呼び出し側へ返す
pub fn reserve_room(
    registry: &AppRegistry,
    req: CreateReservationRequest,
) -> AppResult<ReservationResponse> {
    registry
        .reservation_repository()
        .create(req.into())
        .map(ReservationResponse::from)
}

pub fn show_reservation_list(registry: &AppRegistry) -> AppResult<ReservationsResponse> {
    registry
        .reservation_repository()
        .find_all()
        .map(ReservationsResponse::from)
}
