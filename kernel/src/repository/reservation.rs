use shared::error::AppResult;

use crate::model::reservation::{event::CreateReservation, Reservation};

pub trait ReservationRepository {
    // 予約操作を行う。空室がなければ AppError::NotAvailable を返し、何も変更しない
    fn create(&self, event: CreateReservation) -> AppResult<Reservation>;
    // すべての予約を作成順に取得する
    fn find_all(&self) -> AppResult<Vec<Reservation>>;
}
