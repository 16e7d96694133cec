use derive_new::new;
use kernel::model::reservation::{event::CreateReservation, total_amount, Reservation};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::reservation::ReservationRow, Database};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: Database,
}

impl ReservationRepository for ReservationRepositoryImpl {
    // 予約操作を行う
    fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        // 検索から台帳への追加までを一度の可変借用の中で行う
        let mut tables = self.db.begin()?;

        // カタログ順で最初に見つかった空室を割り当てる
        let Some(index) = tables
            .rooms
            .iter()
            .position(|room| room.is_available && room.category.matches(&event.category))
        else {
            tracing::warn!(category = %event.category, "no available room");
            return Err(AppError::NotAvailable {
                category: event.category,
            });
        };
        let room = tables.rooms[index].clone();

        // 失敗しうる処理はすべて状態を変更する前に済ませる
        let Some(reservation_id) = tables.next_reservation_id else {
            tracing::error!("reservation ids are exhausted");
            return Err(AppError::ReservationIdExhausted);
        };
        let amount = total_amount(event.check_in, event.check_out, room.price_per_night)
            .ok_or_else(|| AppError::AmountOverflow(room.room_id.to_string()))?;

        tables.rooms[index].is_available = false;
        tables.next_reservation_id = reservation_id.next();

        let row = ReservationRow {
            reservation_id,
            room_id: room.room_id,
            guest_name: event.guest_name,
            check_in: event.check_in,
            check_out: event.check_out,
            total_amount: amount,
        };
        tables.reservations.push(row.clone());

        tracing::info!(
            %reservation_id,
            room_id = %room.room_id,
            total_amount = %row.total_amount,
            "reservation created"
        );

        Ok(row.into_reservation(&room))
    }

    // すべての予約を作成順に取得する
    fn find_all(&self) -> AppResult<Vec<Reservation>> {
        let tables = self.db.inner_ref()?;
        tables
            .reservations
            .iter()
            .map(|row| -> AppResult<Reservation> {
                let room = tables.room(row)?;
                Ok(row.clone().into_reservation(room))
            })
            .collect()
    }
}
