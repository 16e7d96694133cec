use chrono::NaiveDate;
use derive_new::new;

#[derive(Debug, Clone, new)]
pub struct CreateReservation {
    pub guest_name: String,
    // 大文字小文字を区別せずにカテゴリーを照合する
    pub category: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}
