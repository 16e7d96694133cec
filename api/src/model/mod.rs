pub mod command;
pub mod reservation;
pub mod room;

use rust_decimal::Decimal;

// 金額は常に小数点以下 2 桁で表示する
pub(crate) fn format_amount(amount: Decimal) -> String {
    format!("${:.2}", amount)
}
