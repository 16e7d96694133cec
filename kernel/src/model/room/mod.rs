use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use crate::model::id::RoomId;

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomCategory {
    Standard,
    Deluxe,
    Suite,
}

impl RoomCategory {
    pub const ALL: [RoomCategory; 3] = [Self::Standard, Self::Deluxe, Self::Suite];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Deluxe => "Deluxe",
            Self::Suite => "Suite",
        }
    }

    // 検索ラベルとの比較。大文字小文字のみ区別しない
    pub fn matches(self, label: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(label)
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl FromStr for RoomCategory {
    type Err = UnknownCategory;

    // カタログファイル用。前後の空白は無視する
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.matches(label))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub room_id: RoomId,
    pub category: RoomCategory,
    pub price_per_night: Decimal,
    pub is_available: bool,
}
