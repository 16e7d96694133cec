use serde::{Deserialize, Serialize};

// 客室番号をそのまま ID として使う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(i32);

impl RoomId {
    pub fn new(number: i32) -> Self {
        Self(number)
    }

    pub fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for RoomId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// 予約 ID は作成順の連番
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(u32);

impl ReservationId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    // u32 の上限に達したら None
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
