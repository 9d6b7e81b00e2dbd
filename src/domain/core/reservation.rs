use derive_more::{Deref, Display, Error, From};
use serde::{Deserialize, Serialize};

use crate::domain::{Event, Id};

use super::Client;

/// 予約ID
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
    Deref,
    Default,
)]
pub struct ReservationId(u64);

impl ReservationId {
    /// 次に採番されるID。上限では同じIDを返す。
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Id for ReservationId {
    type Inner = u64;
}

/// 予約イベント
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReservationEvent {
    /// 予約が作成された
    ReservationCreated {
        id: ReservationId,
        hotel_name: String,
        clients: Vec<Client>,
        duration: u32,
        price: f64,
        breakfast: bool,
    },
    /// 予約がキャンセルされた
    ReservationCancelled { id: ReservationId },
}

impl ReservationEvent {
    pub fn id(&self) -> ReservationId {
        match self {
            ReservationEvent::ReservationCreated { id, .. }
            | ReservationEvent::ReservationCancelled { id } => *id,
        }
    }
}

impl From<Reservation> for ReservationEvent {
    fn from(value: Reservation) -> Self {
        ReservationEvent::ReservationCreated {
            id: value.id,
            hotel_name: value.hotel_name,
            clients: value.clients,
            duration: value.duration,
            price: value.price,
            breakfast: value.breakfast,
        }
    }
}

impl Event for ReservationEvent {
    type Id = ReservationId;
}

/// 予約エンティティ
///
/// 作成後は変更されない。生成は [`ReservationManager`](super::ReservationManager) のみが行う。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    hotel_name: String,
    clients: Vec<Client>,
    duration: u32,
    price: f64,
    breakfast: bool,
}

impl Reservation {
    pub(crate) fn new(
        id: ReservationId,
        hotel_name: String,
        clients: Vec<Client>,
        duration: u32,
        price: f64,
        breakfast: bool,
    ) -> Self {
        Self {
            id,
            hotel_name,
            clients,
            duration,
            price,
            breakfast,
        }
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn hotel_name(&self) -> &str {
        &self.hotel_name
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// 宿泊日数
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn breakfast(&self) -> bool {
        self.breakfast
    }

    /// 指定した名前の宿泊客を含むか
    pub fn has_client(&self, name: &str) -> bool {
        self.clients.iter().any(|c| c.name() == name)
    }
}

/// 料金表
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    /// 1人1泊あたりの基本料金
    pub base_price: f64,
    /// 朝食付きの場合の倍率
    pub breakfast_multiplier: f64,
}

impl Pricing {
    /// 人数 × 基本料金 × 日数 × 朝食倍率
    pub fn quote(&self, client_count: usize, duration: u32, breakfast: bool) -> f64 {
        let multiplier = if breakfast {
            self.breakfast_multiplier
        } else {
            1.0
        };
        client_count as f64 * self.base_price * duration as f64 * multiplier
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            base_price: 20.0,
            breakfast_multiplier: 1.25,
        }
    }
}

/// 予約エラー
#[derive(Error, Display, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// 同じIDの予約が存在します
    #[display(fmt = "Reservation with ID {} already exists", id)]
    DuplicateId { id: ReservationId },
    /// 宿泊客はすでに予約済みです
    #[display(fmt = "Client {} already has an active reservation", name)]
    ClientAlreadyReserved { name: String },
    /// 予約が見つかりません
    #[display(fmt = "Reservation {} not found", id)]
    ReservationNotFound { id: ReservationId },
}
