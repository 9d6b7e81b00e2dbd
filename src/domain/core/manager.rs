use tracing::{debug, trace};

use crate::domain::{Aggregation, EventQueue};

use super::{Client, Pricing, Reservation, ReservationError, ReservationEvent, ReservationId};

/// ホテルの予約台帳
///
/// 予約は追加順に保持される。変更は必ずイベントとして検証・適用され、
/// 成功したものだけがイベントキューに記録される。
///
/// イベントキューは `pop` / `pop_all` / `clear` で取り出すまで増え続ける。
/// 長期間使う場合は呼び出し側で定期的に取り出すこと。
#[derive(Debug, Default, Clone)]
pub struct ReservationManager {
    reservations: Vec<Reservation>,
    pricing: Pricing,
    events: EventQueue<ReservationEvent>,
}

impl ReservationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pricing(pricing: Pricing) -> Self {
        Self {
            pricing,
            ..Self::default()
        }
    }

    /// イベント列から台帳を復元する。不正なイベントは読み飛ばす。
    /// 料金はイベントの値ではなく `pricing` で計算し直す。
    pub fn replay<I>(pricing: Pricing, events: I) -> Self
    where
        I: IntoIterator<Item = ReservationEvent>,
    {
        let mut manager = Self::with_pricing(pricing);
        for event in events {
            manager.apply(event);
        }
        manager.clear();
        manager
    }

    /// 予約を追加する
    ///
    /// IDは末尾の予約のID + 1 (空なら 1)。既存予約と宿泊客名が重複する場合、
    /// もしくは採番したIDが既存予約と衝突する場合は何も変更せずにエラーを返す。
    pub fn add_reservation(
        &mut self,
        hotel_name: impl Into<String>,
        clients: Vec<Client>,
        duration: u32,
        breakfast: bool,
    ) -> Result<Reservation, ReservationError> {
        let id = self.next_id();
        let price = self.pricing.quote(clients.len(), duration, breakfast);
        let reservation =
            Reservation::new(id, hotel_name.into(), clients, duration, price, breakfast);
        let event = ReservationEvent::from(reservation.clone());
        self.validate(&event)?;
        self.apply_unchecked(event);
        debug!("予約を追加しました: id={} price={}", id, price);
        Ok(reservation)
    }

    /// 予約をキャンセルする
    pub fn cancel_reservation(&mut self, id: ReservationId) -> Result<(), ReservationError> {
        let event = ReservationEvent::ReservationCancelled { id };
        self.validate(&event)?;
        self.apply_unchecked(event);
        debug!("予約をキャンセルしました: id={}", id);
        Ok(())
    }

    /// 有効な予約 (追加順)
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn find_by_id(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id() == id)
    }

    /// 宿泊客名で有効な予約を検索する
    pub fn find_by_client(&self, name: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.has_client(name))
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    fn next_id(&self) -> ReservationId {
        self.reservations
            .last()
            .map(Reservation::id)
            .unwrap_or_default()
            .next()
    }

    fn validate_created(
        &self,
        id: ReservationId,
        clients: &[Client],
    ) -> Result<(), ReservationError> {
        for reservation in &self.reservations {
            if reservation.id() == id {
                return Err(ReservationError::DuplicateId { id });
            }
            for client in reservation.clients() {
                if let Some(new_client) = clients.iter().find(|c| c.same_person(client)) {
                    return Err(ReservationError::ClientAlreadyReserved {
                        name: new_client.name().to_owned(),
                    });
                }
            }
        }
        Ok(())
    }

    /// 検証済みのイベントを適用して記録する
    fn apply_unchecked(&mut self, event: ReservationEvent) {
        let event = match event {
            ReservationEvent::ReservationCreated {
                id,
                hotel_name,
                clients,
                duration,
                breakfast,
                ..
            } => {
                let price = self.pricing.quote(clients.len(), duration, breakfast);
                let reservation =
                    Reservation::new(id, hotel_name, clients, duration, price, breakfast);
                self.reservations.push(reservation.clone());
                ReservationEvent::from(reservation)
            }
            ReservationEvent::ReservationCancelled { id } => {
                if let Some(index) = self.reservations.iter().position(|r| r.id() == id) {
                    self.reservations.remove(index);
                }
                ReservationEvent::ReservationCancelled { id }
            }
        };
        self.events.push(event);
    }

    fn validate_cancelled(&self, id: ReservationId) -> Result<(), ReservationError> {
        match self.find_by_id(id) {
            Some(_) => Ok(()),
            None => Err(ReservationError::ReservationNotFound { id }),
        }
    }
}

impl Aggregation for ReservationManager {
    type Event = ReservationEvent;
    type Error = ReservationError;

    fn validate(&self, event: &Self::Event) -> Result<(), Self::Error> {
        match event {
            ReservationEvent::ReservationCreated { id, clients, .. } => {
                self.validate_created(*id, clients)
            }
            ReservationEvent::ReservationCancelled { id } => self.validate_cancelled(*id),
        }
    }

    fn apply(&mut self, event: Self::Event) {
        if let Err(e) = self.validate(&event) {
            trace!("イベントを適用できません: {}", e);
            return;
        }
        self.apply_unchecked(event);
    }

    fn events(&self) -> &EventQueue<Self::Event> {
        &self.events
    }

    fn events_mut(&mut self) -> &mut EventQueue<Self::Event> {
        &mut self.events
    }
}
