use std::error::Error;

use dbhotel::{
    domain::{
        core::{Client, ReservationId, ReservationManager},
        Aggregation,
    },
    HotelConfig,
};
use tracing::{error, info, warn, Level};

fn main() {
    match HotelConfig::load() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .init();
            if let Err(error) = run(&config) {
                error!("アプリケーションエラー: {}", error);
            }
        }
        Err(error) => {
            tracing_subscriber::fmt::init();
            error!("設定読み込みエラー: {}", error)
        }
    }
}

fn run(config: &HotelConfig) -> Result<(), Box<dyn Error>> {
    let hotel = config.hotel.name.as_str();
    let mut manager = ReservationManager::with_pricing(config.pricing);
    let goku = Client::new("Goku", 24, 175);
    let vegeta = Client::new("Vegeta", 29, 164);

    let reservation = manager.add_reservation(hotel, vec![goku.clone()], 3, true)?;
    info!("予約を受け付けました: {}", serde_json::to_string(&reservation)?);
    let reservation = manager.add_reservation(hotel, vec![vegeta], 4, true)?;
    info!("予約を受け付けました: {}", serde_json::to_string(&reservation)?);

    if let Err(e) = manager.add_reservation(hotel, vec![goku], 3, true) {
        warn!("予約を受け付けられません: {}", e);
    }

    let id = ReservationId::from(2);
    manager.cancel_reservation(id)?;
    info!("予約をキャンセルしました: {}", id);
    if let Err(e) = manager.cancel_reservation(id) {
        warn!("キャンセルできません: {}", e);
    }

    info!(
        "有効な予約 ({}件): {}",
        manager.len(),
        serde_json::to_string_pretty(manager.reservations())?
    );
    for event in manager.pop_all() {
        info!("イベント: {}", serde_json::to_string(&event)?);
    }
    Ok(())
}
