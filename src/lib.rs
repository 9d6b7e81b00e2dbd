use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;

use crate::domain::core::Pricing;

pub mod domain;

#[derive(Clone, Debug, Deserialize)]
pub struct HotelConfig {
    pub hotel: Hotel,
    pub pricing: Pricing,
    pub logger: Logger,
}

impl HotelConfig {
    /// `dbhotel.toml` (optional) を読み込み、`DBHOTEL__*` 環境変数で上書きする
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(config::File::with_name("dbhotel.toml").required(false))
            .add_source(Self::environment())
            .build()?
            .try_deserialize::<HotelConfig>()
    }

    /// 例: `DBHOTEL__PRICING__BASE_PRICE=25.0`
    pub fn environment() -> Environment {
        Environment::with_prefix("DBHOTEL")
            .prefix_separator("__")
            .separator("__")
    }

    /// 全キーの既定値を設定したビルダー
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let pricing = Pricing::default();
        Config::builder()
            .set_default("hotel.name", "DB Hotel")?
            .set_default("pricing.base_price", pricing.base_price)?
            .set_default("pricing.breakfast_multiplier", pricing.breakfast_multiplier)?
            .set_default("logger.level", "INFO")
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Hotel {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    pub level: Level,
}

#[derive(Clone, Debug, Deserialize)]
pub enum Level {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}
