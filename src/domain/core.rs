mod client;
mod manager;
mod reservation;

pub use self::client::*;
pub use self::manager::*;
pub use self::reservation::*;
