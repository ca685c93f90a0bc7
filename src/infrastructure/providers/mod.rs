pub mod practicum_client;
pub mod telegram_sender;

pub use practicum_client::*;
pub use telegram_sender::*;
