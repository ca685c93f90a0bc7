pub mod homework_source;
pub mod message_sender;
pub mod time_service;
