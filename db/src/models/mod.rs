pub mod chat_message;
pub mod feedback;
pub mod notification;
pub mod tickets;
pub mod user;
