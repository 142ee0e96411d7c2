pub mod staff;
pub mod tickets;
pub mod user;
