//! Ticket chat over the live channel.
//!
//! A connection starts unjoined. `join` puts it in a room (the ticket id) as a
//! user, replacing any earlier membership. `chat` from a joined connection is
//! persisted and then broadcast to every member of the room, the sender
//! included. Anything else is dropped and logged; no error frames are sent.

pub mod handlers;
pub mod payload;
pub mod ws_handlers;
