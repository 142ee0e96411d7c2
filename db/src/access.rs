//! Ticket chat access decision.
//!
//! A user may read or write a ticket's chat iff they created the ticket or are
//! its current assignee. The decision is taken against the ticket as it is
//! stored right now and is never cached: assignment can change between calls.

use sea_orm::{DbConn, DbErr};

use crate::models::tickets;

#[derive(Debug, Clone, PartialEq)]
pub enum ChatAccess {
    Allowed(tickets::Model),
    Denied(tickets::Model),
    TicketNotFound,
}

impl ChatAccess {
    pub fn is_allowed(&self) -> bool {
        matches!(self, ChatAccess::Allowed(_))
    }
}

/// Decides whether `user_id` may use the chat of `ticket_id`.
pub async fn can_access_chat(
    db: &DbConn,
    ticket_id: &str,
    user_id: &str,
) -> Result<ChatAccess, DbErr> {
    let Some(ticket) = tickets::Model::find_by_id(db, ticket_id).await? else {
        return Ok(ChatAccess::TicketNotFound);
    };

    if ticket.is_chat_participant(user_id) {
        Ok(ChatAccess::Allowed(ticket))
    } else {
        Ok(ChatAccess::Denied(ticket))
    }
}
