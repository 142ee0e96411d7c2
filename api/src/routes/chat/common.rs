use db::access::{ChatAccess, can_access_chat};
use db::models::tickets;
use sea_orm::DbConn;

use crate::response::ApiError;

/// Resolves the ticket behind a chat request, or the error the caller gets.
///
/// `failure` is the message reported if the lookup itself fails.
pub async fn authorize_chat(
    db: &DbConn,
    ticket_id: &str,
    user_id: &str,
    failure: &str,
) -> Result<tickets::Model, ApiError> {
    match can_access_chat(db, ticket_id, user_id)
        .await
        .map_err(|e| ApiError::store(failure, e))?
    {
        ChatAccess::Allowed(ticket) => Ok(ticket),
        ChatAccess::Denied(_) => Err(ApiError::Forbidden(
            "You do not have access to this chat".into(),
        )),
        ChatAccess::TicketNotFound => Err(ApiError::NotFound("Ticket not found".into())),
    }
}
