//! Append-only store of ticket chat messages.
//!
//! Messages are written once and never updated or deleted here; they only go
//! away through the cascade when their ticket is deleted. Reads always come back
//! enriched with the sender's display identity.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::Set, Order, QueryOrder};
use serde::{Deserialize, Serialize};

use super::user::{self, Role};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "chat_messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub ticket_id: String,
    pub sender_id: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tickets::Entity",
        from = "Column::TicketId",
        to = "super::tickets::Column::Id",
        on_delete = "Cascade"
    )]
    Ticket,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SenderId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Sender,
}

impl Related<super::tickets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sender.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Display identity of a message's sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl From<user::Model> for Sender {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            name: u.name,
            role: u.role,
        }
    }
}

/// A persisted message joined with its sender; the shape clients receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageWithSender {
    pub id: String,
    pub ticket_id: String,
    pub sender_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub sender: Sender,
}

impl ChatMessageWithSender {
    fn join(message: Model, sender: user::Model) -> Self {
        Self {
            id: message.id,
            ticket_id: message.ticket_id,
            sender_id: message.sender_id,
            message: message.message,
            created_at: message.created_at,
            sender: sender.into(),
        }
    }
}

impl Model {
    /// Persists one message from `sender_id` on `ticket_id`.
    ///
    /// References are not checked up front: an unknown ticket or sender surfaces
    /// as the store's foreign-key error.
    pub async fn append(
        db: &DbConn,
        ticket_id: &str,
        sender_id: &str,
        text: &str,
    ) -> Result<ChatMessageWithSender, DbErr> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            ticket_id: Set(ticket_id.to_owned()),
            sender_id: Set(sender_id.to_owned()),
            message: Set(text.to_owned()),
            created_at: Set(Utc::now()),
        };
        let message = active.insert(db).await?;

        let sender = user::Entity::find_by_id(message.sender_id.clone())
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("sender {}", message.sender_id)))?;

        Ok(ChatMessageWithSender::join(message, sender))
    }

    /// Full history of `ticket_id`, oldest first, ties in insertion order.
    pub async fn list_by_ticket(
        db: &DbConn,
        ticket_id: &str,
    ) -> Result<Vec<ChatMessageWithSender>, DbErr> {
        let rows = Entity::find()
            .filter(Column::TicketId.eq(ticket_id))
            .find_also_related(user::Entity)
            .order_by_asc(Column::CreatedAt)
            .order_by(Expr::cust("\"chat_messages\".\"rowid\""), Order::Asc)
            .all(db)
            .await?;

        rows.into_iter()
            .map(|(message, sender)| match sender {
                Some(sender) => Ok(ChatMessageWithSender::join(message, sender)),
                None => Err(DbErr::RecordNotFound(format!(
                    "sender {} of message {}",
                    message.sender_id, message.id
                ))),
            })
            .collect()
    }
}
