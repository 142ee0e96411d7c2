use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::DeriveActiveEnum;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub title: String,
    pub description: String,

    pub status: TicketStatus,

    pub created_by_id: String,
    pub assigned_to_id: Option<String>,

    pub created_at: DateTime<Utc>,
    /// Set once, when the ticket first transitions into `Closed`.
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "ticket_status")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TicketStatus {
    #[sea_orm(string_value = "OPEN")]
    Open,

    #[sea_orm(string_value = "ASSIGNED")]
    Assigned,

    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,

    #[sea_orm(string_value = "CLOSED")]
    Closed,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedById",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    CreatedBy,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssignedToId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    AssignedTo,

    #[sea_orm(has_many = "super::chat_message::Entity")]
    ChatMessages,
}

impl Related<super::chat_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatMessages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Partial update of a ticket; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct TicketChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    pub assigned_to_id: Option<String>,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        created_by_id: &str,
        title: &str,
        description: &str,
    ) -> Result<Model, DbErr> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            status: Set(TicketStatus::Open),
            created_by_id: Set(created_by_id.to_owned()),
            assigned_to_id: Set(None),
            created_at: Set(Utc::now()),
            resolved_at: Set(None),
        };

        active_model.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, ticket_id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(ticket_id.to_owned()).one(db).await
    }

    /// Every ticket, newest first.
    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }

    /// Tickets assigned to `user_id` that are still being worked on, newest first.
    pub async fn find_active_for_assignee(db: &DbConn, user_id: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::AssignedToId.eq(user_id))
            .filter(Column::Status.is_in([TicketStatus::Assigned, TicketStatus::InProgress]))
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }

    /// Closed tickets of `user_id`, most recently resolved first.
    pub async fn find_completed_for_assignee(
        db: &DbConn,
        user_id: &str,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::AssignedToId.eq(user_id))
            .filter(Column::Status.eq(TicketStatus::Closed))
            .order_by_desc(Column::ResolvedAt)
            .all(db)
            .await
    }

    /// Applies `changes` to the ticket.
    ///
    /// - Moving into `Closed` from any other status stamps `resolved_at`.
    /// - Assigning an `Open`, previously unassigned ticket moves it to `Assigned`,
    ///   unless the same change sets a status explicitly.
    pub async fn apply_changes(
        db: &DbConn,
        ticket_id: &str,
        changes: TicketChanges,
    ) -> Result<Model, DbErr> {
        let current = Self::find_by_id(db, ticket_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Ticket not found".to_string()))?;

        let next_status = match (&changes.status, &changes.assigned_to_id) {
            (Some(status), _) => Some(*status),
            (None, Some(_))
                if current.status == TicketStatus::Open && current.assigned_to_id.is_none() =>
            {
                Some(TicketStatus::Assigned)
            }
            _ => None,
        };

        let closes_now =
            next_status == Some(TicketStatus::Closed) && current.status != TicketStatus::Closed;

        let mut active_model: ActiveModel = current.into();
        if let Some(title) = changes.title {
            active_model.title = Set(title);
        }
        if let Some(description) = changes.description {
            active_model.description = Set(description);
        }
        if let Some(assignee) = changes.assigned_to_id {
            active_model.assigned_to_id = Set(Some(assignee));
        }
        if let Some(status) = next_status {
            active_model.status = Set(status);
        }
        if closes_now {
            active_model.resolved_at = Set(Some(Utc::now()));
        }

        active_model.update(db).await
    }

    /// Deletes the ticket; its chat messages and notifications go with it.
    ///
    /// Returns `false` when no such ticket existed.
    pub async fn delete_by_id(db: &DbConn, ticket_id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(ticket_id.to_owned()).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    /// Whether `user_id` takes part in this ticket's chat: its creator or its assignee.
    pub fn is_chat_participant(&self, user_id: &str) -> bool {
        self.created_by_id == user_id || self.assigned_to_id.as_deref() == Some(user_id)
    }
}
