use chrono::{DateTime, Utc};
use db::models::{
    tickets::{Model as TicketModel, TicketStatus},
    user::Model as UserModel,
};
use sea_orm::{DbConn, DbErr};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTicketRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

/// Partial update; absent fields are left as they are.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    /// One of `OPEN`, `ASSIGNED`, `IN_PROGRESS`, `CLOSED`.
    pub status: Option<String>,

    pub assigned_to_id: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&UserModel> for UserSummary {
    fn from(u: &UserModel) -> Self {
        Self {
            id: u.id.clone(),
            name: u.name.clone(),
            email: u.email.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub created_by_id: String,
    pub assigned_to_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_by: Option<UserSummary>,
    pub assigned_to: Option<UserSummary>,
}

impl TicketResponse {
    fn build(ticket: TicketModel, users: &HashMap<String, UserModel>) -> Self {
        let summary = |id: &str| users.get(id).map(UserSummary::from);
        Self {
            created_by: summary(&ticket.created_by_id),
            assigned_to: ticket.assigned_to_id.as_deref().and_then(summary),
            id: ticket.id,
            title: ticket.title,
            description: ticket.description,
            status: ticket.status,
            created_by_id: ticket.created_by_id,
            assigned_to_id: ticket.assigned_to_id,
            created_at: ticket.created_at,
            resolved_at: ticket.resolved_at,
        }
    }
}

/// Attaches creator and assignee summaries to each ticket with one user lookup.
pub async fn with_people(
    db: &DbConn,
    tickets: Vec<TicketModel>,
) -> Result<Vec<TicketResponse>, DbErr> {
    let ids = tickets
        .iter()
        .flat_map(|t| std::iter::once(t.created_by_id.clone()).chain(t.assigned_to_id.clone()));
    let users = UserModel::find_by_ids(db, ids).await?;

    Ok(tickets
        .into_iter()
        .map(|t| TicketResponse::build(t, &users))
        .collect())
}

pub async fn one_with_people(db: &DbConn, ticket: TicketModel) -> Result<TicketResponse, DbErr> {
    let mut out = with_people(db, vec![ticket]).await?;
    out.pop()
        .ok_or_else(|| DbErr::Custom("ticket vanished while loading its people".into()))
}
