use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::Set, QueryOrder};
use serde::{Deserialize, Serialize};

use super::{tickets, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub user_id: String,
    pub ticket_id: Option<String>,

    pub message: String,
    pub is_read: bool,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::tickets::Entity",
        from = "Column::TicketId",
        to = "super::tickets::Column::Id",
        on_delete = "Cascade"
    )]
    Ticket,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::tickets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        user_id: &str,
        ticket_id: Option<&str>,
        message: &str,
    ) -> Result<Model, DbErr> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_owned()),
            ticket_id: Set(ticket_id.map(str::to_owned)),
            message: Set(message.to_owned()),
            is_read: Set(false),
            created_at: Set(Utc::now()),
        };

        active.insert(db).await
    }

    /// Notifies every admin and technician that `ticket` was filed.
    ///
    /// Returns how many notifications were written.
    pub async fn notify_staff_of_new_ticket(
        db: &DbConn,
        ticket: &tickets::Model,
    ) -> Result<usize, DbErr> {
        let staff = user::Model::find_staff(db).await?;
        let text = format!("New ticket created: {}", ticket.title);

        for member in &staff {
            Self::create(db, &member.id, Some(&ticket.id), &text).await?;
        }
        Ok(staff.len())
    }

    /// Notifications of `user_id`, newest first.
    pub async fn find_for_user(db: &DbConn, user_id: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }

    /// Marks one of `user_id`'s notifications as read.
    ///
    /// Returns `None` when the notification does not exist or belongs to someone else.
    pub async fn mark_read(
        db: &DbConn,
        id: &str,
        user_id: &str,
    ) -> Result<Option<Model>, DbErr> {
        let found = Entity::find_by_id(id.to_owned())
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await?;

        match found {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.is_read = Set(true);
                active.update(db).await.map(Some)
            }
            None => Ok(None),
        }
    }

    /// Marks all unread notifications of `user_id` as read and returns how many changed.
    pub async fn mark_all_read(db: &DbConn, user_id: &str) -> Result<u64, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}
