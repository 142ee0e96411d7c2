use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::Set, Order, QueryOrder};
use serde::{Deserialize, Serialize};

use super::user;

/// Service feedback left by a user.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub user_id: String,

    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    /// 1 (poor) to 5 (excellent).
    pub rating: i32,

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
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackAuthor {
    pub name: String,
    pub email: String,
}

/// Feedback joined with the name and email of whoever left it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackWithAuthor {
    #[serde(flatten)]
    pub feedback: Model,
    pub user: FeedbackAuthor,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        user_id: &str,
        subject: &str,
        message: &str,
        rating: i32,
    ) -> Result<Model, DbErr> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_owned()),
            subject: Set(subject.to_owned()),
            message: Set(message.to_owned()),
            rating: Set(rating),
            created_at: Set(Utc::now()),
        };

        active.insert(db).await
    }

    /// All feedback, newest first.
    pub async fn list_with_authors(db: &DbConn) -> Result<Vec<FeedbackWithAuthor>, DbErr> {
        let rows = Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(Column::CreatedAt)
            .order_by(Expr::cust("\"feedback\".\"rowid\""), Order::Desc)
            .all(db)
            .await?;

        rows.into_iter()
            .map(|(feedback, author)| {
                let author = author.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("author {} of feedback {}", feedback.user_id, feedback.id))
                })?;
                Ok(FeedbackWithAuthor {
                    feedback,
                    user: FeedbackAuthor {
                        name: author.name,
                        email: author.email,
                    },
                })
            })
            .collect()
    }
}
