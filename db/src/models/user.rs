use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumString};

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key (UUID v4 string).
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// User's unique email address.
    pub email: String,
    /// System-wide role.
    pub role: Role,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "USER")]
    User,

    #[sea_orm(string_value = "TECHNICIAN")]
    Technician,

    #[sea_orm(string_value = "ADMIN")]
    Admin,
}

impl Role {
    /// Staff roles receive ticket notifications and may be assigned tickets.
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Technician | Role::Admin)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, name: &str, email: &str, role: Role) -> Result<Model, DbErr> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            role: Set(role),
            created_at: Set(Utc::now()),
        };

        active_model.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(db).await
    }

    /// Looks up several users at once, keyed by id. Unknown ids are skipped.
    pub async fn find_by_ids(
        db: &DbConn,
        ids: impl IntoIterator<Item = String>,
    ) -> Result<HashMap<String, Model>, DbErr> {
        let ids: Vec<String> = ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let users = Entity::find().filter(Column::Id.is_in(ids)).all(db).await?;
        Ok(users.into_iter().map(|u| (u.id.clone(), u)).collect())
    }

    /// Users holding exactly `role`, oldest account first.
    pub async fn find_by_role(db: &DbConn, role: Role) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Role.eq(role))
            .order_by_asc(Column::CreatedAt)
            .all(db)
            .await
    }

    /// Changes the user's role. Returns `None` for an unknown user.
    pub async fn set_role(db: &DbConn, id: &str, role: Role) -> Result<Option<Model>, DbErr> {
        let Some(user) = Self::find_by_id(db, id).await? else {
            return Ok(None);
        };
        let mut active_model: ActiveModel = user.into();
        active_model.role = Set(role);
        active_model.update(db).await.map(Some)
    }

    /// Deletes the user. Tickets they opened go with them; tickets assigned to
    /// them become unassigned.
    pub async fn delete_by_id(db: &DbConn, id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id.to_owned()).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    /// All admins and technicians, oldest account first.
    pub async fn find_staff(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Role.is_in([Role::Admin, Role::Technician]))
            .order_by_asc(Column::CreatedAt)
            .all(db)
            .await
    }
}
