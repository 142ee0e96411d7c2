use crate::seed::Seeder;
use db::models::user::{Column, Entity, Model as UserModel, Role};
use fake::Fake;
use fake::faker::name::en::Name;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::pin::Pin;

/// The admin account plus a handful of technicians.
pub struct StaffSeeder;

impl Seeder for StaffSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let admin_email =
                std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@helpdesk.local".into());

            let existing = Entity::find()
                .filter(Column::Email.eq(admin_email.as_str()))
                .one(db)
                .await?;
            if existing.is_none() {
                UserModel::create(db, "Admin User", &admin_email, Role::Admin).await?;
            }

            for i in 1..=3 {
                let name: String = Name().fake();
                let email = format!("tech{i}@helpdesk.local");
                let taken = Entity::find()
                    .filter(Column::Email.eq(email.as_str()))
                    .one(db)
                    .await?
                    .is_some();
                if !taken {
                    UserModel::create(db, &name, &email, Role::Technician).await?;
                }
            }

            Ok(())
        })
    }
}
