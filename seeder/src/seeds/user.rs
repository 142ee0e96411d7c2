use crate::seed::Seeder;
use db::models::user::{Model as UserModel, Role};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use sea_orm::{DatabaseConnection, DbErr};
use std::pin::Pin;

pub struct UserSeeder;

impl Seeder for UserSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            for _ in 0..10 {
                let name: String = Name().fake();
                let email: String = SafeEmail().fake();
                // Fake emails can repeat; a duplicate just means one user fewer.
                UserModel::create(db, &name, &email, Role::User).await.ok();
            }
            Ok(())
        })
    }
}
