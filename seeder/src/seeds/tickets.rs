use crate::seed::Seeder;
use db::models::{
    chat_message::Model as ChatMessageModel,
    notification::Model as NotificationModel,
    tickets::{Model as TicketModel, TicketChanges, TicketStatus},
    user::{Column, Entity, Model as UserModel, Role},
};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::pin::Pin;

const TITLES: [&str; 5] = [
    "Laptop won't boot",
    "Printer jammed",
    "VPN keeps disconnecting",
    "Password reset not arriving",
    "Monitor flickering",
];

const OPENERS: [&str; 4] = [
    "It started this morning.",
    "Happens every time I log in.",
    "Colleagues see the same thing.",
    "Restarting did not help.",
];

const REPLIES: [&str; 4] = [
    "Thanks, looking into it now.",
    "Can you send a photo of the error?",
    "I've pushed a fix, please try again.",
    "Coming over to your desk shortly.",
];

/// Demo tickets from random users, most assigned, some closed, each with a short chat.
pub struct TicketSeeder;

impl Seeder for TicketSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let users = Entity::find().filter(Column::Role.eq(Role::User)).all(db).await?;
            let techs = Entity::find()
                .filter(Column::Role.eq(Role::Technician))
                .all(db)
                .await?;
            if users.is_empty() || techs.is_empty() {
                return Err(DbErr::Custom("seed staff and users before tickets".into()));
            }

            for _ in 0..20 {
                let owner = pick(&users);
                let title = TITLES[fastrand::usize(..TITLES.len())];
                let ticket =
                    TicketModel::create(db, &owner.id, title, OPENERS[fastrand::usize(..OPENERS.len())])
                        .await?;
                NotificationModel::notify_staff_of_new_ticket(db, &ticket).await?;

                // A quarter of tickets stay open and unassigned.
                if fastrand::u8(..4) == 0 {
                    continue;
                }

                let tech = pick(&techs);
                let status = match fastrand::u8(..3) {
                    0 => None,
                    1 => Some(TicketStatus::InProgress),
                    _ => Some(TicketStatus::Closed),
                };
                TicketModel::apply_changes(
                    db,
                    &ticket.id,
                    TicketChanges {
                        assigned_to_id: Some(tech.id.clone()),
                        ..Default::default()
                    },
                )
                .await?;

                ChatMessageModel::append(db, &ticket.id, &owner.id, "Any update on this?").await?;
                ChatMessageModel::append(db, &ticket.id, &tech.id, REPLIES[fastrand::usize(..REPLIES.len())])
                    .await?;

                if let Some(status) = status {
                    TicketModel::apply_changes(
                        db,
                        &ticket.id,
                        TicketChanges {
                            status: Some(status),
                            ..Default::default()
                        },
                    )
                    .await?;
                }
            }

            Ok(())
        })
    }
}

fn pick(users: &[UserModel]) -> &UserModel {
    &users[fastrand::usize(..users.len())]
}
