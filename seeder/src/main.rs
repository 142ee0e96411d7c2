use crate::seed::{Seeder, run_seeder};
use crate::seeds::{staff::StaffSeeder, tickets::TicketSeeder, user::UserSeeder};
use colored::Colorize;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{} {e}", "Failed to connect to database:".red());
            std::process::exit(1);
        }
    };
    if let Err(e) = db::migrate(&db).await {
        eprintln!("{} {e}", "Failed to apply migrations:".red());
        std::process::exit(1);
    }

    for (seeder, name) in [
        (Box::new(StaffSeeder) as Box<dyn Seeder + Send + Sync>, "Staff"),
        (Box::new(UserSeeder), "User"),
        (Box::new(TicketSeeder), "Ticket"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
