use colored::*;
use futures::FutureExt;
use migration::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 72;

/// Applies every pending migration, one per status line.
///
/// Steps go through `Migrator::up` so they are recorded in `seaql_migrations`
/// and the API's own startup migration sees them as applied.
pub async fn run_all_migrations(url: &str) {
    let db = match Database::connect(url).await {
        Ok(db) => db,
        Err(e) => {
            println!("{} {}", "DB connection failed:".red(), e);
            std::process::exit(1);
        }
    };

    let pending = match Migrator::get_pending_migrations(&db).await {
        Ok(pending) => pending,
        Err(e) => {
            println!("{} {}", "Failed to read migration state:".red(), e);
            std::process::exit(1);
        }
    };

    if pending.is_empty() {
        println!("Nothing to migrate");
        return;
    }

    println!("Running migrations...");
    for migration in pending {
        run_step(&db, migration.name()).await;
    }
}

async fn run_step(db: &DatabaseConnection, name: &str) {
    let name_str = format!("Applying {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    let _ = io::stdout().flush();

    let start = Instant::now();
    let result = std::panic::AssertUnwindSafe(Migrator::up(db, Some(1)))
        .catch_unwind()
        .await;

    match result {
        Ok(Ok(())) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
        }
        Ok(Err(e)) => {
            println!("{} {}", "failed".red(), e);
            std::process::exit(1);
        }
        Err(_) => {
            println!("{}", "panicked".red());
            std::process::exit(1);
        }
    }
}
