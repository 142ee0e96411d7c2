//! Application state container shared across Axum route handlers and services.
//!
//! This struct holds shared resources such as the database connection and the
//! live chat registry. It is cloned into every route handler via Axum's `State<T>`
//! extractor; clones share the same underlying connection pool and registry.

use crate::ws::ChatRegistry;
use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
///
/// This includes:
/// - A cloned, thread-safe database connection for use with SeaORM.
/// - The process-wide `ChatRegistry` of live chat connections, created with the
///   state at server start and dropped with it at shutdown.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    chat: ChatRegistry,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection and an empty registry.
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_registry(db, ChatRegistry::new())
    }

    /// Creates a new `AppState` around an existing registry.
    pub fn with_registry(db: DatabaseConnection, chat: ChatRegistry) -> Self {
        Self { db, chat }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a shared reference to the live chat registry.
    pub fn chat(&self) -> &ChatRegistry {
        &self.chat
    }
}

impl AppState {
    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for async contexts or spawning tasks that require ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Returns a cloned handle to the live chat registry.
    pub fn chat_clone(&self) -> ChatRegistry {
        self.chat.clone()
    }
}
