//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a connection pool (clones share the pool)
//! and the notification service holds its SMTP transport behind an `Arc`.

use sea_orm::DatabaseConnection;

use super::service::notification::NotificationService;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Best-effort email notifier for hero power creation.
    pub notifier: NotificationService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, notifier: NotificationService) -> Self {
        Self { db, notifier }
    }
}
