//! Application state shared across handlers.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::Services;

/// Application state containing all services and the database handle.
#[derive(Clone)]
pub struct AppState {
    /// Wired service container
    pub services: Services,
    /// Database connection, kept for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let services = Services::from_connection(database.get_connection());

        Self { services, database }
    }
}
