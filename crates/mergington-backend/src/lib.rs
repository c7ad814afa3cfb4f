//! The Mergington activities backend: an axum server over an in-memory
//! directory of extracurricular activities.

pub mod config;
pub mod handlers;
pub mod routes;
pub mod services;

use services::ActivityServiceInMemory;

/// State shared with every handler.
pub struct AppState {
    pub activities: ActivityServiceInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(activities: ActivityServiceInMemory) -> Self {
        Self {
            activities,
            started_at: chrono::Utc::now(),
        }
    }
}
