//! Shared application state.

use std::sync::Arc;

use studio_core::repository::AppointmentRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository handle, constructed once at startup.
    pub appointments: Arc<dyn AppointmentRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(appointments: Arc<dyn AppointmentRepository>) -> Self {
        Self { appointments }
    }
}
