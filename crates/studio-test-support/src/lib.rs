//! Shared test mocks and fixtures for the tattoo studio appointment service.

pub mod fixtures;
mod repository;

pub use repository::{
    FailingAppointmentRepository, InMemoryAppointmentRepository, StaleExistenceRepository,
};
