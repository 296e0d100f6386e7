//! Server state.

use std::sync::Arc;

use crate::{
    domain::{EnrollmentRepository, HotelRepository, TicketRepository},
    infrastructure::repository::{
        InMemoryDatabase, InMemoryEnrollmentRepository, InMemoryHotelRepository,
        InMemoryTicketRepository,
    },
};

/// Shared application state
///
/// Repositories are injected here and handed to the use cases per request.
pub struct AppState {
    pub enrollment_repository: Arc<dyn EnrollmentRepository>,
    pub ticket_repository: Arc<dyn TicketRepository>,
    pub hotel_repository: Arc<dyn HotelRepository>,
}

impl AppState {
    pub fn new(
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
        hotel_repository: Arc<dyn HotelRepository>,
    ) -> Self {
        Self {
            enrollment_repository,
            ticket_repository,
            hotel_repository,
        }
    }

    /// State backed by one in-memory database shared by every repository
    pub fn in_memory(db: InMemoryDatabase) -> Self {
        Self::new(
            Arc::new(InMemoryEnrollmentRepository::new(db.clone())),
            Arc::new(InMemoryTicketRepository::new(db.clone())),
            Arc::new(InMemoryHotelRepository::new(db)),
        )
    }
}
