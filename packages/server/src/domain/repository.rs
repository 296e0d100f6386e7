//! Repository traits.
//!
//! The domain layer defines what it needs from storage; the infrastructure
//! layer provides implementations (dependency inversion). Every method issues
//! exactly one query against the store.

use async_trait::async_trait;

use super::{
    entity::{Enrollment, Hotel, HotelWithRooms, Ticket},
    error::RepositoryError,
    value_object::{EnrollmentId, HotelId, UserId},
};

/// Enrollment lookups
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Find the enrollment of a user, with its address joined.
    async fn find_with_address_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, RepositoryError>;
}

/// Ticket lookups
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Find the first ticket of an enrollment, with its ticket type joined.
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, RepositoryError>;
}

/// Hotel lookups
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Fetch every hotel.
    async fn find_all(&self) -> Result<Vec<Hotel>, RepositoryError>;

    /// Fetch one hotel with its rooms. `None` when no hotel has this id.
    async fn find_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, RepositoryError>;
}
