//! Domain layer for hotel access.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod access;
pub mod entity;
pub mod error;
pub mod event;
pub mod repository;
pub mod value_object;

pub use access::{HotelAccess, IneligibleReason};
pub use entity::{
    Address, Enrollment, Hotel, HotelWithRooms, Room, Ticket, TicketStatus, TicketType, User,
};
pub use error::{RepositoryError, ValueObjectError};
pub use event::{
    CreateAddress, CreateEnrollment, CreateHotel, CreateRoom, CreateTicket, CreateTicketType,
    CreateUser,
};
pub use repository::{EnrollmentRepository, HotelRepository, TicketRepository};
pub use value_object::{
    AddressId, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, Timestamp, UserId,
};
