//! Commands for creating domain records in a store.
//!
//! The hotel access flow only reads. These are used by whatever populates the
//! store (tests, an embedding application).

use super::{
    entity::TicketStatus,
    value_object::{EnrollmentId, HotelId, TicketTypeId, Timestamp, UserId},
};

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct CreateEnrollment {
    pub user_id: UserId,
    pub name: String,
    pub cpf: String,
    pub birthday: Timestamp,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct CreateAddress {
    pub enrollment_id: EnrollmentId,
    pub cep: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub number: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateTicketType {
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

#[derive(Debug, Clone)]
pub struct CreateTicket {
    pub enrollment_id: EnrollmentId,
    pub ticket_type_id: TicketTypeId,
    pub status: TicketStatus,
}

#[derive(Debug, Clone)]
pub struct CreateHotel {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone)]
pub struct CreateRoom {
    pub hotel_id: HotelId,
    pub name: String,
    pub capacity: i32,
}
