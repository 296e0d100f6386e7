//! HTTP API response DTOs for hotel access.
//!
//! Field names follow the public JSON contract (camelCase, `Rooms` capitalized).

use serde::{Deserialize, Serialize};

use crate::domain::{Hotel, HotelWithRooms, IneligibleReason, Room};

/// Hotel entry for list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: String, // ISO 8601
    pub updated_at: String, // ISO 8601
}

impl From<Hotel> for HotelDto {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id.value(),
            name: hotel.name,
            image: hotel.image,
            created_at: hotel.created_at.to_iso8601(),
            updated_at: hotel.updated_at.to_iso8601(),
        }
    }
}

/// Hotel with rooms for detail endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetailDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomDto>,
}

impl From<HotelWithRooms> for HotelDetailDto {
    fn from(HotelWithRooms { hotel, rooms }: HotelWithRooms) -> Self {
        Self {
            id: hotel.id.value(),
            name: hotel.name,
            image: hotel.image,
            created_at: hotel.created_at.to_iso8601(),
            updated_at: hotel.updated_at.to_iso8601(),
            rooms: rooms.into_iter().map(RoomDto::from).collect(),
        }
    }
}

/// Room entry of a hotel detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.value(),
            name: room.name,
            capacity: room.capacity,
            hotel_id: room.hotel_id.value(),
            created_at: room.created_at.to_iso8601(),
            updated_at: room.updated_at.to_iso8601(),
        }
    }
}

/// Body of a 402 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRequiredDto {
    pub name: &'static str,
    pub message: &'static str,
    pub reason: IneligibleReason,
}

impl PaymentRequiredDto {
    pub const NAME: &'static str = "CannotFindAValidTicketToGetHotel";
    pub const MESSAGE: &'static str =
        "Ticket wasn't paid or it's for a remote event or hotel isn't included";

    pub fn new(reason: IneligibleReason) -> Self {
        Self {
            name: Self::NAME,
            message: Self::MESSAGE,
            reason,
        }
    }
}
