//! Core domain models for hotel access.

use serde::{Deserialize, Serialize};

use super::{
    access::{HotelAccess, IneligibleReason},
    value_object::{
        AddressId, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, Timestamp, UserId,
    },
};

/// Registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Personal profile of a user, prerequisite for buying a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub name: String,
    /// Brazilian taxpayer registry number
    pub cpf: String,
    pub birthday: Timestamp,
    pub phone: String,
    pub user_id: UserId,
    /// Postal address, loaded together with the enrollment
    pub address: Option<Address>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Postal address of an enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub cep: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub number: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
    pub enrollment_id: EnrollmentId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Class of ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payment status of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

/// Purchase record linking an enrollment to a ticket type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    /// Ticket type, always joined when a ticket is loaded
    pub ticket_type: TicketType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ticket {
    /// Evaluate whether this ticket grants access to hotel data.
    ///
    /// Clauses are checked in order: payment status, remote flag, hotel
    /// inclusion. The first failing clause is reported.
    pub fn hotel_access(&self) -> HotelAccess {
        if self.status == TicketStatus::Reserved {
            return HotelAccess::Ineligible(IneligibleReason::TicketNotPaid);
        }
        if self.ticket_type.is_remote {
            return HotelAccess::Ineligible(IneligibleReason::RemoteEvent);
        }
        if !self.ticket_type.includes_hotel {
            return HotelAccess::Ineligible(IneligibleReason::HotelNotIncluded);
        }
        HotelAccess::Eligible
    }
}

/// Hotel offered to eligible ticket holders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    /// Image URL
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Room of a hotel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Hotel loaded together with its rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        let now = Timestamp::new(1000);
        Ticket {
            id: TicketId::new(1).unwrap(),
            enrollment_id: EnrollmentId::new(1).unwrap(),
            status,
            ticket_type: TicketType {
                id: TicketTypeId::new(1).unwrap(),
                name: "Presencial + Hotel".to_string(),
                price: 600,
                is_remote,
                includes_hotel,
                created_at: now,
                updated_at: now,
            },
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_paid_in_person_ticket_with_hotel_is_eligible() {
        // テスト項目: 支払い済み・対面・ホテル込みのチケットはアクセス可能
        // given (前提条件):
        let ticket = ticket(TicketStatus::Paid, false, true);

        // when (操作):
        let access = ticket.hotel_access();

        // then (期待する結果):
        assert_eq!(access, HotelAccess::Eligible);
    }

    #[test]
    fn test_reserved_ticket_is_ineligible_regardless_of_type() {
        // テスト項目: 未払いのチケットはチケット種別に関係なくアクセス不可
        for (is_remote, includes_hotel) in [(false, true), (true, true), (false, false), (true, false)] {
            // given (前提条件):
            let ticket = ticket(TicketStatus::Reserved, is_remote, includes_hotel);

            // when (操作):
            let access = ticket.hotel_access();

            // then (期待する結果):
            assert_eq!(
                access,
                HotelAccess::Ineligible(IneligibleReason::TicketNotPaid)
            );
        }
    }

    #[test]
    fn test_remote_ticket_is_ineligible_even_with_hotel() {
        // テスト項目: オンラインのチケットはホテル込みでもアクセス不可
        let ticket = ticket(TicketStatus::Paid, true, true);

        assert_eq!(
            ticket.hotel_access(),
            HotelAccess::Ineligible(IneligibleReason::RemoteEvent)
        );
    }

    #[test]
    fn test_ticket_without_hotel_is_ineligible() {
        // テスト項目: ホテルを含まないチケットはアクセス不可
        let ticket = ticket(TicketStatus::Paid, false, false);

        assert_eq!(
            ticket.hotel_access(),
            HotelAccess::Ineligible(IneligibleReason::HotelNotIncluded)
        );
    }

    #[test]
    fn test_ticket_status_serializes_in_upper_case() {
        // テスト項目: チケットステータスは大文字でシリアライズされる
        assert_eq!(
            serde_json::to_string(&TicketStatus::Reserved).unwrap(),
            "\"RESERVED\""
        );
        assert_eq!(serde_json::to_string(&TicketStatus::Paid).unwrap(), "\"PAID\"");
    }
}
