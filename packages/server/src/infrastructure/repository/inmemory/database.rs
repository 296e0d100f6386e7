//! インメモリデータベース
//!
//! BTreeMap をテーブルとして使用し、ID は挿入順に採番されます。
//! BTreeMap のキー順がそのまま挿入順になるため、一覧系のクエリは ID 昇順で返ります。
//!
//! 申込とチケットは行（Row）として保存し、住所・チケット種別は
//! 読み取り時に結合します。

use std::{collections::BTreeMap, sync::Arc};

use lodging_shared::time::get_utc_timestamp;
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::domain::{
    Address, AddressId, CreateAddress, CreateEnrollment, CreateHotel, CreateRoom, CreateTicket,
    CreateTicketType, CreateUser, Enrollment, EnrollmentId, Hotel, HotelId, RepositoryError, Room,
    RoomId, Ticket, TicketId, TicketStatus, TicketType, TicketTypeId, Timestamp, User, UserId,
};

/// 申込テーブルの行（住所は別テーブル）
#[derive(Debug, Clone)]
pub(super) struct EnrollmentRow {
    pub(super) id: EnrollmentId,
    pub(super) name: String,
    pub(super) cpf: String,
    pub(super) birthday: Timestamp,
    pub(super) phone: String,
    pub(super) user_id: UserId,
    pub(super) created_at: Timestamp,
    pub(super) updated_at: Timestamp,
}

impl EnrollmentRow {
    pub(super) fn into_enrollment(self, address: Option<Address>) -> Enrollment {
        Enrollment {
            id: self.id,
            name: self.name,
            cpf: self.cpf,
            birthday: self.birthday,
            phone: self.phone,
            user_id: self.user_id,
            address,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// チケットテーブルの行（チケット種別は外部キーのみ）
#[derive(Debug, Clone)]
pub(super) struct TicketRow {
    pub(super) id: TicketId,
    pub(super) enrollment_id: EnrollmentId,
    pub(super) ticket_type_id: TicketTypeId,
    pub(super) status: TicketStatus,
    pub(super) created_at: Timestamp,
    pub(super) updated_at: Timestamp,
}

impl TicketRow {
    pub(super) fn into_ticket(self, ticket_type: TicketType) -> Ticket {
        Ticket {
            id: self.id,
            enrollment_id: self.enrollment_id,
            status: self.status,
            ticket_type,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// ID の採番カウンタ（テーブルごと）
#[derive(Debug, Default)]
struct Sequences {
    user: i32,
    enrollment: i32,
    address: i32,
    ticket_type: i32,
    ticket: i32,
    hotel: i32,
    room: i32,
}

fn next_value(counter: &mut i32, entity: &'static str) -> Result<i32, RepositoryError> {
    *counter = counter
        .checked_add(1)
        .ok_or(RepositoryError::SequenceExhausted(entity))?;
    Ok(*counter)
}

/// 全テーブル
#[derive(Debug, Default)]
pub(super) struct Tables {
    pub(super) users: BTreeMap<UserId, User>,
    pub(super) enrollments: BTreeMap<EnrollmentId, EnrollmentRow>,
    pub(super) addresses: BTreeMap<AddressId, Address>,
    pub(super) ticket_types: BTreeMap<TicketTypeId, TicketType>,
    pub(super) tickets: BTreeMap<TicketId, TicketRow>,
    pub(super) hotels: BTreeMap<HotelId, Hotel>,
    pub(super) rooms: BTreeMap<RoomId, Room>,
    sequences: Sequences,
}

/// インメモリデータベース
///
/// クローンは同じテーブルを共有します。
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryDatabase {
    /// 空のデータベースを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 読み取りロックを取得（1 クエリの間だけ保持する）
    pub(super) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    /// ユーザーを追加
    pub async fn insert_user(&self, event: CreateUser) -> Result<User, RepositoryError> {
        let mut tables = self.tables.write().await;
        let id = UserId::new(next_value(&mut tables.sequences.user, "User")?)
            .map_err(|_| RepositoryError::SequenceExhausted("User"))?;
        let now = Timestamp::new(get_utc_timestamp());
        let user = User {
            id,
            email: event.email,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    /// 申込を追加
    ///
    /// # Errors
    ///
    /// * ユーザーが存在しない場合は `ForeignKeyViolation`
    /// * ユーザーが既に申込を持つ場合は `UniqueViolation`
    pub async fn insert_enrollment(
        &self,
        event: CreateEnrollment,
    ) -> Result<Enrollment, RepositoryError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&event.user_id) {
            return Err(RepositoryError::ForeignKeyViolation {
                entity: "Enrollment",
                referenced: "User",
                id: event.user_id.value(),
            });
        }
        if tables
            .enrollments
            .values()
            .any(|row| row.user_id == event.user_id)
        {
            return Err(RepositoryError::UniqueViolation {
                entity: "Enrollment",
                owner: "User",
                id: event.user_id.value(),
            });
        }

        let id = EnrollmentId::new(next_value(&mut tables.sequences.enrollment, "Enrollment")?)
            .map_err(|_| RepositoryError::SequenceExhausted("Enrollment"))?;
        let now = Timestamp::new(get_utc_timestamp());
        let row = EnrollmentRow {
            id,
            name: event.name,
            cpf: event.cpf,
            birthday: event.birthday,
            phone: event.phone,
            user_id: event.user_id,
            created_at: now,
            updated_at: now,
        };
        tables.enrollments.insert(id, row.clone());
        Ok(row.into_enrollment(None))
    }

    /// 住所を追加
    ///
    /// # Errors
    ///
    /// * 申込が存在しない場合は `ForeignKeyViolation`
    /// * 申込が既に住所を持つ場合は `UniqueViolation`
    pub async fn insert_address(&self, event: CreateAddress) -> Result<Address, RepositoryError> {
        let mut tables = self.tables.write().await;
        if !tables.enrollments.contains_key(&event.enrollment_id) {
            return Err(RepositoryError::ForeignKeyViolation {
                entity: "Address",
                referenced: "Enrollment",
                id: event.enrollment_id.value(),
            });
        }
        if tables
            .addresses
            .values()
            .any(|address| address.enrollment_id == event.enrollment_id)
        {
            return Err(RepositoryError::UniqueViolation {
                entity: "Address",
                owner: "Enrollment",
                id: event.enrollment_id.value(),
            });
        }

        let id = AddressId::new(next_value(&mut tables.sequences.address, "Address")?)
            .map_err(|_| RepositoryError::SequenceExhausted("Address"))?;
        let now = Timestamp::new(get_utc_timestamp());
        let address = Address {
            id,
            cep: event.cep,
            street: event.street,
            city: event.city,
            state: event.state,
            number: event.number,
            neighborhood: event.neighborhood,
            address_detail: event.address_detail,
            enrollment_id: event.enrollment_id,
            created_at: now,
            updated_at: now,
        };
        tables.addresses.insert(id, address.clone());
        Ok(address)
    }

    /// チケット種別を追加
    pub async fn insert_ticket_type(
        &self,
        event: CreateTicketType,
    ) -> Result<TicketType, RepositoryError> {
        let mut tables = self.tables.write().await;
        let id = TicketTypeId::new(next_value(&mut tables.sequences.ticket_type, "TicketType")?)
            .map_err(|_| RepositoryError::SequenceExhausted("TicketType"))?;
        let now = Timestamp::new(get_utc_timestamp());
        let ticket_type = TicketType {
            id,
            name: event.name,
            price: event.price,
            is_remote: event.is_remote,
            includes_hotel: event.includes_hotel,
            created_at: now,
            updated_at: now,
        };
        tables.ticket_types.insert(id, ticket_type.clone());
        Ok(ticket_type)
    }

    /// チケットを追加
    ///
    /// # Errors
    ///
    /// 申込またはチケット種別が存在しない場合は `ForeignKeyViolation`
    pub async fn insert_ticket(&self, event: CreateTicket) -> Result<Ticket, RepositoryError> {
        let mut tables = self.tables.write().await;
        if !tables.enrollments.contains_key(&event.enrollment_id) {
            return Err(RepositoryError::ForeignKeyViolation {
                entity: "Ticket",
                referenced: "Enrollment",
                id: event.enrollment_id.value(),
            });
        }
        let ticket_type = tables
            .ticket_types
            .get(&event.ticket_type_id)
            .cloned()
            .ok_or(RepositoryError::ForeignKeyViolation {
                entity: "Ticket",
                referenced: "TicketType",
                id: event.ticket_type_id.value(),
            })?;

        let id = TicketId::new(next_value(&mut tables.sequences.ticket, "Ticket")?)
            .map_err(|_| RepositoryError::SequenceExhausted("Ticket"))?;
        let now = Timestamp::new(get_utc_timestamp());
        let row = TicketRow {
            id,
            enrollment_id: event.enrollment_id,
            ticket_type_id: event.ticket_type_id,
            status: event.status,
            created_at: now,
            updated_at: now,
        };
        tables.tickets.insert(id, row.clone());
        Ok(row.into_ticket(ticket_type))
    }

    /// ホテルを追加
    pub async fn insert_hotel(&self, event: CreateHotel) -> Result<Hotel, RepositoryError> {
        let mut tables = self.tables.write().await;
        let id = HotelId::new(next_value(&mut tables.sequences.hotel, "Hotel")?)
            .map_err(|_| RepositoryError::SequenceExhausted("Hotel"))?;
        let now = Timestamp::new(get_utc_timestamp());
        let hotel = Hotel {
            id,
            name: event.name,
            image: event.image,
            created_at: now,
            updated_at: now,
        };
        tables.hotels.insert(id, hotel.clone());
        Ok(hotel)
    }

    /// 部屋を追加
    ///
    /// # Errors
    ///
    /// ホテルが存在しない場合は `ForeignKeyViolation`
    pub async fn insert_room(&self, event: CreateRoom) -> Result<Room, RepositoryError> {
        let mut tables = self.tables.write().await;
        if !tables.hotels.contains_key(&event.hotel_id) {
            return Err(RepositoryError::ForeignKeyViolation {
                entity: "Room",
                referenced: "Hotel",
                id: event.hotel_id.value(),
            });
        }

        let id = RoomId::new(next_value(&mut tables.sequences.room, "Room")?)
            .map_err(|_| RepositoryError::SequenceExhausted("Room"))?;
        let now = Timestamp::new(get_utc_timestamp());
        let room = Room {
            id,
            name: event.name,
            capacity: event.capacity,
            hotel_id: event.hotel_id,
            created_at: now,
            updated_at: now,
        };
        tables.rooms.insert(id, room.clone());
        Ok(room)
    }

    /// 全テーブルの行を削除する
    ///
    /// 採番カウンタはリセットしないため、削除後も ID は再利用されない。
    pub async fn truncate(&self) {
        let mut tables = self.tables.write().await;
        tables.users.clear();
        tables.enrollments.clear();
        tables.addresses.clear();
        tables.ticket_types.clear();
        tables.tickets.clear();
        tables.hotels.clear();
        tables.rooms.clear();
    }
}
