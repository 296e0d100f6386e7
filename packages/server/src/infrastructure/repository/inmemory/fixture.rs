//! テスト用のデータ投入ヘルパー

use std::sync::Arc;

use crate::domain::{
    CreateEnrollment, CreateTicket, CreateTicketType, CreateUser, EnrollmentId,
    EnrollmentRepository, HotelRepository, TicketRepository, TicketStatus, Timestamp, UserId,
};

use super::{
    InMemoryDatabase, InMemoryEnrollmentRepository, InMemoryHotelRepository,
    InMemoryTicketRepository,
};

pub(crate) struct Repositories {
    pub(crate) enrollment: Arc<dyn EnrollmentRepository>,
    pub(crate) ticket: Arc<dyn TicketRepository>,
    pub(crate) hotel: Arc<dyn HotelRepository>,
}

pub(crate) fn repositories(db: &InMemoryDatabase) -> Repositories {
    Repositories {
        enrollment: Arc::new(InMemoryEnrollmentRepository::new(db.clone())),
        ticket: Arc::new(InMemoryTicketRepository::new(db.clone())),
        hotel: Arc::new(InMemoryHotelRepository::new(db.clone())),
    }
}

pub(crate) async fn seed_user(db: &InMemoryDatabase) -> UserId {
    db.insert_user(CreateUser {
        email: "lulu@gmail.com".to_string(),
    })
    .await
    .unwrap()
    .id
}

pub(crate) async fn seed_enrolled_user(db: &InMemoryDatabase) -> (UserId, EnrollmentId) {
    let user_id = seed_user(db).await;
    let enrollment = db
        .insert_enrollment(CreateEnrollment {
            user_id,
            name: "lulu".to_string(),
            cpf: "77876066496".to_string(),
            birthday: Timestamp::new(0),
            phone: "(21)98559-9999".to_string(),
        })
        .await
        .unwrap();
    (user_id, enrollment.id)
}

/// 申込とチケットを持つユーザーを作成する
pub(crate) async fn seed_ticket_holder(
    db: &InMemoryDatabase,
    status: TicketStatus,
    is_remote: bool,
    includes_hotel: bool,
) -> UserId {
    let (user_id, enrollment_id) = seed_enrolled_user(db).await;
    let ticket_type = db
        .insert_ticket_type(CreateTicketType {
            name: "tipo1".to_string(),
            price: 22,
            is_remote,
            includes_hotel,
        })
        .await
        .unwrap();
    db.insert_ticket(CreateTicket {
        enrollment_id,
        ticket_type_id: ticket_type.id,
        status,
    })
    .await
    .unwrap();
    user_id
}
