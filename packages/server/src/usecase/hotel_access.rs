//! UseCase: ホテル閲覧資格の確認
//!
//! ホテル一覧・ホテル詳細の両方で共有されるゲート。
//! 申込 → チケット → 閲覧条件の順に確認し、条件を満たしたチケットを返します。

use std::sync::Arc;

use crate::domain::{
    EnrollmentRepository, HotelAccess, Ticket, TicketRepository, UserId,
};

use super::error::{HotelError, MissingResource};

/// ホテル閲覧資格のゲート
pub struct HotelAccessGuard {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

impl HotelAccessGuard {
    /// 新しい HotelAccessGuard を作成
    pub fn new(
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
    ) -> Self {
        Self {
            enrollment_repository,
            ticket_repository,
        }
    }

    /// ユーザーの閲覧資格を確認
    ///
    /// # Returns
    ///
    /// * `Ok(Ticket)` - 条件を満たしたチケット
    /// * `Err(HotelError::NotFound)` - 申込またはチケットが存在しない
    /// * `Err(HotelError::CannotFindAValidTicketToGetHotel)` - チケットが条件を満たさない
    pub async fn verify(&self, user_id: UserId) -> Result<Ticket, HotelError> {
        // 1. 申込
        let enrollment = self
            .enrollment_repository
            .find_with_address_by_user_id(user_id)
            .await?
            .ok_or(HotelError::NotFound(MissingResource::Enrollment))?;

        // 2. チケット（チケット種別を含む）
        let ticket = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.id)
            .await?
            .ok_or(HotelError::NotFound(MissingResource::Ticket))?;

        // 3. 閲覧条件
        match ticket.hotel_access() {
            HotelAccess::Eligible => Ok(ticket),
            HotelAccess::Ineligible(reason) => {
                tracing::debug!(%user_id, ticket_id = %ticket.id, %reason, "hotel access denied");
                Err(HotelError::CannotFindAValidTicketToGetHotel(reason))
            }
        }
    }
}
