//! UseCase: ホテル詳細（部屋一覧付き）の取得
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - GetHotelDetailUseCase::execute() メソッド
//! - パスから受け取ったホテル ID の検証、閲覧資格の確認、部屋一覧付きホテルの取得
//!
//! ### どのような状況を想定しているか
//! - 正常系：部屋あり、部屋なし（空リスト）
//! - 異常系：不正なホテル ID（0、負数、数値以外）、存在しないホテル、資格なし

use std::sync::Arc;

use crate::domain::{
    EnrollmentRepository, HotelId, HotelRepository, HotelWithRooms, TicketRepository, UserId,
};

use super::{
    error::{HotelError, MissingResource},
    hotel_access::HotelAccessGuard,
};

/// ホテル詳細取得のユースケース
pub struct GetHotelDetailUseCase {
    guard: HotelAccessGuard,
    hotel_repository: Arc<dyn HotelRepository>,
}

impl GetHotelDetailUseCase {
    /// 新しい GetHotelDetailUseCase を作成
    pub fn new(
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
        hotel_repository: Arc<dyn HotelRepository>,
    ) -> Self {
        Self {
            guard: HotelAccessGuard::new(enrollment_repository, ticket_repository),
            hotel_repository,
        }
    }

    /// ホテル詳細取得を実行
    ///
    /// # Arguments
    ///
    /// * `user_id` - 認証済みユーザーの ID
    /// * `raw_hotel_id` - パスで指定されたホテル ID（未検証の文字列）
    ///
    /// # Returns
    ///
    /// * `Ok(HotelWithRooms)` - ホテルと部屋一覧（部屋がなければ空）
    /// * `Err(HotelError)` - 取得失敗
    pub async fn execute(
        &self,
        user_id: UserId,
        raw_hotel_id: &str,
    ) -> Result<HotelWithRooms, HotelError> {
        // 0. ホテル ID の検証（ストアにアクセスする前に行う）
        let hotel_id: HotelId = raw_hotel_id.parse().map_err(|e| {
            tracing::debug!(raw_hotel_id, error = %e, "rejecting hotel id");
            HotelError::NotFound(MissingResource::Hotel)
        })?;

        // 1-3. 閲覧資格
        self.guard.verify(user_id).await?;

        // 4. 部屋一覧付きホテル
        self.hotel_repository
            .find_with_rooms(hotel_id)
            .await?
            .ok_or(HotelError::NotFound(MissingResource::Hotel))
    }
}
