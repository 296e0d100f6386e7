//! UseCase: ホテル一覧の取得
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ListHotelsUseCase::execute() メソッド
//! - 閲覧資格の確認後にホテル一覧が返されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：ホテルあり、ホテルなし（空リスト）
//! - 異常系：申込なし、チケットなし、条件を満たさないチケット
//! - 冪等性：同じ状態で繰り返し呼び出しても同じ結果

use std::sync::Arc;

use crate::domain::{EnrollmentRepository, Hotel, HotelRepository, TicketRepository, UserId};

use super::{error::HotelError, hotel_access::HotelAccessGuard};

/// ホテル一覧取得のユースケース
pub struct ListHotelsUseCase {
    guard: HotelAccessGuard,
    hotel_repository: Arc<dyn HotelRepository>,
}

impl ListHotelsUseCase {
    /// 新しい ListHotelsUseCase を作成
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

    /// ホテル一覧取得を実行
    ///
    /// 閲覧資格を確認した後、全てのホテルを返す。チケットの情報は結果に含めない。
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<Hotel>, HotelError> {
        self.guard.verify(user_id).await?;

        let hotels = self.hotel_repository.find_all().await?;
        Ok(hotels)
    }
}
