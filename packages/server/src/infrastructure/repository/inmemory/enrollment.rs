//! InMemory Enrollment Repository 実装

use async_trait::async_trait;

use crate::domain::{Enrollment, EnrollmentRepository, RepositoryError, UserId};

use super::database::InMemoryDatabase;

/// インメモリ Enrollment Repository 実装
pub struct InMemoryEnrollmentRepository {
    db: InMemoryDatabase,
}

impl InMemoryEnrollmentRepository {
    /// 新しい InMemoryEnrollmentRepository を作成
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn find_with_address_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, RepositoryError> {
        let tables = self.db.read().await;
        let Some(row) = tables
            .enrollments
            .values()
            .find(|row| row.user_id == user_id)
        else {
            return Ok(None);
        };

        let address = tables
            .addresses
            .values()
            .find(|address| address.enrollment_id == row.id)
            .cloned();
        Ok(Some(row.clone().into_enrollment(address)))
    }
}
