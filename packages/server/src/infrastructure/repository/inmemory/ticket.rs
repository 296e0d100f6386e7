//! InMemory Ticket Repository 実装

use async_trait::async_trait;

use crate::domain::{EnrollmentId, RepositoryError, Ticket, TicketRepository};

use super::database::InMemoryDatabase;

/// インメモリ Ticket Repository 実装
pub struct InMemoryTicketRepository {
    db: InMemoryDatabase,
}

impl InMemoryTicketRepository {
    /// 新しい InMemoryTicketRepository を作成
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, RepositoryError> {
        let tables = self.db.read().await;
        // ID 昇順で最初に見つかったチケット
        let Some(row) = tables
            .tickets
            .values()
            .find(|row| row.enrollment_id == enrollment_id)
        else {
            return Ok(None);
        };

        let ticket_type = tables.ticket_types.get(&row.ticket_type_id).cloned().ok_or(
            RepositoryError::ForeignKeyViolation {
                entity: "Ticket",
                referenced: "TicketType",
                id: row.ticket_type_id.value(),
            },
        )?;
        Ok(Some(row.clone().into_ticket(ticket_type)))
    }
}
