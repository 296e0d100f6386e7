//! InMemory Hotel Repository 実装

use async_trait::async_trait;

use crate::domain::{Hotel, HotelId, HotelRepository, HotelWithRooms, RepositoryError};

use super::database::InMemoryDatabase;

/// インメモリ Hotel Repository 実装
pub struct InMemoryHotelRepository {
    db: InMemoryDatabase,
}

impl InMemoryHotelRepository {
    /// 新しい InMemoryHotelRepository を作成
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HotelRepository for InMemoryHotelRepository {
    async fn find_all(&self) -> Result<Vec<Hotel>, RepositoryError> {
        let tables = self.db.read().await;
        Ok(tables.hotels.values().cloned().collect())
    }

    async fn find_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, RepositoryError> {
        let tables = self.db.read().await;
        let Some(hotel) = tables.hotels.get(&hotel_id) else {
            return Ok(None);
        };

        let rooms = tables
            .rooms
            .values()
            .filter(|room| room.hotel_id == hotel_id)
            .cloned()
            .collect();
        Ok(Some(HotelWithRooms {
            hotel: hotel.clone(),
            rooms,
        }))
    }
}
