use async_trait::async_trait;
use tracing::debug;

use crate::domain::reservation::{Reservation, ReservationId, ReservationRepository};
use crate::domain::{DataAccessError, Entity};

/// インメモリ予約リポジトリ
///
/// 予約は挿入順のまま保持され、検索は先頭からの線形走査で行う。
#[derive(Debug, Default)]
pub struct InMemoryReservationRepository {
    entities: Vec<Reservation>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>, DataAccessError> {
        Ok(self.entities.iter().find(|e| e.id() == id).cloned())
    }

    async fn save(&mut self, entity: &Reservation) -> Result<bool, DataAccessError> {
        match self.entities.iter_mut().find(|e| e.id() == entity.id()) {
            Some(stored) => {
                *stored = entity.clone();
                debug!("{}を更新しました: {}", Reservation::ENTITY_NAME, entity.id());
                Ok(false)
            }
            None => {
                self.entities.push(entity.clone());
                debug!("{}を登録しました: {}", Reservation::ENTITY_NAME, entity.id());
                Ok(true)
            }
        }
    }
}
