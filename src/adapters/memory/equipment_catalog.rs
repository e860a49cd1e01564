//! In-memory equipment catalog.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::equipment::{Equipment, EquipmentStatus};
use crate::domain::foundation::{DomainError, EquipmentId, ErrorCode};
use crate::ports::EquipmentCatalog;

/// Equipment entries held in memory, ordered by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEquipmentCatalog {
    items: Arc<RwLock<BTreeMap<EquipmentId, Equipment>>>,
}

impl InMemoryEquipmentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = Equipment>) -> Self {
        let map = items.into_iter().map(|e| (e.id, e)).collect();
        Self {
            items: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn upsert(&self, equipment: Equipment) {
        self.items.write().await.insert(equipment.id, equipment);
    }

    /// Updates the availability of one machine.
    pub async fn set_status(
        &self,
        id: &EquipmentId,
        status: EquipmentStatus,
    ) -> Result<(), DomainError> {
        let mut items = self.items.write().await;
        let equipment = items.get_mut(id).ok_or_else(|| {
            DomainError::new(ErrorCode::EquipmentNotFound, "No such equipment")
                .with_detail("equipment_id", id.to_string())
        })?;
        equipment.status = status;
        Ok(())
    }
}

#[async_trait]
impl EquipmentCatalog for InMemoryEquipmentCatalog {
    async fn list(&self) -> Result<Vec<Equipment>, DomainError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &EquipmentId) -> Result<Option<Equipment>, DomainError> {
        Ok(self.items.read().await.get(id).cloned())
    }
}
