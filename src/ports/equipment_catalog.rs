//! Equipment catalog port.

use crate::domain::equipment::Equipment;
use crate::domain::foundation::{DomainError, EquipmentId};
use async_trait::async_trait;

/// Reader port for the equipment guide.
#[async_trait]
pub trait EquipmentCatalog: Send + Sync {
    /// All machines, ordered by id.
    async fn list(&self) -> Result<Vec<Equipment>, DomainError>;

    /// A single machine, or `None` if the id is unknown.
    async fn get(&self, id: &EquipmentId) -> Result<Option<Equipment>, DomainError>;
}
