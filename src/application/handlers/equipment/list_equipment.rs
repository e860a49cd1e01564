//! Equipment guide query handlers.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::domain::equipment::{Equipment, EquipmentError, EquipmentFilter};
use crate::domain::foundation::EquipmentId;
use crate::ports::EquipmentCatalog;

/// A machine card with its parsed instruction steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentView {
    pub equipment: Equipment,
    pub status_label: String,
    pub usable: bool,
    pub steps: Vec<String>,
}

impl From<Equipment> for EquipmentView {
    fn from(equipment: Equipment) -> Self {
        Self {
            status_label: equipment.status.label().to_string(),
            usable: equipment.status.is_usable(),
            steps: equipment.instruction_steps(),
            equipment,
        }
    }
}

/// Query for the equipment grid with the active filter button.
#[derive(Debug, Clone, Default)]
pub struct ListEquipmentQuery {
    pub filter: EquipmentFilter,
}

/// Handler for the equipment grid.
pub struct ListEquipmentHandler {
    catalog: Arc<dyn EquipmentCatalog>,
}

impl ListEquipmentHandler {
    pub fn new(catalog: Arc<dyn EquipmentCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        query: ListEquipmentQuery,
    ) -> Result<Vec<EquipmentView>, EquipmentError> {
        let items = self.catalog.list().await?;
        let views: Vec<EquipmentView> = items
            .into_iter()
            .filter(|e| query.filter.matches(e))
            .map(EquipmentView::from)
            .collect();

        debug!(filter = ?query.filter, count = views.len(), "equipment listed");
        Ok(views)
    }
}

/// Query for a single expanded machine card.
#[derive(Debug, Clone)]
pub struct GetEquipmentQuery {
    pub id: EquipmentId,
}

/// Handler for one machine.
pub struct GetEquipmentHandler {
    catalog: Arc<dyn EquipmentCatalog>,
}

impl GetEquipmentHandler {
    pub fn new(catalog: Arc<dyn EquipmentCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetEquipmentQuery) -> Result<EquipmentView, EquipmentError> {
        self.catalog
            .get(&query.id)
            .await?
            .map(EquipmentView::from)
            .ok_or(EquipmentError::NotFound(query.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::equipment::EquipmentStatus;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct MockCatalog {
        items: Vec<Equipment>,
        fail_read: bool,
    }

    impl MockCatalog {
        fn with_items(items: Vec<Equipment>) -> Self {
            Self {
                items,
                fail_read: false,
            }
        }

        fn failing() -> Self {
            Self {
                items: Vec::new(),
                fail_read: true,
            }
        }

        fn check(&self) -> Result<(), DomainError> {
            if self.fail_read {
                return Err(DomainError::new(
                    ErrorCode::DataSourceUnavailable,
                    "Simulated read failure",
                ));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl EquipmentCatalog for MockCatalog {
        async fn list(&self) -> Result<Vec<Equipment>, DomainError> {
            self.check()?;
            Ok(self.items.clone())
        }

        async fn get(&self, id: &EquipmentId) -> Result<Option<Equipment>, DomainError> {
            self.check()?;
            Ok(self.items.iter().find(|e| &e.id == id).cloned())
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn machine(id: u32, status: EquipmentStatus) -> Equipment {
        Equipment {
            id: EquipmentId::new(id),
            name: format!("Machine {}", id),
            description: "A machine".to_string(),
            status,
            usage_instructions: "1. Adjust the seat position. 2. Select your weight.".to_string(),
            video_url: Some(format!("#machine-{}-demo", id)),
        }
    }

    fn floor() -> Vec<Equipment> {
        vec![
            machine(1, EquipmentStatus::Available),
            machine(2, EquipmentStatus::Busy),
            machine(3, EquipmentStatus::Maintenance),
        ]
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn lists_all_machines_with_steps() {
        let handler = ListEquipmentHandler::new(Arc::new(MockCatalog::with_items(floor())));
        let views = handler.handle(ListEquipmentQuery::default()).await.unwrap();

        assert_eq!(views.len(), 3);
        assert_eq!(views[0].steps, vec!["Adjust the seat position.", "Select your weight."]);
        assert!(views[0].usable);
        assert_eq!(views[1].status_label, "In Use");
    }

    #[tokio::test]
    async fn filter_keeps_matching_status() {
        let handler = ListEquipmentHandler::new(Arc::new(MockCatalog::with_items(floor())));
        let views = handler
            .handle(ListEquipmentQuery {
                filter: EquipmentFilter::Status(EquipmentStatus::Maintenance),
            })
            .await
            .unwrap();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].equipment.id, EquipmentId::new(3));
    }

    #[tokio::test]
    async fn get_returns_single_machine() {
        let handler = GetEquipmentHandler::new(Arc::new(MockCatalog::with_items(floor())));
        let view = handler
            .handle(GetEquipmentQuery {
                id: EquipmentId::new(2),
            })
            .await
            .unwrap();
        assert_eq!(view.equipment.name, "Machine 2");
    }

    #[tokio::test]
    async fn get_unknown_machine_is_not_found() {
        let handler = GetEquipmentHandler::new(Arc::new(MockCatalog::with_items(floor())));
        let result = handler
            .handle(GetEquipmentQuery {
                id: EquipmentId::new(42),
            })
            .await;
        assert_eq!(result.unwrap_err(), EquipmentError::NotFound(EquipmentId::new(42)));
    }

    #[tokio::test]
    async fn fails_when_catalog_fails() {
        let handler = ListEquipmentHandler::new(Arc::new(MockCatalog::failing()));
        let result = handler.handle(ListEquipmentQuery::default()).await;
        assert!(matches!(result, Err(EquipmentError::Infrastructure(_))));
    }
}
