//! Equipment directory entries and the availability filter.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::{EquipmentId, ValidationError};

use super::instruction_steps;

/// Current availability of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    Available,
    Busy,
    Maintenance,
}

impl EquipmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "Available",
            EquipmentStatus::Busy => "In Use",
            EquipmentStatus::Maintenance => "Under Maintenance",
        }
    }

    /// Returns true if a member can walk up and use the machine.
    pub fn is_usable(&self) -> bool {
        matches!(self, EquipmentStatus::Available)
    }
}

impl FromStr for EquipmentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(EquipmentStatus::Available),
            "busy" => Ok(EquipmentStatus::Busy),
            "maintenance" => Ok(EquipmentStatus::Maintenance),
            _ => Err(ValidationError::unknown_variant("equipment_status", s)),
        }
    }
}

/// A machine in the equipment guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    pub description: String,
    pub status: EquipmentStatus,
    /// Numbered instructions in one string: "1. Adjust the seat. 2. ...".
    pub usage_instructions: String,
    pub video_url: Option<String>,
}

impl Equipment {
    /// Usage instructions as an ordered list of steps.
    pub fn instruction_steps(&self) -> Vec<String> {
        instruction_steps(&self.usage_instructions)
    }
}

/// Filter buttons above the equipment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "status")]
pub enum EquipmentFilter {
    #[default]
    All,
    Status(EquipmentStatus),
}

impl EquipmentFilter {
    pub fn matches(&self, equipment: &Equipment) -> bool {
        match self {
            EquipmentFilter::All => true,
            EquipmentFilter::Status(status) => equipment.status == *status,
        }
    }

    /// Filters `items`, keeping their order.
    pub fn apply<'a>(&self, items: &'a [Equipment]) -> Vec<&'a Equipment> {
        items.iter().filter(|e| self.matches(e)).collect()
    }
}

impl FromStr for EquipmentFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(EquipmentFilter::All);
        }
        s.parse().map(EquipmentFilter::Status)
    }
}
