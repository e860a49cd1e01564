//! Equipment query handlers.

mod list_equipment;

pub use list_equipment::{
    EquipmentView, GetEquipmentHandler, GetEquipmentQuery, ListEquipmentHandler,
    ListEquipmentQuery,
};
