//! Equipment domain module.
//!
//! Machines listed in the equipment guide, their availability, and the
//! parsed usage instructions.

mod machine;
mod errors;
mod instructions;

pub use machine::{Equipment, EquipmentFilter, EquipmentStatus};
pub use errors::EquipmentError;
pub use instructions::instruction_steps;
