//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every handler here is read-only.

pub mod handlers;

pub use handlers::{
    // Membership
    GetMembershipOverviewHandler, GetMembershipOverviewQuery, ListPlanOffersHandler,
    ListPlanOffersQuery, MembershipOverview, PlanCatalogView,
    // Payments
    PaymentsView, SearchPaymentsHandler, SearchPaymentsQuery,
    // Equipment
    EquipmentView, GetEquipmentHandler, GetEquipmentQuery, ListEquipmentHandler,
    ListEquipmentQuery,
};
