//! Application handlers.
//!
//! Query handlers that read through the ports and assemble page view models.

pub mod equipment;
pub mod membership;
pub mod payments;

pub use equipment::{
    EquipmentView, GetEquipmentHandler, GetEquipmentQuery, ListEquipmentHandler,
    ListEquipmentQuery,
};
pub use membership::{
    GetMembershipOverviewHandler, GetMembershipOverviewQuery, GetMembershipOverviewResult,
    ListPlanOffersHandler, ListPlanOffersQuery, MembershipOverview, PlanCatalogView,
    PlanOfferView, UsageLine,
};
pub use payments::{PaymentsView, PendingDueView, SearchPaymentsHandler, SearchPaymentsQuery};
