//! Membership query handlers.

mod get_membership_overview;
mod list_plan_offers;

pub use get_membership_overview::{
    GetMembershipOverviewHandler, GetMembershipOverviewQuery, GetMembershipOverviewResult,
    MembershipOverview, UsageLine,
};
pub use list_plan_offers::{
    ListPlanOffersHandler, ListPlanOffersQuery, PlanCatalogView, PlanOfferView,
};
