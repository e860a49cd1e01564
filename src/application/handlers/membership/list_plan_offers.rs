//! ListPlanOffersHandler - Query handler for the subscription plan browser.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::MemberId;
use crate::domain::membership::{MembershipError, PlanChange, PlanOffer, PlanTier};
use crate::ports::MembershipReader;

/// Query to list plan offers, optionally relative to a member's current tier.
#[derive(Debug, Clone, Default)]
pub struct ListPlanOffersQuery {
    pub member_id: Option<MemberId>,
}

/// One card on the plan browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOfferView {
    pub offer: PlanOffer,
    pub name: String,
    pub price_label: String,
    pub is_current: bool,
    /// Present when the query named a member.
    pub change: Option<PlanChange>,
}

/// Plan browser contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCatalogView {
    pub current_tier: Option<PlanTier>,
    pub offers: Vec<PlanOfferView>,
}

/// Handler for the plan catalog.
pub struct ListPlanOffersHandler {
    reader: Arc<dyn MembershipReader>,
}

impl ListPlanOffersHandler {
    pub fn new(reader: Arc<dyn MembershipReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListPlanOffersQuery,
    ) -> Result<PlanCatalogView, MembershipError> {
        let current_tier = match query.member_id {
            Some(member_id) => {
                let record = self
                    .reader
                    .get_by_member(&member_id)
                    .await
                    .map_err(|e| MembershipError::infrastructure(e.to_string()))?
                    .ok_or(MembershipError::NotFound(member_id))?;
                Some(record.tier)
            }
            None => None,
        };

        let offers = PlanOffer::catalog()
            .into_iter()
            .map(|offer| PlanOfferView {
                name: offer.tier.display_name().to_string(),
                price_label: offer.price_label(),
                is_current: current_tier == Some(offer.tier),
                change: current_tier.map(|current| PlanChange::between(current, offer.tier)),
                offer,
            })
            .collect();

        debug!(current_tier = ?current_tier, "plan catalog listed");
        Ok(PlanCatalogView {
            current_tier,
            offers,
        })
    }
}
