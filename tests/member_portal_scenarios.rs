//! End-to-end scenarios over the demo dataset.
//!
//! Each test seeds the in-memory adapters, pins the clock, and drives the
//! query handlers the way the portal pages do.

use std::sync::Arc;

use member_portal::adapters::{DemoData, FixedClock, InMemoryPortal};
use member_portal::application::{
    GetEquipmentHandler, GetEquipmentQuery, GetMembershipOverviewHandler,
    GetMembershipOverviewQuery, ListEquipmentHandler, ListEquipmentQuery, ListPlanOffersHandler,
    ListPlanOffersQuery, SearchPaymentsHandler, SearchPaymentsQuery,
};
use member_portal::domain::equipment::{EquipmentFilter, EquipmentStatus};
use member_portal::domain::foundation::{EquipmentId, MemberId, Timestamp};
use member_portal::domain::membership::{ExpiryStatus, MembershipError, PlanChangeKind, PlanTier};
use member_portal::domain::payments::{DateFilter, PaymentFilter, PaymentStatus};

// ════════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════════

fn portal() -> InMemoryPortal {
    InMemoryPortal::seeded(DemoData::load().unwrap())
}

fn clock_at(instant: &str) -> Arc<FixedClock> {
    Arc::new(FixedClock::at(Timestamp::parse_rfc3339("now", instant).unwrap()))
}

fn member() -> MemberId {
    DemoData::demo_member_id()
}

// ════════════════════════════════════════════════════════════════════════════════
// Dashboard
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn dashboard_late_on_april_eleventh() {
    let portal = portal();
    let handler = GetMembershipOverviewHandler::new(
        Arc::new(portal.memberships),
        clock_at("2025-04-11T23:59:59Z"),
    );

    let overview = handler
        .handle(GetMembershipOverviewQuery { member_id: member() })
        .await
        .unwrap();

    assert_eq!(overview.member_name, "Alex Johnson");
    assert_eq!(overview.tier, PlanTier::Premium);
    assert_eq!(overview.days_remaining, 3);
    assert_eq!(overview.expiry_status, ExpiryStatus::ExpiringSoon);
    assert_eq!(overview.countdown_label, "3 days left in your current plan");
    assert!((overview.elapsed_percentage - 93.33).abs() < 0.01);
    assert_eq!(overview.unread_notifications, 2);

    let training = overview
        .usage
        .iter()
        .find(|line| line.fraction_label == "1/2")
        .unwrap();
    assert_eq!(training.ratio, Some(50.0));
}

#[tokio::test]
async fn dashboard_counts_down_to_expiry() {
    let portal = portal();
    let memberships = Arc::new(portal.memberships);
    let start = FixedClock::at(Timestamp::parse_rfc3339("now", "2025-04-12T12:00:00Z").unwrap());

    let mut labels = Vec::new();
    for offset in 0..3 {
        let handler =
            GetMembershipOverviewHandler::new(memberships.clone(), Arc::new(start.advanced_by_days(offset)));
        let overview = handler
            .handle(GetMembershipOverviewQuery { member_id: member() })
            .await
            .unwrap();
        labels.push(overview.countdown_label);
    }

    assert_eq!(
        labels,
        vec![
            "2 days left in your current plan",
            "1 day left in your current plan",
            "Your plan has expired",
        ]
    );
}

#[tokio::test]
async fn dashboard_for_unknown_member_is_not_found() {
    let portal = portal();
    let handler = GetMembershipOverviewHandler::new(
        Arc::new(portal.memberships),
        clock_at("2025-04-11T12:00:00Z"),
    );
    let stranger = MemberId::new();

    let result = handler
        .handle(GetMembershipOverviewQuery { member_id: stranger })
        .await;
    assert_eq!(result.unwrap_err(), MembershipError::NotFound(stranger));
}

// ════════════════════════════════════════════════════════════════════════════════
// Subscription
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn premium_member_can_upgrade_to_elite() {
    let portal = portal();
    let handler = ListPlanOffersHandler::new(Arc::new(portal.memberships));

    let view = handler
        .handle(ListPlanOffersQuery {
            member_id: Some(member()),
        })
        .await
        .unwrap();

    assert_eq!(view.current_tier, Some(PlanTier::Premium));
    let elite = view.offers.iter().find(|o| o.offer.tier == PlanTier::Elite).unwrap();
    let change = elite.change.unwrap();
    assert_eq!(change.kind, PlanChangeKind::Upgrade);
    assert_eq!(elite.price_label, "$79.99");
}

// ════════════════════════════════════════════════════════════════════════════════
// Payments
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn payments_page_on_april_eleventh() {
    let portal = portal();
    let handler = SearchPaymentsHandler::new(
        Arc::new(portal.payments),
        clock_at("2025-04-11T09:00:00Z"),
    );

    let view = handler
        .handle(SearchPaymentsQuery {
            member_id: member(),
            filter: PaymentFilter::default(),
        })
        .await
        .unwrap();

    assert_eq!(view.history.len(), 5);
    assert_eq!(view.totals.total_paid_cents, 4999 * 4 + 14999);
    assert_eq!(view.totals.outstanding_cents, 4999 + 2500);
    assert!(view
        .pending_dues
        .iter()
        .all(|d| d.status == PaymentStatus::Upcoming));
}

#[tokio::test]
async fn protein_package_goes_overdue_after_the_fifteenth() {
    let portal = portal();
    let handler = SearchPaymentsHandler::new(
        Arc::new(portal.payments),
        clock_at("2025-04-16T09:00:00Z"),
    );

    let view = handler
        .handle(SearchPaymentsQuery {
            member_id: member(),
            filter: PaymentFilter::default(),
        })
        .await
        .unwrap();

    let protein = view
        .pending_dues
        .iter()
        .find(|d| d.due.id.as_str() == "DUE-2025-0415")
        .unwrap();
    assert_eq!(protein.status, PaymentStatus::Overdue);
    assert_eq!(view.totals.overdue_cents, 2500);
}

#[tokio::test]
async fn recent_search_finds_march_and_april_membership_fees() {
    let portal = portal();
    let handler = SearchPaymentsHandler::new(
        Arc::new(portal.payments),
        clock_at("2025-04-09T09:00:00Z"),
    );

    let view = handler
        .handle(SearchPaymentsQuery {
            member_id: member(),
            filter: PaymentFilter::default()
                .with_search("monthly membership")
                .with_date(DateFilter::Recent),
        })
        .await
        .unwrap();

    let ids: Vec<_> = view.history.iter().map(|p| p.invoice_id.as_str()).collect();
    assert_eq!(ids, vec!["INV-2025-0412", "INV-2025-0312"]);
}

// ════════════════════════════════════════════════════════════════════════════════
// Equipment
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn available_filter_shows_smith_and_cable_machines() {
    let portal = portal();
    let handler = ListEquipmentHandler::new(Arc::new(portal.equipment));

    let views = handler
        .handle(ListEquipmentQuery {
            filter: EquipmentFilter::Status(EquipmentStatus::Available),
        })
        .await
        .unwrap();

    let names: Vec<_> = views.iter().map(|v| v.equipment.name.as_str()).collect();
    assert_eq!(names, vec!["Smith Machine", "Cable Crossover Machine"]);
}

#[tokio::test]
async fn smith_machine_has_six_steps() {
    let portal = portal();
    let handler = GetEquipmentHandler::new(Arc::new(portal.equipment));

    let view = handler
        .handle(GetEquipmentQuery {
            id: EquipmentId::new(1),
        })
        .await
        .unwrap();

    assert_eq!(view.steps.len(), 6);
    assert_eq!(view.steps[0], "Adjust the safety stops.");
    assert_eq!(view.steps[5], "Rotate to re-hook when finished.");
}

#[tokio::test]
async fn machine_back_from_maintenance_becomes_usable() {
    let portal = portal();
    let catalog = Arc::new(portal.equipment);
    catalog
        .set_status(&EquipmentId::new(3), EquipmentStatus::Available)
        .await
        .unwrap();

    let view = GetEquipmentHandler::new(catalog)
        .handle(GetEquipmentQuery {
            id: EquipmentId::new(3),
        })
        .await
        .unwrap();
    assert!(view.usable);
    assert_eq!(view.status_label, "Available");
}
