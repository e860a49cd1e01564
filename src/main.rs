//! Prints the demo member's portal views as JSON.

use std::process::ExitCode;
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};

use member_portal::adapters::{DemoData, FixedClock, InMemoryPortal, SystemClock};
use member_portal::application::{
    EquipmentView, GetMembershipOverviewHandler, GetMembershipOverviewQuery,
    ListEquipmentHandler, ListEquipmentQuery, ListPlanOffersHandler, ListPlanOffersQuery,
    MembershipOverview, PaymentsView, PlanCatalogView, SearchPaymentsHandler,
    SearchPaymentsQuery,
};
use member_portal::config::{ConfigError, PortalConfig};
use member_portal::domain::payments::PaymentFilter;
use member_portal::ports::Clock;
use member_portal::telemetry;

#[derive(Serialize)]
struct PortalSnapshot {
    overview: MembershipOverview,
    plans: PlanCatalogView,
    payments: PaymentsView,
    equipment: Vec<EquipmentView>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let (config, config_error) = match PortalConfig::load_validated() {
        Ok(config) => (config, None),
        Err(e) => (PortalConfig::default(), Some(e)),
    };

    if let Err(e) = telemetry::init_tracing(&config.logging) {
        eprintln!("failed to initialise tracing: {}", e);
    }
    if let Some(e) = config_error {
        warn!(error = %e, "configuration rejected; using defaults");
    }

    match run(&config).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "portal snapshot failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &PortalConfig) -> Result<String, Box<dyn std::error::Error>> {
    let clock: Arc<dyn Clock> = match config.clock.fixed_instant().map_err(ConfigError::from)? {
        Some(instant) => Arc::new(FixedClock::at(instant)),
        None => Arc::new(SystemClock),
    };
    info!(now = %clock.now().as_datetime(), "building portal snapshot");

    let portal = InMemoryPortal::seeded(DemoData::load()?);
    let member_id = DemoData::demo_member_id();

    let memberships = Arc::new(portal.memberships);
    let overview = GetMembershipOverviewHandler::new(memberships.clone(), clock.clone())
        .with_warning_threshold(config.membership.warning_threshold_days)
        .handle(GetMembershipOverviewQuery { member_id })
        .await?;

    let plans = ListPlanOffersHandler::new(memberships)
        .handle(ListPlanOffersQuery {
            member_id: Some(member_id),
        })
        .await?;

    let payments = SearchPaymentsHandler::new(Arc::new(portal.payments), clock)
        .with_recent_window(config.payments.recent_window_days)
        .handle(SearchPaymentsQuery {
            member_id,
            filter: PaymentFilter::default(),
        })
        .await?;

    let equipment = ListEquipmentHandler::new(Arc::new(portal.equipment))
        .handle(ListEquipmentQuery::default())
        .await?;

    let snapshot = PortalSnapshot {
        overview,
        plans,
        payments,
        equipment,
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}
