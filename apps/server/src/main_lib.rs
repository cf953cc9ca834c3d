use std::sync::Arc;

use crate::{analytics::select_sink, config::Config};
use salti_core::{
    budget::{BudgetService, BudgetServiceTrait},
    savings::{SavingsService, SavingsServiceTrait},
    settings::FeatureFlags,
    sync::{ProfileSyncService, ProfileSyncServiceTrait},
};
use salti_storage_sqlite::{
    budgets::BudgetRepository,
    db::{self, write_actor},
    savings::SavingsRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub savings_service: Arc<dyn SavingsServiceTrait>,
    pub profile_sync_service: Arc<dyn ProfileSyncServiceTrait>,
    pub flags: Arc<FeatureFlags>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SALTI_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let flags = Arc::new(config.flags.clone());
    let analytics = select_sink(&flags, config.platform);
    tracing::info!(
        "Platform {:?}, analytics {}",
        config.platform,
        if flags.analytics_enabled_for(config.platform) {
            "enabled"
        } else {
            "disabled"
        }
    );

    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let budget_service = Arc::new(BudgetService::new(budget_repository, analytics.clone()));

    let savings_repository = Arc::new(SavingsRepository::new(pool.clone(), writer.clone()));
    let savings_service = Arc::new(SavingsService::new(
        savings_repository.clone(),
        analytics.clone(),
    ));
    let profile_sync_service = Arc::new(ProfileSyncService::new(
        savings_repository,
        analytics,
        flags.clone(),
        config.sync_policy.clone(),
    ));

    Ok(Arc::new(AppState {
        budget_service,
        savings_service,
        profile_sync_service,
        flags,
    }))
}
