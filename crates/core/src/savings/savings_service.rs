use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use super::savings_model::{NewSaveEvent, ProfileStats, SaveEvent};
use super::savings_traits::{SavingsRepositoryTrait, SavingsServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::events::{AnalyticsEvent, AnalyticsSink};
use crate::utils::validation::require_user_id;

/// Service for the save ledger
pub struct SavingsService {
    repository: Arc<dyn SavingsRepositoryTrait>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl SavingsService {
    pub fn new(
        repository: Arc<dyn SavingsRepositoryTrait>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            repository,
            analytics,
        }
    }
}

#[async_trait]
impl SavingsServiceTrait for SavingsService {
    async fn record_save(&self, mut new_event: NewSaveEvent) -> Result<SaveEvent> {
        new_event.user_id = require_user_id(&new_event.user_id)?.to_string();
        if new_event.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Save amount must be positive, got {}",
                new_event.amount
            ))
            .into());
        }

        let saved = self.repository.insert_save_event(new_event).await?;
        debug!(
            "Recorded save {} of {} for user {} on {}",
            saved.id, saved.amount, saved.user_id, saved.saved_on
        );
        self.analytics.track(AnalyticsEvent::save_recorded(
            saved.user_id.clone(),
            saved.amount,
        ));
        Ok(saved)
    }

    fn list_saves(&self, user_id: &str) -> Result<Vec<SaveEvent>> {
        self.repository.list_save_events(require_user_id(user_id)?)
    }

    fn get_profile_stats(&self, user_id: &str) -> Result<Option<ProfileStats>> {
        self.repository.get_profile_stats(require_user_id(user_id)?)
    }
}
