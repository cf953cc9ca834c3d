use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use super::budget_allocator::create_fallback_budget;
use super::budget_model::{BudgetResult, FallbackInput, NewSavedBudget, SavedBudget};
use super::budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::Result;
use crate::events::{AnalyticsEvent, AnalyticsSink};
use crate::utils::time_utils::week_start_for;
use crate::utils::validation::require_user_id;

/// Service for generating and storing weekly budgets
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl BudgetService {
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            repository,
            analytics,
        }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn preview_budget(&self, input: &FallbackInput) -> BudgetResult {
        create_fallback_budget(input)
    }

    async fn generate_weekly_budget(
        &self,
        user_id: &str,
        week_of: NaiveDate,
        input: FallbackInput,
    ) -> Result<SavedBudget> {
        let user_id = require_user_id(user_id)?;
        let week_start = week_start_for(week_of);
        let result = create_fallback_budget(&input);
        debug!(
            "Generated {} budget for user {} week {}: savings {}, {} categories",
            input.profile,
            user_id,
            week_start,
            result.weekly_budget.savings_target,
            result.weekly_budget.categories.len()
        );

        let saved = self
            .repository
            .upsert_budget(NewSavedBudget {
                user_id: user_id.to_string(),
                week_start,
                profile: input.profile,
                input,
                result,
            })
            .await?;

        self.analytics.track(AnalyticsEvent::budget_generated(
            saved.user_id.clone(),
            saved.week_start,
            saved.profile,
            saved.result.weekly_budget.savings_target,
        ));
        Ok(saved)
    }

    fn get_weekly_budget(&self, user_id: &str, week_of: NaiveDate) -> Result<Option<SavedBudget>> {
        let user_id = require_user_id(user_id)?;
        self.repository.get_budget(user_id, week_start_for(week_of))
    }

    fn list_weekly_budgets(&self, user_id: &str) -> Result<Vec<SavedBudget>> {
        let user_id = require_user_id(user_id)?;
        self.repository.list_budgets(user_id)
    }

    async fn delete_weekly_budget(&self, user_id: &str, week_of: NaiveDate) -> Result<usize> {
        let user_id = require_user_id(user_id)?;
        self.repository
            .delete_budget(user_id, week_start_for(week_of))
            .await
    }
}
