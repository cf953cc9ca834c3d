use crate::budget::budget_model::{BudgetResult, FallbackInput, NewSavedBudget, SavedBudget};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for weekly budget persistence
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Stores a budget, replacing any existing one for the same user and week.
    async fn upsert_budget(&self, new_budget: NewSavedBudget) -> Result<SavedBudget>;
    fn get_budget(&self, user_id: &str, week_start: NaiveDate) -> Result<Option<SavedBudget>>;
    /// Lists a user's budgets, newest week first.
    fn list_budgets(&self, user_id: &str) -> Result<Vec<SavedBudget>>;
    async fn delete_budget(&self, user_id: &str, week_start: NaiveDate) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn preview_budget(&self, input: &FallbackInput) -> BudgetResult;
    async fn generate_weekly_budget(
        &self,
        user_id: &str,
        week_of: NaiveDate,
        input: FallbackInput,
    ) -> Result<SavedBudget>;
    fn get_weekly_budget(&self, user_id: &str, week_of: NaiveDate) -> Result<Option<SavedBudget>>;
    fn list_weekly_budgets(&self, user_id: &str) -> Result<Vec<SavedBudget>>;
    async fn delete_weekly_budget(&self, user_id: &str, week_of: NaiveDate) -> Result<usize>;
}
