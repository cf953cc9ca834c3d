use crate::errors::Result;
use crate::savings::savings_model::{NewSaveEvent, ProfileStats, SaveEvent};
use async_trait::async_trait;

/// Trait for save ledger and profile persistence
#[async_trait]
pub trait SavingsRepositoryTrait: Send + Sync {
    async fn insert_save_event(&self, new_event: NewSaveEvent) -> Result<SaveEvent>;
    /// Lists a user's saves, oldest first.
    fn list_save_events(&self, user_id: &str) -> Result<Vec<SaveEvent>>;
    fn get_profile_stats(&self, user_id: &str) -> Result<Option<ProfileStats>>;
    async fn upsert_profile_stats(&self, stats: ProfileStats) -> Result<ProfileStats>;
}

/// Trait for savings service operations
#[async_trait]
pub trait SavingsServiceTrait: Send + Sync {
    async fn record_save(&self, new_event: NewSaveEvent) -> Result<SaveEvent>;
    fn list_saves(&self, user_id: &str) -> Result<Vec<SaveEvent>>;
    fn get_profile_stats(&self, user_id: &str) -> Result<Option<ProfileStats>>;
}
