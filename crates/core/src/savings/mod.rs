//! Savings module - save ledger, streaks, services, and traits.

mod savings_model;
mod savings_service;
mod savings_traits;
mod streaks;


pub use savings_model::{NewSaveEvent, ProfileStats, SaveEvent};
pub use savings_service::SavingsService;
pub use savings_traits::{SavingsRepositoryTrait, SavingsServiceTrait};
pub use streaks::{compute_streaks, derive_profile_stats, Streaks};
