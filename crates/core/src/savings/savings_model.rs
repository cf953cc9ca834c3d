//! Savings ledger domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single recorded save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveEvent {
    pub id: String,
    pub user_id: String,
    pub amount: Decimal,
    pub note: Option<String>,
    /// Calendar day the save counts towards for streaks.
    pub saved_on: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSaveEvent {
    pub user_id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub note: Option<String>,
    pub saved_on: NaiveDate,
}

/// Aggregates stored on the user's profile, derived from the save ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub user_id: String,
    pub total_saved: Decimal,
    pub save_count: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_save_on: Option<NaiveDate>,
    pub updated_at: NaiveDateTime,
}

impl ProfileStats {
    /// Compares the ledger-derived fields, ignoring `updated_at`.
    pub fn matches(&self, other: &ProfileStats) -> bool {
        self.user_id == other.user_id
            && self.total_saved == other.total_saved
            && self.save_count == other.save_count
            && self.current_streak == other.current_streak
            && self.longest_streak == other.longest_streak
            && self.last_save_on == other.last_save_on
    }
}
