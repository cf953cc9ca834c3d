//! Analytics event types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::Profile;

/// Analytics events emitted by core services after successful mutations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    /// A weekly budget was generated and stored.
    BudgetGenerated {
        user_id: String,
        week_start: NaiveDate,
        profile: Profile,
        savings_target: f64,
    },

    /// A save event was recorded in the ledger.
    SaveRecorded { user_id: String, amount: Decimal },

    /// Profile stats were reconciled with the save ledger.
    ProfileSynced { user_id: String, attempts: u32 },
}

impl AnalyticsEvent {
    /// Creates a BudgetGenerated event.
    pub fn budget_generated(
        user_id: impl Into<String>,
        week_start: NaiveDate,
        profile: Profile,
        savings_target: f64,
    ) -> Self {
        Self::BudgetGenerated {
            user_id: user_id.into(),
            week_start,
            profile,
            savings_target,
        }
    }

    /// Creates a SaveRecorded event.
    pub fn save_recorded(user_id: impl Into<String>, amount: Decimal) -> Self {
        Self::SaveRecorded {
            user_id: user_id.into(),
            amount,
        }
    }

    /// Creates a ProfileSynced event.
    pub fn profile_synced(user_id: impl Into<String>, attempts: u32) -> Self {
        Self::ProfileSynced {
            user_id: user_id.into(),
            attempts,
        }
    }

    /// Stable event name reported to analytics backends.
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::BudgetGenerated { .. } => "budget_generated",
            AnalyticsEvent::SaveRecorded { .. } => "save_recorded",
            AnalyticsEvent::ProfileSynced { .. } => "profile_synced",
        }
    }

    pub fn user_id(&self) -> &str {
        match self {
            AnalyticsEvent::BudgetGenerated { user_id, .. }
            | AnalyticsEvent::SaveRecorded { user_id, .. }
            | AnalyticsEvent::ProfileSynced { user_id, .. } => user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_event_names_are_stable() {
        let week = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();
        assert_eq!(
            AnalyticsEvent::budget_generated("u1", week, Profile::Family, 80.0).name(),
            "budget_generated"
        );
        assert_eq!(
            AnalyticsEvent::save_recorded("u1", dec!(5)).name(),
            "save_recorded"
        );
        assert_eq!(
            AnalyticsEvent::profile_synced("u1", 2).name(),
            "profile_synced"
        );
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = AnalyticsEvent::profile_synced("u1", 2);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "profile_synced");
        assert_eq!(json["user_id"], "u1");
        assert_eq!(event.user_id(), "u1");
    }
}
