//! Projection domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request for a compound-growth projection of a weekly savings habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    pub weekly_amount: Decimal,
    /// Annual return in percent, e.g. `7` for 7%.
    pub annual_rate_pct: Decimal,
    pub years: u32,
    #[serde(default)]
    pub starting_balance: Decimal,
}

/// Balance at the end of a projection year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: u32,
    pub balance: Decimal,
    pub contributed: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub future_value: Decimal,
    /// Starting balance plus every contribution.
    pub total_contributed: Decimal,
    pub interest_earned: Decimal,
    pub yearly: Vec<ProjectionPoint>,
}
