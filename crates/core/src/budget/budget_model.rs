//! Budget domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Household profile selecting the allocation policy.
///
/// Unknown profile names deserialize to [`Profile::Student`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Profile {
    #[default]
    Student,
    Family,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Student => "student",
            Profile::Family => "family",
        }
    }

    /// Returns the allocation policy for this profile.
    pub fn policy(&self) -> &'static AllocationPolicy {
        match self {
            Profile::Student => &STUDENT_POLICY,
            Profile::Family => &FAMILY_POLICY,
        }
    }
}

impl From<&str> for Profile {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "family" => Profile::Family,
            _ => Profile::Student,
        }
    }
}

impl From<String> for Profile {
    fn from(value: String) -> Self {
        Profile::from(value.as_str())
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentages (as fractions of 1) driving the weekly split.
///
/// `groceries`, `transport`, `discretionary` and `buffer` split the remainder
/// left after obligations and savings. The caps and savings bounds are
/// fractions of weekly income.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationPolicy {
    pub groceries: f64,
    pub transport: f64,
    pub discretionary: f64,
    pub buffer: f64,
    pub grocery_cap: f64,
    pub discretionary_cap: f64,
    pub save_floor: f64,
    pub save_cap: f64,
}

pub const STUDENT_POLICY: AllocationPolicy = AllocationPolicy {
    groceries: 0.35,
    transport: 0.20,
    discretionary: 0.35,
    buffer: 0.10,
    grocery_cap: 0.22,
    discretionary_cap: 0.18,
    save_floor: 0.05,
    save_cap: 0.20,
};

pub const FAMILY_POLICY: AllocationPolicy = AllocationPolicy {
    groceries: 0.40,
    transport: 0.18,
    discretionary: 0.27,
    buffer: 0.15,
    grocery_cap: 0.28,
    discretionary_cap: 0.18,
    save_floor: 0.08,
    save_cap: 0.25,
};

/// A single budget entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Line {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Request for the rule-based weekly budget.
///
/// Every numeric field is coerced to a non-negative finite value before use,
/// so missing or negative values behave as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackInput {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub fixed_expenses: Vec<Line>,
    #[serde(default)]
    pub debt_minimums: Vec<Line>,
    #[serde(default)]
    pub savings_target: f64,
}

/// The categorized weekly plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBudget {
    pub income_weekly: f64,
    /// Savings actually reserved after constraints; may differ from the request.
    pub savings_target: f64,
    pub categories: Vec<Line>,
}

impl WeeklyBudget {
    /// Sum of every category amount (excluding savings).
    pub fn allocated_total(&self) -> f64 {
        self.categories.iter().map(|line| line.amount).sum()
    }

    /// Looks up a category by name.
    pub fn category(&self, name: &str) -> Option<&Line> {
        self.categories.iter().find(|line| line.name == name)
    }
}

/// Allocator output: the plan plus up to three advisory tips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResult {
    pub weekly_budget: WeeklyBudget,
    pub tips: Vec<String>,
}

/// A budget persisted for a user and week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBudget {
    pub id: String,
    pub user_id: String,
    /// Monday of the week this budget covers.
    pub week_start: NaiveDate,
    pub profile: Profile,
    pub input: FallbackInput,
    pub result: BudgetResult,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for storing a budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedBudget {
    pub user_id: String,
    pub week_start: NaiveDate,
    pub profile: Profile,
    pub input: FallbackInput,
    pub result: BudgetResult,
}
