//! Database models for weekly budgets.
//!
//! The allocator input and result are stored as JSON text so the row keeps
//! exactly what the user saw, even if allocation rules change later.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::errors::StorageError;
use salti_core::budget::{NewSavedBudget, Profile, SavedBudget};

/// Database model for a stored weekly budget
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::weekly_budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WeeklyBudgetDB {
    pub id: String,
    pub user_id: String,
    pub week_start: NaiveDate,
    pub profile: String,
    pub input_json: String,
    pub result_json: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for inserting a weekly budget
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::weekly_budgets)]
pub struct NewWeeklyBudgetDB {
    pub id: String,
    pub user_id: String,
    pub week_start: NaiveDate,
    pub profile: String,
    pub input_json: String,
    pub result_json: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewWeeklyBudgetDB {
    pub fn from_domain(
        id: String,
        budget: &NewSavedBudget,
        now: NaiveDateTime,
    ) -> Result<Self, StorageError> {
        Ok(Self {
            id,
            user_id: budget.user_id.clone(),
            week_start: budget.week_start,
            profile: budget.profile.as_str().to_string(),
            input_json: serde_json::to_string(&budget.input)?,
            result_json: serde_json::to_string(&budget.result)?,
            created_at: now,
            updated_at: now,
        })
    }
}

impl TryFrom<WeeklyBudgetDB> for SavedBudget {
    type Error = StorageError;

    fn try_from(db: WeeklyBudgetDB) -> Result<Self, Self::Error> {
        let input = serde_json::from_str(&db.input_json).map_err(|e| {
            StorageError::CorruptValue(format!("budget {} input: {}", db.id, e))
        })?;
        let result = serde_json::from_str(&db.result_json).map_err(|e| {
            StorageError::CorruptValue(format!("budget {} result: {}", db.id, e))
        })?;
        Ok(SavedBudget {
            id: db.id,
            user_id: db.user_id,
            week_start: db.week_start,
            profile: Profile::from(db.profile.as_str()),
            input,
            result,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}
