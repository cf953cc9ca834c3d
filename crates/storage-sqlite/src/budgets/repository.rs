use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{NewWeeklyBudgetDB, WeeklyBudgetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::weekly_budgets;
use salti_core::budget::{BudgetRepositoryTrait, NewSavedBudget, SavedBudget};
use salti_core::Result;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

fn to_domain(rows: Vec<WeeklyBudgetDB>) -> Result<Vec<SavedBudget>> {
    rows.into_iter()
        .map(|row| SavedBudget::try_from(row).map_err(Into::into))
        .collect()
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    async fn upsert_budget(&self, new_budget: NewSavedBudget) -> Result<SavedBudget> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SavedBudget> {
                let now = Utc::now().naive_utc();
                let row =
                    NewWeeklyBudgetDB::from_domain(Uuid::new_v4().to_string(), &new_budget, now)?;

                // Replacing keeps the original id and created_at of the week's row.
                let saved = diesel::insert_into(weekly_budgets::table)
                    .values(&row)
                    .on_conflict((weekly_budgets::user_id, weekly_budgets::week_start))
                    .do_update()
                    .set((
                        weekly_budgets::profile.eq(&row.profile),
                        weekly_budgets::input_json.eq(&row.input_json),
                        weekly_budgets::result_json.eq(&row.result_json),
                        weekly_budgets::updated_at.eq(now),
                    ))
                    .returning(WeeklyBudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;

                Ok(SavedBudget::try_from(saved)?)
            })
            .await
    }

    fn get_budget(&self, user_id: &str, week_start: NaiveDate) -> Result<Option<SavedBudget>> {
        let mut conn = get_connection(&self.pool)?;
        let row = weekly_budgets::table
            .filter(weekly_budgets::user_id.eq(user_id))
            .filter(weekly_budgets::week_start.eq(week_start))
            .select(WeeklyBudgetDB::as_select())
            .first::<WeeklyBudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        match row {
            Some(row) => Ok(Some(SavedBudget::try_from(row)?)),
            None => Ok(None),
        }
    }

    fn list_budgets(&self, user_id: &str) -> Result<Vec<SavedBudget>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = weekly_budgets::table
            .filter(weekly_budgets::user_id.eq(user_id))
            .order(weekly_budgets::week_start.desc())
            .select(WeeklyBudgetDB::as_select())
            .load::<WeeklyBudgetDB>(&mut conn)
            .map_err(StorageError::from)?;
        to_domain(rows)
    }

    async fn delete_budget(&self, user_id: &str, week_start: NaiveDate) -> Result<usize> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    weekly_budgets::table
                        .filter(weekly_budgets::user_id.eq(user_id))
                        .filter(weekly_budgets::week_start.eq(week_start)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
