use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{ProfileStatsDB, SaveEventDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{profile_stats, save_events};
use salti_core::savings::{NewSaveEvent, ProfileStats, SaveEvent, SavingsRepositoryTrait};
use salti_core::Result;

pub struct SavingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SavingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SavingsRepository { pool, writer }
    }
}

#[async_trait]
impl SavingsRepositoryTrait for SavingsRepository {
    async fn insert_save_event(&self, new_event: NewSaveEvent) -> Result<SaveEvent> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SaveEvent> {
                let row = SaveEventDB::from(SaveEvent {
                    id: Uuid::new_v4().to_string(),
                    user_id: new_event.user_id,
                    amount: new_event.amount,
                    note: new_event.note,
                    saved_on: new_event.saved_on,
                    created_at: Utc::now().naive_utc(),
                });

                let inserted = diesel::insert_into(save_events::table)
                    .values(&row)
                    .returning(SaveEventDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(SaveEvent::try_from(inserted)?)
            })
            .await
    }

    fn list_save_events(&self, user_id: &str) -> Result<Vec<SaveEvent>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = save_events::table
            .filter(save_events::user_id.eq(user_id))
            .order((save_events::saved_on.asc(), save_events::created_at.asc()))
            .select(SaveEventDB::as_select())
            .load::<SaveEventDB>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|row| SaveEvent::try_from(row).map_err(Into::into))
            .collect()
    }

    fn get_profile_stats(&self, user_id: &str) -> Result<Option<ProfileStats>> {
        let mut conn = get_connection(&self.pool)?;
        let row = profile_stats::table
            .find(user_id)
            .select(ProfileStatsDB::as_select())
            .first::<ProfileStatsDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        match row {
            Some(row) => Ok(Some(ProfileStats::try_from(row)?)),
            None => Ok(None),
        }
    }

    async fn upsert_profile_stats(&self, stats: ProfileStats) -> Result<ProfileStats> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ProfileStats> {
                let row = ProfileStatsDB::from(stats);
                let saved = diesel::insert_into(profile_stats::table)
                    .values(&row)
                    .on_conflict(profile_stats::user_id)
                    .do_update()
                    .set(&row)
                    .returning(ProfileStatsDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(ProfileStats::try_from(saved)?)
            })
            .await
    }
}
