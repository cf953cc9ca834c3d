//! Database models for saves and profile stats.
//!
//! Decimal amounts are stored as TEXT to avoid float rounding.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;
use salti_core::savings::{ProfileStats, SaveEvent};

fn parse_amount(field: &str, raw: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(raw)
        .map_err(|e| StorageError::CorruptValue(format!("{} '{}': {}", field, raw, e)))
}

fn to_count(field: &str, raw: i32) -> Result<u32, StorageError> {
    u32::try_from(raw).map_err(|_| StorageError::CorruptValue(format!("{} is negative: {}", field, raw)))
}

/// Database model for a recorded save
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::save_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SaveEventDB {
    pub id: String,
    pub user_id: String,
    pub amount: String,
    pub note: Option<String>,
    pub saved_on: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl TryFrom<SaveEventDB> for SaveEvent {
    type Error = StorageError;

    fn try_from(db: SaveEventDB) -> Result<Self, Self::Error> {
        Ok(SaveEvent {
            amount: parse_amount("amount", &db.amount)?,
            id: db.id,
            user_id: db.user_id,
            note: db.note,
            saved_on: db.saved_on,
            created_at: db.created_at,
        })
    }
}

impl From<SaveEvent> for SaveEventDB {
    fn from(domain: SaveEvent) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            amount: domain.amount.to_string(),
            note: domain.note,
            saved_on: domain.saved_on,
            created_at: domain.created_at,
        }
    }
}

/// Database model for a user's profile stats
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::profile_stats)]
#[diesel(primary_key(user_id))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProfileStatsDB {
    pub user_id: String,
    pub total_saved: String,
    pub save_count: i32,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_save_on: Option<NaiveDate>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<ProfileStatsDB> for ProfileStats {
    type Error = StorageError;

    fn try_from(db: ProfileStatsDB) -> Result<Self, Self::Error> {
        Ok(ProfileStats {
            total_saved: parse_amount("total_saved", &db.total_saved)?,
            save_count: to_count("save_count", db.save_count)?,
            current_streak: to_count("current_streak", db.current_streak)?,
            longest_streak: to_count("longest_streak", db.longest_streak)?,
            user_id: db.user_id,
            last_save_on: db.last_save_on,
            updated_at: db.updated_at,
        })
    }
}

impl From<ProfileStats> for ProfileStatsDB {
    fn from(domain: ProfileStats) -> Self {
        let clamp = |n: u32| i32::try_from(n).unwrap_or(i32::MAX);
        Self {
            user_id: domain.user_id,
            total_saved: domain.total_saved.to_string(),
            save_count: clamp(domain.save_count),
            current_streak: clamp(domain.current_streak),
            longest_streak: clamp(domain.longest_streak),
            last_save_on: domain.last_save_on,
            updated_at: domain.updated_at,
        }
    }
}
