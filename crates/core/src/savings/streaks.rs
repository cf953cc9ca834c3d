//! Streak calculation over the save ledger.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::savings_model::{ProfileStats, SaveEvent};
use crate::errors::{Result, ValidationError};

/// Current and longest streak, in days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
}

/// Computes streaks from save days.
///
/// A streak is a run of consecutive calendar days each holding at least one
/// save. The current streak is the run ending on the latest save day, and only
/// counts while that day is `today` or yesterday. Days after `today` are ignored.
pub fn compute_streaks(days: &[NaiveDate], today: NaiveDate) -> Streaks {
    let distinct: BTreeSet<NaiveDate> = days.iter().copied().filter(|d| *d <= today).collect();

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;
    for day in &distinct {
        run = match previous {
            Some(prev) if *day - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(*day);
    }

    let current = match previous {
        Some(last) if today - last <= Duration::days(1) => run,
        _ => 0,
    };

    Streaks { current, longest }
}

/// Derives the profile aggregates a user should have for `events`.
///
/// Fails when the ledger total does not fit in a `Decimal`.
pub fn derive_profile_stats(
    user_id: &str,
    events: &[SaveEvent],
    today: NaiveDate,
) -> Result<ProfileStats> {
    let total_saved = events
        .iter()
        .try_fold(Decimal::ZERO, |acc, event| acc.checked_add(event.amount))
        .ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "Total saved for user {} exceeds the supported range",
                user_id
            ))
        })?;
    let days: Vec<NaiveDate> = events.iter().map(|event| event.saved_on).collect();
    let streaks = compute_streaks(&days, today);
    let last_save_on = days.iter().copied().filter(|d| *d <= today).max();

    Ok(ProfileStats {
        user_id: user_id.to_string(),
        total_saved,
        save_count: events.len() as u32,
        current_streak: streaks.current,
        longest_streak: streaks.longest,
        last_save_on,
        updated_at: Utc::now().naive_utc(),
    })
}
