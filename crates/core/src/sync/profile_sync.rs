//! Reconciles stored profile stats with the save ledger.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::retry::RetryPolicy;
use super::sync_errors::SyncError;
use crate::errors::{Error, Result};
use crate::events::{AnalyticsEvent, AnalyticsSink};
use crate::savings::{derive_profile_stats, ProfileStats, SavingsRepositoryTrait};
use crate::settings::FeatureFlags;
use crate::utils::validation::require_user_id;

/// Outcome of a successful sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub stats: ProfileStats,
    /// Attempts used, including the successful one.
    pub attempts: u32,
    /// Whether the stored stats had to be rewritten.
    pub changed: bool,
}

/// Why a single attempt failed.
#[derive(Debug)]
enum AttemptFailure {
    Mismatch,
    Repository(Error),
    /// The ledger itself cannot be summarised; retrying will not help.
    Rejected(Error),
}

impl std::fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptFailure::Mismatch => f.write_str("stored profile does not match ledger"),
            AttemptFailure::Repository(err) | AttemptFailure::Rejected(err) => {
                write!(f, "{}", err)
            }
        }
    }
}

impl From<Error> for AttemptFailure {
    fn from(err: Error) -> Self {
        AttemptFailure::Repository(err)
    }
}

#[async_trait]
pub trait ProfileSyncServiceTrait: Send + Sync {
    /// Rewrites the user's profile stats from the ledger and verifies the write.
    async fn force_profile_sync(&self, user_id: &str, today: NaiveDate) -> Result<SyncReport>;
}

pub struct ProfileSyncService {
    repository: Arc<dyn SavingsRepositoryTrait>,
    analytics: Arc<dyn AnalyticsSink>,
    flags: Arc<FeatureFlags>,
    policy: RetryPolicy,
}

impl ProfileSyncService {
    pub fn new(
        repository: Arc<dyn SavingsRepositoryTrait>,
        analytics: Arc<dyn AnalyticsSink>,
        flags: Arc<FeatureFlags>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            repository,
            analytics,
            flags,
            policy,
        }
    }

    async fn sync_once(
        &self,
        user_id: &str,
        today: NaiveDate,
        attempt: u32,
    ) -> std::result::Result<SyncReport, AttemptFailure> {
        let events = self.repository.list_save_events(user_id)?;
        let expected =
            derive_profile_stats(user_id, &events, today).map_err(AttemptFailure::Rejected)?;

        let current = self.repository.get_profile_stats(user_id)?;
        if let Some(stored) = current.filter(|stored| stored.matches(&expected)) {
            return Ok(SyncReport {
                stats: stored,
                attempts: attempt,
                changed: false,
            });
        }

        self.repository
            .upsert_profile_stats(expected.clone())
            .await?;

        match self.repository.get_profile_stats(user_id)? {
            Some(stored) if stored.matches(&expected) => Ok(SyncReport {
                stats: stored,
                attempts: attempt,
                changed: true,
            }),
            _ => Err(AttemptFailure::Mismatch),
        }
    }
}

#[async_trait]
impl ProfileSyncServiceTrait for ProfileSyncService {
    async fn force_profile_sync(&self, user_id: &str, today: NaiveDate) -> Result<SyncReport> {
        if !self.flags.streak_protection {
            return Err(Error::FeatureDisabled("streakProtection".to_string()));
        }
        let user_id = require_user_id(user_id)?;

        let attempts = self.policy.attempts();
        let outcome = self
            .policy
            .retry_when(
                |attempt| self.sync_once(user_id, today, attempt),
                |failure: &AttemptFailure| !matches!(failure, AttemptFailure::Rejected(_)),
            )
            .await;

        match outcome {
            Ok(report) => {
                info!(
                    "Profile sync for user {} finished after {} attempt(s), changed: {}",
                    user_id, report.attempts, report.changed
                );
                self.analytics.track(AnalyticsEvent::profile_synced(
                    user_id.to_string(),
                    report.attempts,
                ));
                Ok(report)
            }
            Err(AttemptFailure::Rejected(err)) => {
                warn!("Profile sync for user {} rejected: {}", user_id, err);
                Err(err)
            }
            Err(failure) => {
                warn!(
                    "Profile sync for user {} failed after {} attempt(s): {}",
                    user_id, attempts, failure
                );
                let err = match failure {
                    AttemptFailure::Mismatch => SyncError::VerificationFailed {
                        user_id: user_id.to_string(),
                        attempts,
                    },
                    AttemptFailure::Repository(cause) | AttemptFailure::Rejected(cause) => {
                        SyncError::Repository {
                            user_id: user_id.to_string(),
                            attempts,
                            message: cause.to_string(),
                        }
                    }
                };
                Err(err.into())
            }
        }
    }
}
