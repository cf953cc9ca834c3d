use thiserror::Error;

/// Errors surfaced by profile reconciliation once retries are exhausted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("Profile for user {user_id} did not match the save ledger after {attempts} attempt(s)")]
    VerificationFailed { user_id: String, attempts: u32 },

    #[error("Repository failure for user {user_id} after {attempts} attempt(s): {message}")]
    Repository {
        user_id: String,
        attempts: u32,
        message: String,
    },
}

impl SyncError {
    pub fn attempts(&self) -> u32 {
        match self {
            SyncError::VerificationFailed { attempts, .. } | SyncError::Repository { attempts, .. } => {
                *attempts
            }
        }
    }
}
