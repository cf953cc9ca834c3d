//! Sync module - retry policy and profile reconciliation.

mod profile_sync;
mod retry;
mod sync_errors;


pub use profile_sync::{ProfileSyncService, ProfileSyncServiceTrait, SyncReport};
pub use retry::RetryPolicy;
pub use sync_errors::SyncError;
