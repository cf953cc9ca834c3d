//! SQLite storage implementation for the save ledger and profile stats.

mod model;
mod repository;

pub use model::{ProfileStatsDB, SaveEventDB};
pub use repository::SavingsRepository;
