//! SQLite storage implementation for Livin Salti.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `salti-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for budgets and the save ledger
//! - Database-specific model types (with Diesel derives)
//!
//! Reads use pooled connections; every write goes through the single
//! writer actor in [`db::write_actor`].

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod budgets;
pub mod savings;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use budgets::BudgetRepository;
pub use savings::SavingsRepository;

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use salti_core::errors::{DatabaseError, Error, Result};
