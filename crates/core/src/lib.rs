//! Livin Salti Core - Domain entities, services, and traits.
//!
//! This crate contains the budgeting, savings and projection logic for
//! Livin Salti. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod budget;
pub mod constants;
pub mod errors;
pub mod events;
pub mod projection;
pub mod savings;
pub mod settings;
pub mod sync;
pub mod utils;

// Re-export the allocator entry point
pub use budget::create_fallback_budget;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
