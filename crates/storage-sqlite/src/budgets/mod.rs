//! SQLite storage implementation for weekly budgets.

mod model;
mod repository;

pub use model::{NewWeeklyBudgetDB, WeeklyBudgetDB};
pub use repository::BudgetRepository;
