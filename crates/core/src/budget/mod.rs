//! Budget module - weekly allocator, domain models, services, and traits.

mod budget_allocator;
mod budget_model;
mod budget_service;
mod budget_traits;


#[cfg(test)]
mod budget_service_tests;

pub use budget_allocator::{clamp, create_fallback_budget, round_money};
pub use budget_model::{
    AllocationPolicy, BudgetResult, FallbackInput, Line, NewSavedBudget, Profile, SavedBudget,
    WeeklyBudget, FAMILY_POLICY, STUDENT_POLICY,
};
pub use budget_service::BudgetService;
pub use budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
