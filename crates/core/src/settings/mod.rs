//! Settings module - feature flags and platform capability.

mod settings_model;

pub use settings_model::{FeatureFlags, Platform};
