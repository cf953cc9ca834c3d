//! Runtime feature flags and platform capability.
//!
//! Both are built once by the composition root and handed to the services
//! that need them. Nothing here is global.

use serde::{Deserialize, Serialize};

/// Platform the application is serving.
///
/// Native clients get the full analytics pipeline; web clients fall back to
/// the no-op variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Native,
    #[default]
    Web,
}

impl Platform {
    /// Maps a platform hint (`ios`, `android`, `native`, ...) to a capability.
    pub fn detect(hint: &str) -> Self {
        match hint.trim().to_ascii_lowercase().as_str() {
            "ios" | "android" | "native" => Platform::Native,
            _ => Platform::Web,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Platform::Native)
    }
}

/// Feature switches for optional behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFlags {
    /// Report analytics events.
    pub analytics: bool,
    /// Allow profile streak reconciliation against the save ledger.
    pub streak_protection: bool,
    /// Serve long-horizon savings projections.
    pub projections: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            analytics: true,
            streak_protection: true,
            projections: true,
        }
    }
}

impl FeatureFlags {
    /// Whether analytics should reach a real backend on this platform.
    pub fn analytics_enabled_for(&self, platform: Platform) -> bool {
        self.analytics && platform.is_native()
    }
}
