//! Server-side analytics sink.
//!
//! Events are written to the `analytics` tracing target, where a log shipper
//! can forward them.

use std::sync::Arc;

use salti_core::events::{AnalyticsEvent, AnalyticsSink, NoOpAnalyticsSink};
use salti_core::settings::{FeatureFlags, Platform};

#[derive(Clone, Default)]
pub struct LogAnalyticsSink;

impl AnalyticsSink for LogAnalyticsSink {
    fn track(&self, event: AnalyticsEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => tracing::info!(
                target: "analytics",
                event = event.name(),
                user_id = event.user_id(),
                %payload
            ),
            Err(e) => tracing::warn!(
                target: "analytics",
                event = event.name(),
                "Failed to serialize analytics event: {}",
                e
            ),
        }
    }
}

/// Picks the logging sink when analytics is on for a native platform,
/// otherwise the no-op sink.
pub fn select_sink(flags: &FeatureFlags, platform: Platform) -> Arc<dyn AnalyticsSink> {
    if flags.analytics_enabled_for(platform) {
        Arc::new(LogAnalyticsSink)
    } else {
        Arc::new(NoOpAnalyticsSink)
    }
}
