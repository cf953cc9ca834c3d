//! Analytics sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::AnalyticsEvent;

/// Trait for receiving analytics events.
///
/// Implementations forward events to an analytics backend. Core services
/// track events through this trait after successful mutations.
///
/// # Design Rules
///
/// - `track()` must be fast and non-blocking (no network calls, no DB writes)
/// - Failure to track must not affect domain operations (best-effort)
pub trait AnalyticsSink: Send + Sync {
    /// Track a single event.
    fn track(&self, event: AnalyticsEvent);

    /// Track multiple events.
    ///
    /// Default implementation calls `track()` for each event.
    fn track_batch(&self, events: Vec<AnalyticsEvent>) {
        for event in events {
            self.track(event);
        }
    }
}

/// No-op implementation for web builds, tests, or when analytics is disabled.
#[derive(Clone, Default)]
pub struct NoOpAnalyticsSink;

impl AnalyticsSink for NoOpAnalyticsSink {
    fn track(&self, _event: AnalyticsEvent) {}
}

/// Mock sink for testing - collects tracked events.
#[derive(Clone, Default)]
pub struct MockAnalyticsSink {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl MockAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl AnalyticsSink for MockAnalyticsSink {
    fn track(&self, event: AnalyticsEvent) {
        self.events.lock().unwrap().push(event);
    }
}
