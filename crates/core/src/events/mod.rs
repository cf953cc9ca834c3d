//! Analytics events module.
//!
//! Provides analytics event types and the sink trait for reporting them
//! after successful domain mutations. The composition root picks the sink
//! implementation (logging or no-op) once, based on platform and flags.

mod analytics_event;
mod sink;

pub use analytics_event::*;
pub use sink::*;
