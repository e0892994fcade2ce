//! Submission routine and analytics sink
//!
//! The contact form talks to both through traits so that tests and
//! integrators can swap the shipped implementations.

mod analytics;
mod simulated;
mod traits;

pub use analytics::{AnalyticsEvent, TracingAnalytics};
pub use simulated::SimulatedSubmitter;
pub use traits::{AnalyticsSink, Submitter};

#[cfg(test)]
pub use traits::{MockAnalyticsSink, MockSubmitter};
