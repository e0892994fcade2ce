//! Trait abstractions for the form's external collaborators

use super::analytics::AnalyticsEvent;
use crate::state::{SubmissionReceipt, SubmissionRecord};
use anyhow::Result;
use async_trait::async_trait;

/// Delivers a submission record to whatever backend handles enquiries
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver the record. Resolves once the backend has accepted or refused it.
    async fn submit(&self, record: &SubmissionRecord) -> Result<SubmissionReceipt>;
}

/// Optional reporting hook. Must not fail the caller.
#[cfg_attr(test, mockall::automock)]
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &AnalyticsEvent);
}
