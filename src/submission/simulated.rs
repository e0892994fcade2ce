//! Stand-in submission routine used until a real backend is wired up

use super::traits::Submitter;
use crate::state::{SubmissionReceipt, SubmissionRecord};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use uuid::Uuid;

/// Default simulated network delay
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Always succeeds after a fixed delay and logs the record
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, record: &SubmissionRecord) -> Result<SubmissionReceipt> {
        tokio::time::sleep(self.delay).await;

        let payload = serde_json::to_string(record)?;
        tracing::info!(%payload, "Form data submitted");

        Ok(SubmissionReceipt {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        })
    }
}
