//! Configuration handling for the contact form

use crate::state::FormLayout;
use crate::submission::SimulatedSubmitter;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment override for the simulated submission delay
const SUBMIT_DELAY_ENV: &str = "SNEKKER_KONTAKT_SUBMIT_DELAY_MS";

const DEFAULT_BUSINESS_NAME: &str = "Engeli Godø A · Snekker Eiksmarka";
const DEFAULT_BUSINESS_PHONE: &str = "+47 912 34 567";
const DEFAULT_BUSINESS_EMAIL: &str = "post@engeligodo.no";

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Shown in the header and the startup log line
    pub business_name: Option<String>,
    /// Phone number in the contact bar
    pub business_phone: Option<String>,
    /// Email address in the contact bar
    pub business_email: Option<String>,
    /// Simulated submission delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Give up on a submission after this many seconds (unbounded when unset)
    pub submit_timeout_secs: Option<u64>,
    /// Register the analytics sink
    pub analytics_enabled: Option<bool>,
    /// Block submission while any field fails validation
    pub validate_on_submit: Option<bool>,
    /// Render the optional address field
    pub show_address: Option<bool>,
    /// Render the optional site visit checkbox
    pub show_site_visit: Option<bool>,
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("no", "engeli", "snekker-kontakt")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                config = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "Loaded config");
            }
        }

        if let Ok(raw) = std::env::var(SUBMIT_DELAY_ENV) {
            match raw.parse::<u64>() {
                Ok(ms) => config.submit_delay_ms = Some(ms),
                Err(err) => tracing::warn!("Ignoring {SUBMIT_DELAY_ENV}={raw:?}: {err}"),
            }
        }

        Ok(config)
    }

    pub fn business_name(&self) -> &str {
        self.business_name.as_deref().unwrap_or(DEFAULT_BUSINESS_NAME)
    }

    pub fn business_phone(&self) -> &str {
        self.business_phone
            .as_deref()
            .unwrap_or(DEFAULT_BUSINESS_PHONE)
    }

    pub fn business_email(&self) -> &str {
        self.business_email
            .as_deref()
            .unwrap_or(DEFAULT_BUSINESS_EMAIL)
    }

    /// `tel:` link for the business phone, whitespace removed
    pub fn tel_href(&self) -> String {
        let digits: String = self
            .business_phone()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("tel:{digits}")
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.business_email())
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| SimulatedSubmitter::default().delay())
    }

    pub fn submit_timeout(&self) -> Option<Duration> {
        self.submit_timeout_secs.map(Duration::from_secs)
    }

    pub fn analytics_enabled(&self) -> bool {
        self.analytics_enabled.unwrap_or(false)
    }

    pub fn validate_on_submit(&self) -> bool {
        self.validate_on_submit.unwrap_or(false)
    }

    pub fn form_layout(&self) -> FormLayout {
        FormLayout {
            show_address: self.show_address.unwrap_or(true),
            show_site_visit: self.show_site_visit.unwrap_or(true),
        }
    }
}
